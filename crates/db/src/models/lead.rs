//! `leads` row model.

use sqlx::FromRow;
use stylen_core::lead::Lead;
use stylen_core::types::{EntityId, Timestamp};

/// A row from the `leads` table. Column names match the entity exactly;
/// the row struct still exists so no other crate touches wire shapes.
#[derive(Debug, Clone, FromRow)]
pub struct LeadRow {
    pub id: EntityId,
    pub full_name: String,
    pub phone: String,
    pub user_type: String,
    pub requirement: String,
    pub created_at: Timestamp,
}

impl LeadRow {
    pub fn into_lead(self) -> Lead {
        Lead {
            id: self.id,
            full_name: self.full_name,
            phone: self.phone,
            user_type: self.user_type,
            requirement: self.requirement,
            created_at: self.created_at,
        }
    }
}
