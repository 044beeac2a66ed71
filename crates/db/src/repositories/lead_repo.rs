//! Repository for the `leads` table.
//!
//! Leads are persisted before any relay attempt; losing one to a flaky
//! integration is not acceptable, so the insert is the only fallible
//! step on the intake path.

use sqlx::PgPool;
use stylen_core::lead::{Lead, NewLead};
use stylen_core::types::EntityId;

use crate::models::lead::LeadRow;

/// Column list for `leads` queries.
const COLUMNS: &str = "id, full_name, phone, user_type, requirement, created_at";

/// Provides data access for captured leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Persist a new lead, returning the stored record.
    pub async fn insert(pool: &PgPool, lead: &NewLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (id, full_name, phone, user_type, requirement, created_at) \
             VALUES ($1, $2, $3, $4, $5, NOW()) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, LeadRow>(&query)
            .bind(EntityId::new_v4())
            .bind(&lead.full_name)
            .bind(&lead.phone)
            .bind(&lead.user_type)
            .bind(&lead.requirement)
            .fetch_one(pool)
            .await?;
        Ok(row.into_lead())
    }

    /// List captured leads, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, LeadRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(LeadRow::into_lead).collect())
    }
}
