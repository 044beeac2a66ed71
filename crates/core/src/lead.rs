//! Leads: append-only records of quote-request form submissions.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// A stored lead. Never mutated after creation; read back for the admin
/// listing and for CRM relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: EntityId,
    pub full_name: String,
    pub phone: String,
    /// Self-declared buyer type (dealer, fabricator, end customer, ...).
    pub user_type: String,
    pub requirement: String,
    pub created_at: Timestamp,
}

/// Fields captured from the public lead form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLead {
    pub full_name: String,
    pub phone: String,
    pub user_type: String,
    #[serde(default)]
    pub requirement: String,
}
