//! Audit metadata attached to every persisted entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who created an entity and when it was created, updated and deleted.
///
/// Stamped by the application layer; callers never set these fields
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Fresh metadata for an entity created right now by `created_by`.
    pub fn new(created_by: &str) -> Self {
        Self {
            created_by: created_by.to_string(),
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

}
