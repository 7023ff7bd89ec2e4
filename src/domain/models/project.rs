//! Project domain model.
//!
//! A project is the unit of registration in agora: a named resource owned
//! by exactly one user. Names are unique across the store; the id is
//! assigned by the storage backend on creation.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Metadata;

/// Upper bound on a project name, after trimming.
pub const MAX_NAME_LEN: usize = 64;

/// A registered project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identity. Empty until the project has been persisted.
    pub id: String,
    /// Id of the owning user.
    pub user_id: String,
    /// Unique project name.
    pub name: String,
    /// Audit envelope stamped by the application layer.
    pub metadata: Metadata,
}

impl Project {
    /// Build a new, not-yet-persisted project owned by `user_id`.
    ///
    /// The caller is expected to have normalized the name first; see
    /// [`Project::normalize_name`].
    pub fn new(user_id: &str, name: &str) -> Self {
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            metadata: Metadata::new(user_id),
        }
    }

    /// Trim and validate a raw project name.
    ///
    /// Rejects empty (or whitespace-only) names and names longer than
    /// [`MAX_NAME_LEN`] characters.
    pub fn normalize_name(raw: &str) -> DomainResult<String> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "project name must not be empty".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "project name must not exceed {MAX_NAME_LEN} characters"
            )));
        }
        Ok(name.to_string())
    }

    /// Returns true if the given user owns this project.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
