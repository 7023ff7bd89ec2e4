//! Project use cases: create, look up and delete projects on behalf of
//! an authenticated user.

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Project;
use crate::domain::ports::ProjectRepository;

/// Application service for project registration.
///
/// Generic over the repository port so the gRPC adapter, tests and any
/// future transport share the same rules: names are normalized and unique,
/// metadata is stamped here, and only the owner may read or delete a
/// project.
pub struct ProjectService<R> {
    repository: Arc<R>,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new project named `name` for `user_id`.
    ///
    /// Fails with [`DomainError::AlreadyExists`] when any user already
    /// holds the name, since names are unique across the store.
    pub async fn create(&self, user_id: &str, name: &str) -> DomainResult<Project> {
        let name = Project::normalize_name(name)?;

        if self.repository.find_by_name(&name).await?.is_some() {
            return Err(DomainError::AlreadyExists);
        }

        let stored = self.repository.create(&Project::new(user_id, &name)).await?;
        info!(project = %stored.id, user = user_id, "project created");
        Ok(stored)
    }

    /// Fetch one of `user_id`'s projects by name.
    pub async fn find_by_name(&self, user_id: &str, name: &str) -> DomainResult<Project> {
        let project = self
            .repository
            .find_by_name(name)
            .await?
            .ok_or(DomainError::NotFound)?;

        if !project.is_owned_by(user_id) {
            return Err(DomainError::Unauthorized);
        }

        Ok(project)
    }

    /// Delete one of `user_id`'s projects by id.
    pub async fn delete(&self, user_id: &str, id: &str) -> DomainResult<()> {
        let project = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)?;

        if !project.is_owned_by(user_id) {
            return Err(DomainError::Unauthorized);
        }

        self.repository.delete(id).await?;
        info!(project = id, user = user_id, "project deleted");
        Ok(())
    }
}
