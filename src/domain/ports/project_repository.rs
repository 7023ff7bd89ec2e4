use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Project;

/// Repository port for project persistence operations.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Look a project up by its unique name.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Project>>;

    /// Look a project up by its store-assigned id.
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>>;

    /// Persist a new project and return it with the store-assigned id.
    async fn create(&self, project: &Project) -> DomainResult<Project>;

    /// Remove a project by id.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
