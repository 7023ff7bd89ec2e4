//! In-memory implementation of the `ProjectRepository` port.
//!
//! Used by unit and service-level tests, and handy for local development
//! without a Dgraph instance. Ids follow Dgraph's `0x…` uid shape so test
//! fixtures look like production data.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Project;
use crate::domain::ports::ProjectRepository;

/// Thread-safe map-backed project store.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: Mutex<HashMap<String, Project>>,
    next_id: AtomicU64,
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Project>> {
        let projects = self.projects.lock().expect("repository lock poisoned");
        Ok(projects.values().find(|p| p.name == name).cloned())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        let projects = self.projects.lock().expect("repository lock poisoned");
        Ok(projects.get(id).cloned())
    }

    async fn create(&self, project: &Project) -> DomainResult<Project> {
        let id = format!("0x{:x}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);

        let mut stored = project.clone();
        stored.id = id.clone();

        let mut projects = self.projects.lock().expect("repository lock poisoned");
        projects.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let mut projects = self.projects.lock().expect("repository lock poisoned");
        projects.remove(id).map(|_| ()).ok_or(DomainError::NotFound)
    }
}
