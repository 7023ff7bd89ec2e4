//! Dgraph implementation of the `ProjectRepository` port.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Project;
use crate::domain::ports::ProjectRepository;

use super::client::DgraphClient;
use super::models::{
    AddProjectData, DeleteProjectData, DgraphProject, GetProjectData, QueryProjectData,
};

const PROJECT_FIELDS: &str = "id name userId createdBy createdAt updatedAt deletedAt";

/// Repository for managing project persistence on Dgraph.
#[derive(Debug, Clone)]
pub struct DgraphProjectRepository {
    client: DgraphClient,
}

impl DgraphProjectRepository {
    pub fn new(client: DgraphClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectRepository for DgraphProjectRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Project>> {
        let query = format!(
            "query QueryProject($name: String!) {{ queryProject(filter: {{ name: {{ eq: $name }} }}, first: 1) {{ {PROJECT_FIELDS} }} }}"
        );

        let data: QueryProjectData = self
            .client
            .graphql(&query, json!({ "name": name }))
            .await?;

        Ok(data.query_project.into_iter().next().map(Into::into))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        let query = format!(
            "query GetProject($id: ID!) {{ getProject(id: $id) {{ {PROJECT_FIELDS} }} }}"
        );

        let data: GetProjectData = self.client.graphql(&query, json!({ "id": id })).await?;

        Ok(data.get_project.map(Into::into))
    }

    async fn create(&self, project: &Project) -> DomainResult<Project> {
        let query = format!(
            "mutation AddProject($input: [AddProjectInput!]!) {{ addProject(input: $input) {{ project {{ {PROJECT_FIELDS} }} }} }}"
        );
        let input = DgraphProject::from(project);

        let data: AddProjectData = self
            .client
            .graphql(&query, json!({ "input": [input] }))
            .await?;

        data.add_project
            .project
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| {
                DomainError::Storage("dgraph did not return the created project".to_string())
            })
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let query =
            "mutation DeleteProject($id: [ID!]) { deleteProject(filter: { id: $id }) { numUids } }";

        let data: DeleteProjectData = self
            .client
            .graphql(query, json!({ "id": [id] }))
            .await?;

        if data.delete_project.num_uids == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
