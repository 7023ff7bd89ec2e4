//! Wire types for Dgraph's generated GraphQL API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{Metadata, Project};

/// Envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
pub(super) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQlError {
    pub message: String,
}

/// A project node as Dgraph's GraphQL schema exposes it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DgraphProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub user_id: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Project> for DgraphProject {
    fn from(value: &Project) -> Self {
        Self {
            id: None,
            name: value.name.clone(),
            user_id: value.user_id.clone(),
            created_by: value.metadata.created_by.clone(),
            created_at: value.metadata.created_at,
            updated_at: value.metadata.updated_at,
            deleted_at: value.metadata.deleted_at,
        }
    }
}

impl From<DgraphProject> for Project {
    fn from(value: DgraphProject) -> Self {
        Self {
            id: value.id.unwrap_or_default(),
            user_id: value.user_id,
            name: value.name,
            metadata: Metadata {
                created_by: value.created_by,
                created_at: value.created_at,
                updated_at: value.updated_at,
                deleted_at: value.deleted_at,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct QueryProjectData {
    #[serde(rename = "queryProject")]
    pub query_project: Vec<DgraphProject>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GetProjectData {
    #[serde(rename = "getProject")]
    pub get_project: Option<DgraphProject>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddProjectData {
    #[serde(rename = "addProject")]
    pub add_project: AddProjectPayload,
}

#[derive(Debug, Deserialize)]
pub(super) struct AddProjectPayload {
    pub project: Vec<DgraphProject>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteProjectData {
    #[serde(rename = "deleteProject")]
    pub delete_project: DeleteProjectPayload,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteProjectPayload {
    #[serde(rename = "numUids")]
    pub num_uids: u64,
}
