// Integration tests for the Dgraph-backed repository against a mock
// GraphQL endpoint.

use mockito::Matcher;
use reqwest::Url;
use serde_json::json;

use agora::{DgraphClient, DgraphProjectRepository, DomainError, Project, ProjectRepository};

fn repository(url: &str) -> DgraphProjectRepository {
    DgraphProjectRepository::new(DgraphClient::new(&Url::parse(url).unwrap()))
}

fn project_node(id: &str, name: &str, user_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "userId": user_id,
        "createdBy": user_id,
        "createdAt": "2024-05-01T12:00:00Z"
    })
}

#[tokio::test]
async fn test_find_by_name_returns_project() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({
            "variables": { "name": "atlas" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": { "queryProject": [project_node("0x1", "atlas", "user-1")] }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let project = repository(&server.url())
        .find_by_name("atlas")
        .await
        .unwrap()
        .expect("project should be found");

    assert_eq!(project.id, "0x1");
    assert_eq!(project.name, "atlas");
    assert_eq!(project.user_id, "user-1");
    assert_eq!(project.metadata.created_by, "user-1");
    assert!(project.metadata.updated_at.is_none());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_name_empty_result_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "queryProject": [] } }).to_string())
        .create_async()
        .await;

    let found = repository(&server.url()).find_by_name("atlas").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_create_round_trips_assigned_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("addProject".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "addProject": { "project": [project_node("0x2a", "atlas", "user-1")] }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let stored = repository(&server.url())
        .create(&Project::new("user-1", "atlas"))
        .await
        .unwrap();

    assert_eq!(stored.id, "0x2a");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_id_null_result_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::Regex("getProject".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "getProject": null } }).to_string())
        .create_async()
        .await;

    let found = repository(&server.url()).find_by_id("0x1").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_missing_project_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "deleteProject": { "numUids": 0 } } }).to_string())
        .create_async()
        .await;

    let err = repository(&server.url()).delete("0x99").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn test_delete_success() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "deleteProject": { "numUids": 1 } } }).to_string())
        .create_async()
        .await;

    repository(&server.url()).delete("0x1").await.unwrap();
}

#[tokio::test]
async fn test_graphql_errors_surface_as_storage_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": null,
                "errors": [{ "message": "mutation addProject failed" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = repository(&server.url())
        .create(&Project::new("user-1", "atlas"))
        .await
        .unwrap_err();

    match err {
        DomainError::Storage(message) => assert!(message.contains("addProject")),
        other => panic!("expected Storage, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_unavailable() {
    // Take a port from a throwaway server, then drop it so nothing
    // listens there anymore.
    let url = {
        let server = mockito::Server::new_async().await;
        server.url()
    };

    let err = repository(&url).find_by_name("atlas").await.unwrap_err();
    assert!(matches!(err, DomainError::Unavailable(_)));
}

#[tokio::test]
async fn test_health_probe_success() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(json!([{ "status": "healthy" }]).to_string())
        .create_async()
        .await;

    let client = DgraphClient::new(&Url::parse(&server.url()).unwrap());
    client.health().await.unwrap();
}

#[tokio::test]
async fn test_health_probe_failure_is_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(500)
        .create_async()
        .await;

    let client = DgraphClient::new(&Url::parse(&server.url()).unwrap());
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, DomainError::Unavailable(_)));
}
