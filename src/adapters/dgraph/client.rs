//! HTTP client for a Dgraph GraphQL endpoint.
//!
//! Dgraph serves the generated GraphQL API under `/graphql` and a node
//! status probe under `/health`; both are plain HTTP. All methods map
//! transport and backend failures onto domain errors so callers never
//! see `reqwest` types.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use crate::domain::errors::{DomainError, DomainResult};

use super::models::GraphQlResponse;

/// Client for one Dgraph instance, addressed by the configured DSN.
#[derive(Debug, Clone)]
pub struct DgraphClient {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL with any trailing slash removed.
    base: String,
}

impl DgraphClient {
    /// Create a new client for the instance behind `dsn`.
    pub fn new(dsn: &Url) -> Self {
        Self {
            http: Client::new(),
            base: dsn.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    /// Probe the instance's `/health` endpoint.
    ///
    /// Used once at startup so a misconfigured or unreachable DSN fails
    /// with a clear diagnostic instead of on the first request.
    pub async fn health(&self) -> DomainResult<()> {
        let resp = self
            .http
            .get(self.endpoint("health"))
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            return Err(DomainError::Unavailable(format!(
                "dgraph health probe returned {}",
                resp.status()
            )));
        }

        Ok(())
    }

    /// Execute a GraphQL operation and deserialize its `data` payload.
    ///
    /// A non-success HTTP status, an `errors` array in the response, or a
    /// response without data all surface as [`DomainError::Storage`];
    /// connection-level failures as [`DomainError::Unavailable`].
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> DomainResult<T> {
        let resp = self
            .http
            .post(self.endpoint("graphql"))
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            error!(%status, body, "dgraph graphql request rejected");
            return Err(DomainError::Storage(format!(
                "dgraph returned {status}"
            )));
        }

        let body: GraphQlResponse<T> = resp
            .json()
            .await
            .map_err(|err| DomainError::Storage(format!("decoding dgraph response: {err}")))?;

        if !body.errors.is_empty() {
            let messages = body
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(errors = messages, "dgraph rejected graphql operation");
            return Err(DomainError::Storage(messages));
        }

        body.data
            .ok_or_else(|| DomainError::Storage("dgraph response carried no data".to_string()))
    }
}

/// Map a reqwest failure onto the domain error space.
fn transport_error(err: reqwest::Error) -> DomainError {
    if err.is_connect() || err.is_timeout() {
        DomainError::Unavailable(err.to_string())
    } else {
        DomainError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let dsn = Url::parse("http://localhost:8080/").unwrap();
        let client = DgraphClient::new(&dsn);
        assert_eq!(client.endpoint("graphql"), "http://localhost:8080/graphql");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let dsn = Url::parse("http://localhost:8080/dgraph").unwrap();
        let client = DgraphClient::new(&dsn);
        assert_eq!(
            client.endpoint("health"),
            "http://localhost:8080/dgraph/health"
        );
    }
}
