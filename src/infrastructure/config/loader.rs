use std::fmt;
use std::net::SocketAddr;

use figment::providers::{Env, Serialized};
use figment::Figment;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment key selecting the listener transport (`tcp` or `unix`).
pub const ENV_SERVICE_NETW: &str = "SERVICE_NETW";
/// Environment key naming the bind address (socket address, or socket path
/// for the unix transport).
pub const ENV_SERVICE_ADDR: &str = "SERVICE_ADDR";
/// Environment key naming the request metadata key that carries the
/// calling user's id.
pub const ENV_AUTH_HEADER: &str = "AUTH_HEADER";
/// Environment key naming the Dgraph GraphQL base URL.
pub const ENV_DGRAPH_DSN: &str = "DGRAPH_DSN";

const DEFAULT_NETW: &str = "tcp";
const DEFAULT_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_AUTH_HEADER: &str = "x-uid";

/// Listener transport, with `net.Listen`-style naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Tcp,
    Unix,
}

impl Transport {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "tcp" => Some(Self::Tcp),
            "unix" => Some(Self::Unix),
            _ => None,
        }
    }
}

/// Validated service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listener transport.
    pub transport: Transport,
    /// Bind address: socket address for tcp, filesystem path for unix.
    pub service_addr: String,
    /// Lowercase metadata key identifying the calling user.
    pub auth_header: String,
    /// Base URL of the Dgraph instance.
    pub dgraph_dsn: Url,
}

/// Raw environment binding prior to validation. Field names match the
/// environment keys, which figment lowercases.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawConfig {
    service_netw: String,
    service_addr: String,
    auth_header: String,
    dgraph_dsn: Option<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            service_netw: DEFAULT_NETW.to_string(),
            service_addr: DEFAULT_ADDR.to_string(),
            auth_header: DEFAULT_AUTH_HEADER.to_string(),
            dgraph_dsn: None,
        }
    }
}

/// One rejected configuration key and the reason it was rejected.
#[derive(Debug)]
pub struct ConfigIssue {
    key: &'static str,
    problem: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.problem)
    }
}

/// Format every issue as a single `KEY: problem; KEY: problem` line.
fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every missing or invalid key found in one validation pass.
    #[error("invalid configuration: {}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),

    #[error("failed to read configuration from the environment: {0}")]
    Extraction(#[from] figment::Error),
}

impl Config {
    /// Read and validate the service configuration from the environment.
    ///
    /// All four keys are inspected in one pass; the returned error lists
    /// every key that was missing or invalid rather than stopping at the
    /// first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = Figment::new()
            .merge(Serialized::defaults(RawConfig::default()))
            .merge(Env::raw().only(&[
                ENV_SERVICE_NETW,
                ENV_SERVICE_ADDR,
                ENV_AUTH_HEADER,
                ENV_DGRAPH_DSN,
            ]))
            .extract()?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut issues = Vec::new();

        let transport = Transport::parse(&raw.service_netw).unwrap_or_else(|| {
            issues.push(ConfigIssue {
                key: ENV_SERVICE_NETW,
                problem: format!(
                    "unsupported network {:?}, expected tcp or unix",
                    raw.service_netw
                ),
            });
            Transport::Tcp
        });

        match transport {
            Transport::Tcp => {
                if raw.service_addr.parse::<SocketAddr>().is_err() {
                    issues.push(ConfigIssue {
                        key: ENV_SERVICE_ADDR,
                        problem: format!("{:?} is not a valid socket address", raw.service_addr),
                    });
                }
            }
            Transport::Unix => {
                if raw.service_addr.trim().is_empty() {
                    issues.push(ConfigIssue {
                        key: ENV_SERVICE_ADDR,
                        problem: "unix transport requires a socket path".to_string(),
                    });
                }
            }
        }

        if !is_valid_metadata_key(&raw.auth_header) {
            issues.push(ConfigIssue {
                key: ENV_AUTH_HEADER,
                problem: format!(
                    "{:?} is not a valid lowercase metadata key",
                    raw.auth_header
                ),
            });
        }

        let dgraph_dsn = match raw.dgraph_dsn.as_deref() {
            None | Some("") => {
                issues.push(ConfigIssue {
                    key: ENV_DGRAPH_DSN,
                    problem: "is required but not set".to_string(),
                });
                None
            }
            Some(raw_dsn) => match Url::parse(raw_dsn) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
                Ok(url) => {
                    issues.push(ConfigIssue {
                        key: ENV_DGRAPH_DSN,
                        problem: format!(
                            "unsupported scheme {:?}, expected http or https",
                            url.scheme()
                        ),
                    });
                    None
                }
                Err(err) => {
                    issues.push(ConfigIssue {
                        key: ENV_DGRAPH_DSN,
                        problem: format!("{raw_dsn:?} is not a valid url: {err}"),
                    });
                    None
                }
            },
        };

        match dgraph_dsn {
            Some(dgraph_dsn) if issues.is_empty() => Ok(Self {
                transport,
                service_addr: raw.service_addr,
                auth_header: raw.auth_header,
                dgraph_dsn,
            }),
            _ => Err(ConfigError::Invalid(issues)),
        }
    }
}

/// gRPC metadata keys must be lowercase; an uppercase configured value
/// would silently never match an incoming request.
fn is_valid_metadata_key(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b'.'))
}

/// Best-effort load of the conventional `.env` file into the process
/// environment.
///
/// Absence of the file is an expected deployment mode (production injects
/// real environment variables instead), so any failure is reported once at
/// warning severity and startup continues.
pub fn load_env_file() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "environment file loaded"),
        Err(err) => warn!(error = %err, "no dotenv file has been found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [&str; 4] = [
        ENV_SERVICE_NETW,
        ENV_SERVICE_ADDR,
        ENV_AUTH_HEADER,
        ENV_DGRAPH_DSN,
    ];

    #[test]
    fn test_key_literals_are_stable() {
        // Deployment manifests depend on these exact names.
        assert_eq!(ENV_SERVICE_NETW, "SERVICE_NETW");
        assert_eq!(ENV_SERVICE_ADDR, "SERVICE_ADDR");
        assert_eq!(ENV_AUTH_HEADER, "AUTH_HEADER");
        assert_eq!(ENV_DGRAPH_DSN, "DGRAPH_DSN");
    }

    #[test]
    fn test_defaults_with_only_dsn_set() {
        temp_env::with_vars(
            [
                (ENV_SERVICE_NETW, None),
                (ENV_SERVICE_ADDR, None),
                (ENV_AUTH_HEADER, None),
                (ENV_DGRAPH_DSN, Some("http://localhost:8080")),
            ],
            || {
                let config = Config::from_env().expect("config should load");
                assert_eq!(config.transport, Transport::Tcp);
                assert_eq!(config.service_addr, "127.0.0.1:8000");
                assert_eq!(config.auth_header, "x-uid");
                assert_eq!(config.dgraph_dsn.as_str(), "http://localhost:8080/");
            },
        );
    }

    #[test]
    fn test_environment_overrides_defaults() {
        temp_env::with_vars(
            [
                (ENV_SERVICE_NETW, Some("unix")),
                (ENV_SERVICE_ADDR, Some("/run/agora.sock")),
                (ENV_AUTH_HEADER, Some("x-user-id")),
                (ENV_DGRAPH_DSN, Some("https://dgraph.internal:8080")),
            ],
            || {
                let config = Config::from_env().expect("config should load");
                assert_eq!(config.transport, Transport::Unix);
                assert_eq!(config.service_addr, "/run/agora.sock");
                assert_eq!(config.auth_header, "x-user-id");
            },
        );
    }

    #[test]
    fn test_missing_dsn_is_reported() {
        temp_env::with_vars(ALL_KEYS.map(|k| (k, None::<&str>)), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains(ENV_DGRAPH_DSN));
        });
    }

    #[test]
    fn test_all_problems_reported_at_once() {
        temp_env::with_vars(
            [
                (ENV_SERVICE_NETW, Some("udp")),
                (ENV_SERVICE_ADDR, Some("not-an-address")),
                (ENV_AUTH_HEADER, Some("X-Uid")),
                (ENV_DGRAPH_DSN, None),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                let ConfigError::Invalid(issues) = err else {
                    panic!("expected Invalid, got {err:?}");
                };
                assert_eq!(issues.len(), 4);

                let message = format_issues(&issues);
                for key in ALL_KEYS {
                    assert!(message.contains(key), "missing {key} in {message:?}");
                }
            },
        );
    }

    #[test]
    fn test_tcp_address_must_be_socket_addr() {
        temp_env::with_vars(
            [
                (ENV_SERVICE_NETW, Some("tcp")),
                (ENV_SERVICE_ADDR, Some("localhost")),
                (ENV_AUTH_HEADER, None),
                (ENV_DGRAPH_DSN, Some("http://localhost:8080")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains(ENV_SERVICE_ADDR));
            },
        );
    }

    #[test]
    fn test_dsn_scheme_must_be_http() {
        temp_env::with_vars(
            [
                (ENV_SERVICE_NETW, None),
                (ENV_SERVICE_ADDR, None),
                (ENV_AUTH_HEADER, None),
                (ENV_DGRAPH_DSN, Some("ws://localhost:8080")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("scheme"));
            },
        );
    }

    #[test]
    fn test_metadata_key_validation() {
        assert!(is_valid_metadata_key("x-uid"));
        assert!(is_valid_metadata_key("x_user.id2"));
        assert!(!is_valid_metadata_key(""));
        assert!(!is_valid_metadata_key("X-Uid"));
        assert!(!is_valid_metadata_key("x uid"));
    }
}
