//! Client configuration and credential discovery.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Environment variable pointing at the JSON credentials file.
pub const CREDENTIALS_ENV: &str = "INTENTCRAFT_CREDENTIALS";

/// Project credentials, loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Project the agent lives under; becomes the resource-path root.
    pub project_id: String,
    /// Bearer token for the management API. Optional for mock/local use.
    #[serde(default)]
    pub api_token: Option<String>,
}

impl Credentials {
    /// Discover credentials via the `INTENTCRAFT_CREDENTIALS` variable.
    pub fn from_env() -> ClientResult<Self> {
        let path = std::env::var(CREDENTIALS_ENV).map_err(|_| {
            ClientError::Credentials(format!(
                "set up your application credentials:\n\n    \
                 export {CREDENTIALS_ENV}=\"[PATH]\"\n\n\
                 pointing at a JSON file with a project_id field"
            ))
        })?;
        Self::from_file(&path)
    }

    /// Load credentials from a JSON file path.
    pub fn from_file(path: &str) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Credentials(format!("cannot read {path}: {e}")))?;
        serde_json::from_str(&contents)
            .map_err(|e| ClientError::Credentials(format!("invalid credentials file {path}: {e}")))
    }
}

/// Client connection settings, loadable from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Management API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Language code sent with CRUD and detect-intent requests.
    #[serde(default = "default_language_code")]
    pub language_code: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.agentplatform.example.com".into()
}
fn default_language_code() -> String {
    "de".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language_code: default_language_code(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("cannot read {path}: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| ClientError::Config(format!("invalid config file {path}: {e}")))
    }
}
