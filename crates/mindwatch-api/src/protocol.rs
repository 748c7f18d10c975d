//! JSON bodies of the non-inference endpoints.

use serde::{Deserialize, Serialize};

use mindwatch_core::config::ServerConfig;

/// `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

impl From<&ServerConfig> for RootResponse {
    fn from(server: &ServerConfig) -> Self {
        Self {
            message: server.name.clone(),
            version: server.version.clone(),
        }
    }
}

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
