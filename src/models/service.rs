use serde::{Deserialize, Serialize};

/// Response model for the root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
}

/// Response model for the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub app: String,
    pub version: String,
    pub status: String,
    pub environment: String,
}
