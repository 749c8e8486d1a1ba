use serde::{Deserialize, Serialize};

use crate::models::domain::RankedCandidate;

/// Response for the rank products endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankProductsResponse {
    pub products: Vec<RankedCandidate>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
