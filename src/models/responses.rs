use serde::{Deserialize, Serialize};
use crate::models::domain::MatchedRecommendation;

/// Response for the match and generate endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecommendationsResponse {
    pub recommendations: Vec<MatchedRecommendation>,
    #[serde(rename = "totalRecommendations")]
    pub total_recommendations: usize,
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
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
