use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchedRecommendation, Recommendation, Service, StylistProfile};

/// Request to match recommendations against the catalog
///
/// Catalogs left out of the request are loaded from the salon backend.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRecommendationsRequest {
    #[validate(nested)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub stylists: Option<Vec<StylistProfile>>,
}

/// Request to generate recommendations from a style description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRecommendationsRequest {
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    #[validate(range(min = 1, max = 20))]
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub stylists: Option<Vec<StylistProfile>>,
}

/// Request to turn an accepted recommendation into a booking selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptRecommendationRequest {
    pub recommendation: MatchedRecommendation,
    #[serde(default)]
    pub stylists: Option<Vec<StylistProfile>>,
}
