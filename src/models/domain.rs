use serde::{Deserialize, Serialize};
use validator::Validate;

/// A bookable salon service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "durationMinutes", default)]
    pub duration_minutes: u32,
    #[serde(rename = "priceCents", default)]
    pub price_cents: u64,
}

/// Stylist profile with free-text specialty tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylistProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

/// Style recommendation produced upstream from a style description
///
/// The id lists are hints only. Ids that are not in the current catalog
/// are ignored by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Recommendation {
    #[serde(rename = "styleName")]
    pub style_name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(max = 100))]
    #[serde(rename = "confidenceScore")]
    pub confidence_score: u8,
    #[serde(default)]
    pub reasoning: String,
    #[serde(rename = "matchingServiceIds", default)]
    pub matching_service_ids: Vec<String>,
    #[serde(rename = "recommendedStylistIds", default)]
    pub recommended_stylist_ids: Vec<String>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Recommendation bound to concrete catalog entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRecommendation {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    #[serde(rename = "matchedServices", default)]
    pub matched_services: Vec<Service>,
    #[serde(rename = "recommendedStylists", default)]
    pub recommended_stylists: Vec<StylistProfile>,
    #[serde(rename = "closestService", default, skip_serializing_if = "Option::is_none")]
    pub closest_service: Option<Service>,
}

/// The (service, stylist) pair handed to the booking flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    #[serde(rename = "serviceId")]
    pub service_id: String,
    #[serde(rename = "stylistId")]
    pub stylist_id: String,
}

/// Point-in-time copy of the backend catalogs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub services: Vec<Service>,
    pub stylists: Vec<StylistProfile>,
}

/// Fuzzy scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Added per style token found in the service name
    pub name: u32,
    /// Added per style token found in the service description
    pub description: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: 3,
            description: 1,
        }
    }
}
