// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Service, StylistProfile, Recommendation, MatchedRecommendation, BookingSelection, CatalogSnapshot, ScoringWeights};
pub use requests::{MatchRecommendationsRequest, GenerateRecommendationsRequest, AcceptRecommendationRequest};
pub use responses::{MatchRecommendationsResponse, HealthResponse, ErrorResponse};
