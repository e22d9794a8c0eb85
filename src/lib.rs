//! Salon Match - style recommendation matching for salon booking
//!
//! This library binds style recommendations to the salon's service and
//! stylist catalogs: exact id hints first, fuzzy scoring as a fallback, and a
//! closest-service pick when nothing qualifies.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{RecommendationMatcher, StyleHeuristic, select_booking};
pub use models::{Service, StylistProfile, Recommendation, MatchedRecommendation, BookingSelection, ScoringWeights};
