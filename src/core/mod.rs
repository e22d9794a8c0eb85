// Core algorithm exports
pub mod heuristic;
pub mod matcher;
pub mod scoring;
pub mod tokens;

pub use heuristic::{StyleHeuristic, DEFAULT_MAX_RECOMMENDATIONS};
pub use matcher::{RecommendationMatcher, select_booking};
pub use scoring::{fuzzy_score, rank_services};
pub use tokens::style_tokens;
