use actix_web::{web, HttpResponse};
use std::sync::Arc;
use validator::Validate;

use crate::core::{select_booking, RecommendationMatcher, StyleHeuristic};
use crate::error::ApiError;
use crate::models::{
    AcceptRecommendationRequest, CatalogSnapshot, GenerateRecommendationsRequest, HealthResponse,
    MatchRecommendationsRequest, MatchRecommendationsResponse, MatchedRecommendation, Service,
    StylistProfile,
};
use crate::services::{CatalogCache, CatalogClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub cache: Arc<CatalogCache>,
    pub matcher: RecommendationMatcher,
    pub heuristic: StyleHeuristic,
}

impl AppState {
    /// Resolve the catalogs for a request
    ///
    /// Inline catalogs win; anything missing comes from the cached backend
    /// snapshot. The backend is not contacted when both are inline.
    async fn resolve_catalogs(
        &self,
        services: Option<Vec<Service>>,
        stylists: Option<Vec<StylistProfile>>,
    ) -> Result<CatalogSnapshot, ApiError> {
        match (services, stylists) {
            (Some(services), Some(stylists)) => Ok(CatalogSnapshot { services, stylists }),
            (services, stylists) => {
                let snapshot = self.cache.get_or_fetch(&self.catalog).await?;
                Ok(CatalogSnapshot {
                    services: services.unwrap_or_else(|| snapshot.services.clone()),
                    stylists: stylists.unwrap_or_else(|| snapshot.stylists.clone()),
                })
            }
        }
    }
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations/match", web::post().to(match_recommendations))
        .route("/recommendations/generate", web::post().to(generate_recommendations))
        .route("/recommendations/accept", web::post().to(accept_recommendation));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match recommendations endpoint
///
/// POST /api/v1/recommendations/match
///
/// Request body:
/// ```json
/// {
///   "recommendations": [{"styleName": "Modern Fade", "confidenceScore": 92, ...}],
///   "services": [...],
///   "stylists": [...]
/// }
/// ```
async fn match_recommendations(
    state: web::Data<AppState>,
    req: web::Json<MatchRecommendationsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    let catalogs = state.resolve_catalogs(req.services, req.stylists).await?;

    let matched = state
        .matcher
        .match_all(&req.recommendations, &catalogs.services, &catalogs.stylists);

    tracing::info!(
        "Matched {} recommendations ({} services, {} stylists)",
        matched.len(),
        catalogs.services.len(),
        catalogs.stylists.len()
    );

    Ok(HttpResponse::Ok().json(respond(matched)))
}

/// Generate and match recommendations from a style description
///
/// POST /api/v1/recommendations/generate
///
/// Request body:
/// ```json
/// {
///   "description": "short fade, something modern",
///   "limit": 3
/// }
/// ```
async fn generate_recommendations(
    state: web::Data<AppState>,
    req: web::Json<GenerateRecommendationsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let catalogs = state.resolve_catalogs(req.services, req.stylists).await?;

    let recommendations = state.heuristic.generate(
        &req.description,
        &catalogs.services,
        &catalogs.stylists,
        req.limit,
    );

    tracing::debug!("Generated {} recommendations", recommendations.len());

    let matched = state
        .matcher
        .match_all(&recommendations, &catalogs.services, &catalogs.stylists);

    Ok(HttpResponse::Ok().json(respond(matched)))
}

/// Accept a matched recommendation
///
/// POST /api/v1/recommendations/accept
///
/// Returns the `{serviceId, stylistId}` pair for the booking flow. When the
/// recommendation has no stylists of its own, the first stylist of the
/// catalog is used.
async fn accept_recommendation(
    state: web::Data<AppState>,
    req: web::Json<AcceptRecommendationRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    // The stylist catalog is only needed for the fallback
    let stylists = if req.recommendation.recommended_stylists.is_empty() {
        match req.stylists {
            Some(stylists) => stylists,
            None => state.cache.get_or_fetch(&state.catalog).await?.stylists.clone(),
        }
    } else {
        Vec::new()
    };

    let selection = select_booking(&req.recommendation, &stylists).ok_or(ApiError::NoSelection)?;

    tracing::info!(
        "Accepted recommendation {}: service={}, stylist={}",
        req.recommendation.recommendation.style_name,
        selection.service_id,
        selection.stylist_id
    );

    Ok(HttpResponse::Ok().json(selection))
}

fn respond(recommendations: Vec<MatchedRecommendation>) -> MatchRecommendationsResponse {
    MatchRecommendationsResponse {
        total_recommendations: recommendations.len(),
        recommendations,
    }
}
