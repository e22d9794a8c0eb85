use std::collections::HashSet;

use crate::core::{
    scoring::rank_services,
    tokens::{contains_any, style_tokens},
};
use crate::models::{
    BookingSelection, MatchedRecommendation, Recommendation, ScoringWeights, Service, StylistProfile,
};

/// Binds style recommendations to concrete catalog entries
///
/// # Matching Stages
/// 1. Exact id lookup against the recommendation's hint ids
/// 2. Fuzzy fallback (scored for services, specialty tags for stylists)
/// 3. Closest-service fallback when no service qualifies
///
/// Every operation is pure and total over its inputs.
#[derive(Debug, Clone, Default)]
pub struct RecommendationMatcher {
    weights: ScoringWeights,
}

impl RecommendationMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Services for a recommendation, exact id matches first
    ///
    /// Exact matches come back in catalog order and suppress fuzzy scoring
    /// entirely. Otherwise services with a positive fuzzy score are returned,
    /// highest score first, ties in catalog order.
    pub fn match_services(&self, recommendation: &Recommendation, catalog: &[Service]) -> Vec<Service> {
        let exact = exact_matches(catalog, &recommendation.matching_service_ids, |s| s.id.as_str());
        if !exact.is_empty() {
            return exact;
        }

        let tokens = style_tokens(&recommendation.style_name);
        rank_services(&tokens, catalog, &self.weights)
            .into_iter()
            .filter(|(_, score)| *score > 0)
            .map(|(service, _)| service.clone())
            .collect()
    }

    /// Stylists for a recommendation, exact id matches first
    ///
    /// The fallback is boolean: any stylist with a specialty tag containing a
    /// style token is included, in catalog order.
    pub fn match_stylists(
        &self,
        recommendation: &Recommendation,
        catalog: &[StylistProfile],
    ) -> Vec<StylistProfile> {
        let exact = exact_matches(catalog, &recommendation.recommended_stylist_ids, |s| s.id.as_str());
        if !exact.is_empty() {
            return exact;
        }

        let tokens = style_tokens(&recommendation.style_name);
        catalog
            .iter()
            .filter(|stylist| {
                stylist
                    .specialties
                    .iter()
                    .any(|specialty| contains_any(&specialty.to_lowercase(), &tokens))
            })
            .cloned()
            .collect()
    }

    /// Best-effort top-scoring service, even if every score is zero
    ///
    /// Returns `None` only for an empty catalog.
    pub fn closest_service(&self, recommendation: &Recommendation, catalog: &[Service]) -> Option<Service> {
        let tokens = style_tokens(&recommendation.style_name);
        rank_services(&tokens, catalog, &self.weights)
            .into_iter()
            .next()
            .map(|(service, _)| service.clone())
    }

    /// Match every recommendation independently, preserving input order
    pub fn match_all(
        &self,
        recommendations: &[Recommendation],
        services: &[Service],
        stylists: &[StylistProfile],
    ) -> Vec<MatchedRecommendation> {
        let matched: Vec<MatchedRecommendation> = recommendations
            .iter()
            .map(|recommendation| {
                let matched_services = self.match_services(recommendation, services);
                let recommended_stylists = self.match_stylists(recommendation, stylists);
                let closest_service = if matched_services.is_empty() {
                    self.closest_service(recommendation, services)
                } else {
                    None
                };

                MatchedRecommendation {
                    recommendation: recommendation.clone(),
                    matched_services,
                    recommended_stylists,
                    closest_service,
                }
            })
            .collect();

        tracing::debug!(
            "Matched {} recommendations against {} services and {} stylists",
            matched.len(),
            services.len(),
            stylists.len()
        );

        matched
    }
}

/// Pick the (service, stylist) pair for an accepted recommendation
///
/// The service is the first matched service, else the closest service. The
/// stylist is the first recommended stylist, else the first stylist in the
/// full catalog. `None` unless both ends are found.
pub fn select_booking(
    matched: &MatchedRecommendation,
    stylists: &[StylistProfile],
) -> Option<BookingSelection> {
    let service_id = matched
        .matched_services
        .first()
        .or(matched.closest_service.as_ref())
        .map(|service| service.id.clone())?;

    let stylist_id = matched
        .recommended_stylists
        .first()
        .or_else(|| stylists.first())
        .map(|stylist| stylist.id.clone())?;

    Some(BookingSelection {
        service_id,
        stylist_id,
    })
}

/// Catalog entries whose id appears in `ids`, in catalog order
fn exact_matches<T, F>(catalog: &[T], ids: &[String], id_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    if ids.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
    catalog
        .iter()
        .filter(|entry| wanted.contains(id_of(*entry)))
        .cloned()
        .collect()
}
