use crate::models::{Recommendation, Service, StylistProfile};

/// Default cap on generated recommendations
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 5;

/// Which stylists a generated recommendation hints at
#[derive(Debug, Clone, Copy)]
enum StylistHint {
    /// Stylists with a specialty containing this keyword
    Specialty(&'static str),
    /// The first `n` stylists in the catalog
    First(usize),
}

/// Keyword rule mapping a style description to one recommendation
#[derive(Debug)]
struct StyleRule {
    keywords: &'static [&'static str],
    style_name: &'static str,
    description: &'static str,
    confidence_score: u8,
    reasoning: &'static str,
    stylists: StylistHint,
    image_url: &'static str,
}

/// Fallback style used when no keyword rule fires
#[derive(Debug)]
struct DefaultStyle {
    style_name: &'static str,
    description: &'static str,
    confidence_score: u8,
    reasoning: &'static str,
    image_url: &'static str,
}

/// Keyword all rule-based recommendations use to hint services
const SERVICE_KEYWORD: &str = "cut";

const FADE_IMAGE: &str = "/assets/generated/style-rec-fade.dim_400x400.png";
const POMPADOUR_IMAGE: &str = "/assets/generated/style-rec-pompadour.dim_400x400.png";
const CROP_IMAGE: &str = "/assets/generated/style-rec-crop.dim_400x400.png";
const UNDERCUT_IMAGE: &str = "/assets/generated/style-rec-undercut.dim_400x400.png";

const RULES: &[StyleRule] = &[
    StyleRule {
        keywords: &["fade", "modern", "short"],
        style_name: "Modern Fade",
        description: "A contemporary fade haircut with clean lines and sharp edges, perfect for a professional yet stylish look.",
        confidence_score: 92,
        reasoning: "Based on your photo and preferences for modern styling, this cut will complement your face shape and lifestyle.",
        stylists: StylistHint::Specialty("fade"),
        image_url: FADE_IMAGE,
    },
    StyleRule {
        keywords: &["pompadour", "volume", "classic"],
        style_name: "Classic Pompadour",
        description: "A timeless, sophisticated style with volume and height, perfect for making a statement.",
        confidence_score: 88,
        reasoning: "Your preference for classic styling with volume suggests this iconic look would suit you perfectly.",
        stylists: StylistHint::Specialty("classic"),
        image_url: POMPADOUR_IMAGE,
    },
    StyleRule {
        keywords: &["crop", "textured", "casual"],
        style_name: "Textured Crop",
        description: "A modern, low-maintenance cut with natural texture and movement for an effortlessly cool look.",
        confidence_score: 85,
        reasoning: "Based on your style preferences, this versatile cut offers easy styling with a contemporary edge.",
        stylists: StylistHint::First(2),
        image_url: CROP_IMAGE,
    },
    StyleRule {
        keywords: &["undercut", "slicked", "edgy"],
        style_name: "Undercut Style",
        description: "A bold, edgy cut with short sides and longer top, perfect for a modern, confident look.",
        confidence_score: 87,
        reasoning: "Your desire for an edgy style suggests this contemporary cut would match your personality.",
        stylists: StylistHint::First(2),
        image_url: UNDERCUT_IMAGE,
    },
];

const DEFAULTS: &[DefaultStyle] = &[
    DefaultStyle {
        style_name: "Modern Fade",
        description: "A contemporary fade haircut with clean lines and sharp edges.",
        confidence_score: 85,
        reasoning: "Based on your consultation, this versatile style would complement your features.",
        image_url: FADE_IMAGE,
    },
    DefaultStyle {
        style_name: "Classic Pompadour",
        description: "A timeless style with volume and sophistication.",
        confidence_score: 82,
        reasoning: "This classic look offers versatility and timeless appeal.",
        image_url: POMPADOUR_IMAGE,
    },
    DefaultStyle {
        style_name: "Textured Crop",
        description: "A modern, low-maintenance cut with natural texture.",
        confidence_score: 80,
        reasoning: "Perfect for a contemporary, effortless look.",
        image_url: CROP_IMAGE,
    },
];

/// Keyword heuristic turning a free-text style description into recommendations
///
/// Each rule whose keyword appears in the description contributes one
/// recommendation, in rule order. With no hits, a fixed set of defaults is
/// returned that hints only the first service and stylist.
#[derive(Debug, Clone)]
pub struct StyleHeuristic {
    max_results: usize,
}

impl StyleHeuristic {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Generate at most `limit` recommendations (or the configured cap)
    pub fn generate(
        &self,
        description: &str,
        services: &[Service],
        stylists: &[StylistProfile],
        limit: Option<usize>,
    ) -> Vec<Recommendation> {
        let desc = description.to_lowercase();

        let mut recommendations: Vec<Recommendation> = RULES
            .iter()
            .filter(|rule| rule.keywords.iter().any(|keyword| desc.contains(*keyword)))
            .map(|rule| rule_recommendation(rule, services, stylists))
            .collect();

        if recommendations.is_empty() {
            tracing::debug!("No style keywords found, using default recommendations");
            recommendations = DEFAULTS
                .iter()
                .map(|style| default_recommendation(style, services, stylists))
                .collect();
        }

        recommendations.truncate(limit.unwrap_or(self.max_results).min(self.max_results));
        recommendations
    }
}

impl Default for StyleHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECOMMENDATIONS)
    }
}

fn rule_recommendation(
    rule: &StyleRule,
    services: &[Service],
    stylists: &[StylistProfile],
) -> Recommendation {
    let matching_service_ids = services
        .iter()
        .filter(|service| service.name.to_lowercase().contains(SERVICE_KEYWORD))
        .map(|service| service.id.clone())
        .collect();

    let recommended_stylist_ids = match rule.stylists {
        StylistHint::Specialty(keyword) => stylists
            .iter()
            .filter(|stylist| {
                stylist
                    .specialties
                    .iter()
                    .any(|specialty| specialty.to_lowercase().contains(keyword))
            })
            .map(|stylist| stylist.id.clone())
            .collect(),
        StylistHint::First(n) => stylists.iter().take(n).map(|s| s.id.clone()).collect(),
    };

    Recommendation {
        style_name: rule.style_name.to_string(),
        description: rule.description.to_string(),
        confidence_score: rule.confidence_score,
        reasoning: rule.reasoning.to_string(),
        matching_service_ids,
        recommended_stylist_ids,
        image_url: Some(rule.image_url.to_string()),
    }
}

fn default_recommendation(
    style: &DefaultStyle,
    services: &[Service],
    stylists: &[StylistProfile],
) -> Recommendation {
    Recommendation {
        style_name: style.style_name.to_string(),
        description: style.description.to_string(),
        confidence_score: style.confidence_score,
        reasoning: style.reasoning.to_string(),
        matching_service_ids: services.iter().take(1).map(|s| s.id.clone()).collect(),
        recommended_stylist_ids: stylists.iter().take(1).map(|s| s.id.clone()).collect(),
        image_url: Some(style.image_url.to_string()),
    }
}
