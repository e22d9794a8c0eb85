use crate::models::{Service, ScoringWeights};

/// Calculate the fuzzy relevance score of a service for a set of style tokens
///
/// Scoring formula:
/// score = sum over tokens of (
///     weights.name         # token is a substring of the service name
///   + weights.description  # token is a substring of the service description
/// )
///
/// The two fields are counted independently, so a token found in both
/// contributes both weights. Tokens must already be lower-cased.
pub fn fuzzy_score(tokens: &[String], service: &Service, weights: &ScoringWeights) -> u32 {
    let name = service.name.to_lowercase();
    let description = service.description.to_lowercase();

    let mut score = 0;
    for token in tokens {
        if name.contains(token.as_str()) {
            score += weights.name;
        }
        if description.contains(token.as_str()) {
            score += weights.description;
        }
    }

    score
}

/// Score every service in the catalog and sort by score (descending)
///
/// The sort is stable: services with equal scores keep their catalog order.
/// Zero-score services are kept; callers decide whether to drop them.
pub fn rank_services<'a>(
    tokens: &[String],
    catalog: &'a [Service],
    weights: &ScoringWeights,
) -> Vec<(&'a Service, u32)> {
    let mut scored: Vec<(&Service, u32)> = catalog
        .iter()
        .map(|service| (service, fuzzy_score(tokens, service, weights)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokens::style_tokens;

    fn service(id: &str, name: &str, description: &str) -> Service {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            duration_minutes: 30,
            price_cents: 2500,
        }
    }

    #[test]
    fn test_name_and_description_weights() {
        let weights = ScoringWeights::default();
        let tokens = style_tokens("Modern Fade");

        assert_eq!(fuzzy_score(&tokens, &service("1", "Modern Fade Cut", ""), &weights), 6);
        assert_eq!(fuzzy_score(&tokens, &service("2", "Fade", ""), &weights), 3);
        assert_eq!(fuzzy_score(&tokens, &service("3", "Basic Cut", "modern style"), &weights), 1);
        assert_eq!(fuzzy_score(&tokens, &service("4", "Shave", "hot towel"), &weights), 0);
    }

    #[test]
    fn test_token_in_both_fields_counts_twice() {
        let weights = ScoringWeights::default();
        let tokens = style_tokens("fade");

        let score = fuzzy_score(&tokens, &service("1", "Skin Fade", "A tight FADE"), &weights);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let weights = ScoringWeights::default();
        let tokens = style_tokens("crop");
        let catalog = vec![
            service("a", "Color", ""),
            service("b", "Crop", ""),
            service("c", "Beard", ""),
            service("d", "French Crop", ""),
        ];

        let ranked: Vec<&str> = rank_services(&tokens, &catalog, &weights)
            .into_iter()
            .map(|(s, _)| s.id.as_str())
            .collect();

        assert_eq!(ranked, vec!["b", "d", "a", "c"]);
    }
}
