/// Split a style name into lower-cased whitespace tokens
///
/// Case is folded once for the whole input with plain `to_lowercase`; no
/// locale-aware folding or normalization is applied. Runs of whitespace
/// (including leading and trailing) never produce empty tokens.
pub fn style_tokens(style_name: &str) -> Vec<String> {
    style_name
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// True if any token is a substring of the already lower-cased `haystack`
#[inline]
pub fn contains_any(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|token| haystack.contains(token.as_str()))
}
