use crate::types::NormalizedValue;

/// Normalizes a value for use as an index key or a lookup query.
///
/// Surrounding whitespace is trimmed and the result is lowercased, so case and
/// padding differences never cause a miss.
///
/// ### Example:
/// ```rust
/// use equity_lookup::normalize;
///
/// assert_eq!(normalize("  Apple Inc. "), "apple inc.");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(value: &str) -> NormalizedValue {
    value.trim().to_lowercase()
}

/// Same as `normalize`, with an absent value treated as the empty string.
pub fn normalize_opt(value: Option<&str>) -> NormalizedValue {
    value.map(normalize).unwrap_or_default()
}
