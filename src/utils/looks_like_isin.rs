use regex::Regex;
use std::sync::LazyLock;

static ISIN_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}[A-Za-z0-9]{10}$").unwrap());

/// Determines whether a value has the shape of an ISIN: two letters followed by
/// exactly ten alphanumeric characters, once all whitespace has been removed.
///
/// Note: This is a shape heuristic only. The check digit is not validated.
///
/// ### Example:
/// ```rust
/// use equity_lookup::looks_like_isin;
///
/// assert!(looks_like_isin("US0378331005"));
/// assert!(looks_like_isin(" us 0378331005 "));
/// assert!(!looks_like_isin("ABC"));
/// ```
pub fn looks_like_isin(value: &str) -> bool {
    let compacted: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    ISIN_SHAPE_REGEX.is_match(&compacted)
}
