use crate::types::InputToken;
use regex::Regex;
use std::sync::LazyLock;

static INPUT_DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,;|\t]+").unwrap());

// Pasted spreadsheet cells are often padded with runs of spaces instead of tabs
static TABULAR_GAP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Splits raw pasted text into discrete input tokens.
///
/// ### Splitting Rules:
/// - **Primary:** Runs of newline, comma, semicolon, pipe, or tab characters.
/// - **Secondary:** Each piece is split again on runs of two or more whitespace
///   characters, to tolerate pasted tabular data.
///
/// Every token is trimmed and empty tokens are discarded. Order of appearance is
/// preserved and duplicates are kept, since they are counted later on.
///
/// ### Example:
/// ```rust
/// use equity_lookup::split_inputs;
///
/// let tokens = split_inputs("AAPL, MSFT\n\nApple Inc.    US0378331005|AAPL");
/// assert_eq!(tokens, vec!["AAPL", "MSFT", "Apple Inc.", "US0378331005", "AAPL"]);
/// ```
pub fn split_inputs(raw: &str) -> Vec<InputToken> {
    INPUT_DELIMITER_REGEX
        .split(raw)
        .flat_map(|part| TABULAR_GAP_REGEX.split(part))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
