/// Maximum number of member records shown per multi-match group.
pub const MULTI_MATCH_DISPLAY_LIMIT: usize = 500;

/// Maximum number of distinct missing values shown.
pub const MISSING_DISPLAY_LIMIT: usize = 200;

/// Dataset columns checked, in order, for a record description. The first non-empty one wins.
pub const DESCRIPTION_COLUMN_CANDIDATES: &[&str] = &["summary", "description", "desc"];

/// Column header written by the CSV export.
pub const EXPORT_CSV_HEADER: &[&str] = &[
    "card_kind",
    "match_field",
    "match_input",
    "input_count",
    "symbol",
    "isin",
    "name",
    "country",
    "description",
];

/// Separator used when deriving a record key from name and country.
pub const RECORD_KEY_NAME_COUNTRY_SEPARATOR: &str = "|";
