use equity_lookup::{EquityIndex, EquityRecord, EquityRecordListPreprocessor};
pub mod constants;
use constants::TEST_EQUITIES_CSV_PATH;

/// Loads the equities fixture used across the integration tests and benchmarks.
pub fn load_test_equity_records() -> Vec<EquityRecord> {
    EquityRecordListPreprocessor::load_equity_records_from_path(&TEST_EQUITIES_CSV_PATH)
        .expect("Failed to load test equities")
}

pub fn build_test_equity_index() -> EquityIndex {
    EquityIndex::build(load_test_equity_records())
}

/// Shorthand for a record without a description.
pub fn equity(symbol: &str, name: &str, isin: &str, country: &str) -> EquityRecord {
    EquityRecord::new(symbol, name, isin, country, "")
}

/// The two-record dataset used by the end-to-end examples.
pub fn alpha_beta_records() -> Vec<EquityRecord> {
    vec![
        equity("AAA", "Alpha Co", "US1111111111", "US"),
        equity("BBB", "Beta Co", "US2222222222", "US"),
    ]
}

/// Symbols of the given records, in order.
pub fn symbols_of<'a>(records: impl IntoIterator<Item = &'a EquityRecord>) -> Vec<&'a str> {
    records
        .into_iter()
        .map(|record| record.symbol.as_str())
        .collect()
}
