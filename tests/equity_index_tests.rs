use equity_lookup::{EquityIndex, EquityRecord, LookupField};
use test_utils::{build_test_equity_index, equity, symbols_of};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_every_record_in_order() {
        let index = build_test_equity_index();

        assert_eq!(index.record_count(), 12);
        assert_eq!(index.records()[0].symbol, "AAPL");
        assert_eq!(index.records()[11].symbol, "TM");
    }

    #[test]
    fn test_unique_lookup_is_case_and_whitespace_insensitive() {
        let index = build_test_equity_index();

        let record = index
            .get_unique(LookupField::Symbol, "aapl")
            .expect("AAPL should be indexed");
        assert_eq!(record.name, "Apple Inc.");

        let record = index
            .get_unique(LookupField::Isin, "us0378331005")
            .expect("Apple ISIN should be indexed");
        assert_eq!(record.symbol, "AAPL");
    }

    #[test]
    fn test_lookups_expect_normalized_values() {
        let index = build_test_equity_index();

        assert!(index.get_unique(LookupField::Symbol, "AAPL").is_none());
        assert!(index.contains(LookupField::Symbol, "aapl"));
    }

    #[test]
    fn test_first_seen_wins_for_duplicate_unique_keys() {
        let index = build_test_equity_index();

        // SAP and SAPX share an ISIN; SAP comes first in the dataset
        let record = index
            .get_unique(LookupField::Isin, "de0007164600")
            .expect("SAP ISIN should be indexed");
        assert_eq!(record.symbol, "SAP");

        // SAPX remains reachable through its own symbol
        assert!(index.get_unique(LookupField::Symbol, "sapx").is_some());
    }

    #[test]
    fn test_first_seen_wins_for_symbols_differing_in_case() {
        let index = EquityIndex::build(vec![
            equity("abc", "First", "", ""),
            equity("ABC ", "Second", "", ""),
        ]);

        let record = index.get_unique(LookupField::Symbol, "abc").unwrap();
        assert_eq!(record.name, "First");
    }

    #[test]
    fn test_multi_index_keeps_duplicates_in_dataset_order() {
        let index = build_test_equity_index();

        let germany = index.get_multi(LookupField::Country, "germany");
        assert_eq!(
            symbols_of(germany),
            vec!["SAP", "SIE", "BMW", "BMW3", "SAPX", "ALV", ""]
        );

        let sap_se = index.get_multi(LookupField::Name, "sap se");
        assert_eq!(symbols_of(sap_se), vec!["SAP", "SAPX"]);

        let automobiles = index.get_multi(LookupField::Description, "automobiles");
        assert_eq!(symbols_of(automobiles), vec!["BMW", "BMW3", "TM"]);
    }

    #[test]
    fn test_empty_fields_are_never_keys() {
        let index = build_test_equity_index();

        for field in LookupField::ALL {
            assert!(!index.contains(field, ""), "{} indexed an empty key", field);
        }

        // The nameless German record has no symbol or ISIN, but is still a Germany match
        assert!(index
            .get_multi(LookupField::Name, "nameless holdings")
            .iter()
            .all(|record| record.symbol.is_empty() && record.isin.is_empty()));
    }

    #[test]
    fn test_field_kind_mismatches_return_nothing() {
        let index = build_test_equity_index();

        assert!(index.get_unique(LookupField::Name, "apple inc.").is_none());
        assert!(index.get_multi(LookupField::Symbol, "aapl").is_empty());
    }

    #[test]
    fn test_rebuild_discards_previous_state() {
        let mut index = build_test_equity_index();
        assert!(index.contains(LookupField::Symbol, "aapl"));

        index.rebuild(vec![equity("ZZZ", "Zeta Co", "US9999999999", "US")]);

        assert_eq!(index.record_count(), 1);
        assert!(!index.contains(LookupField::Symbol, "aapl"));
        assert!(!index.contains(LookupField::Isin, "us0378331005"));
        assert!(!index.contains(LookupField::Country, "germany"));
        assert!(index.contains(LookupField::Symbol, "zzz"));
        assert_eq!(index.get_multi(LookupField::Country, "us").len(), 1);
    }

    #[test]
    fn test_build_tolerates_blank_records() {
        let index = EquityIndex::build(vec![EquityRecord::default(), EquityRecord::default()]);

        assert_eq!(index.record_count(), 2);
        for field in LookupField::ALL {
            assert!(!index.contains(field, ""));
        }
    }

    #[test]
    fn test_index_is_shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EquityIndex>();
    }
}
