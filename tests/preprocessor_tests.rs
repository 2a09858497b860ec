use equity_lookup::{DatasetFormat, EquityRecord, EquityRecordListPreprocessor, Error};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use test_utils::constants::{TEST_EQUITIES_CSV_PATH, TEST_EQUITIES_JSON_PATH};
use test_utils::symbols_of;

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn test_loads_csv_fixture() {
        let records =
            EquityRecordListPreprocessor::load_equity_records_from_path(&TEST_EQUITIES_CSV_PATH)
                .unwrap();

        assert_eq!(records.len(), 12);
        assert_eq!(
            records[0],
            EquityRecord::new(
                "AAPL",
                "Apple Inc.",
                "US0378331005",
                "United States",
                "Consumer electronics"
            )
        );

        // Rows without any values are kept as blank records
        assert_eq!(records[10], EquityRecord::default());
    }

    #[test]
    fn test_headers_are_case_insensitive_and_trimmed() {
        let csv = " Symbol ,NAME,Isin,country\nAAPL,Apple Inc.,US0378331005,United States\n";
        let records = EquityRecordListPreprocessor::read_equity_records_from_csv_string(csv).unwrap();

        assert_eq!(
            records,
            vec![EquityRecord::new(
                "AAPL",
                "Apple Inc.",
                "US0378331005",
                "United States",
                ""
            )]
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "country,isin,name,symbol\nJapan,JP3633400001,Toyota Motor Corp,TM\n";
        let records = EquityRecordListPreprocessor::read_equity_records_from_csv_string(csv).unwrap();

        assert_eq!(records[0].symbol, "TM");
        assert_eq!(records[0].country, "Japan");
    }

    #[test]
    fn test_description_column_priority() {
        let csv = "symbol,desc,description,summary\n\
                   A,from desc,from description,from summary\n\
                   B,from desc,from description,\n\
                   C,from desc,  ,\n\
                   D,,,\n";
        let records = EquityRecordListPreprocessor::read_equity_records_from_csv_string(csv).unwrap();

        let descriptions: Vec<&str> = records
            .iter()
            .map(|record| record.description.as_str())
            .collect();

        assert_eq!(
            descriptions,
            vec!["from summary", "from description", "from desc", ""]
        );
    }

    #[test]
    fn test_missing_columns_yield_empty_fields() {
        let csv = "symbol,exchange\nAAPL,NASDAQ\n";
        let records = EquityRecordListPreprocessor::read_equity_records_from_csv_string(csv).unwrap();

        assert_eq!(records, vec![EquityRecord::new("AAPL", "", "", "", "")]);
    }

    #[test]
    fn test_values_are_trimmed_and_short_rows_tolerated() {
        let csv = "symbol,name,isin,country\n  MSFT  , Microsoft Corporation \nSAP,SAP SE,DE0007164600,Germany,extra\n";
        let records = EquityRecordListPreprocessor::read_equity_records_from_csv_string(csv).unwrap();

        assert_eq!(symbols_of(&records), vec!["MSFT", "SAP"]);
        assert_eq!(records[0].name, "Microsoft Corporation");
        assert_eq!(records[0].isin, "");
        assert_eq!(records[1].country, "Germany");
    }

    #[test]
    fn test_header_only_dataset_is_empty() {
        let records =
            EquityRecordListPreprocessor::read_equity_records_from_csv_string("symbol,name\n")
                .unwrap();

        assert!(records.is_empty());
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_loads_json_fixture() {
        let records =
            EquityRecordListPreprocessor::load_equity_records_from_path(&TEST_EQUITIES_JSON_PATH)
                .unwrap();

        // The non-object element is skipped
        assert_eq!(records.len(), 4);
        assert_eq!(symbols_of(&records), vec!["AAPL", "SAP", "TM", "7203"]);

        assert_eq!(records[1].description, "");
        assert_eq!(records[2].isin, "");
        assert_eq!(records[3].isin, "");
        assert_eq!(records[3].description, "Automobiles");
    }

    #[test]
    fn test_scalar_values_are_kept_as_text() {
        let json = r#"[{"symbol": true, "name": 1.5, "country": ["Japan"]}]"#;
        let records =
            EquityRecordListPreprocessor::read_equity_records_from_json_string(json).unwrap();

        assert_eq!(records[0].symbol, "true");
        assert_eq!(records[0].name, "1.5");
        assert_eq!(records[0].country, "");
    }

    #[test]
    fn test_invalid_json_is_a_parser_error() {
        for json in ["{\"symbol\": \"AAPL\"}", "[{\"symbol\": ", "not json"] {
            assert!(matches!(
                EquityRecordListPreprocessor::read_equity_records_from_json_string(json),
                Err(Error::ParserError(_))
            ));
        }
    }
}

#[cfg(test)]
mod gzip_tests {
    use super::*;

    #[test]
    fn test_extracts_gzip_compressed_csv() {
        let csv = fs::read_to_string(&*TEST_EQUITIES_CSV_PATH).unwrap();

        let records = EquityRecordListPreprocessor::extract_equity_records_from_gzip_bytes(
            &gzip(&csv),
            DatasetFormat::Csv,
        )
        .unwrap();

        assert_eq!(records.len(), 12);
        assert_eq!(records[11].symbol, "TM");
    }

    #[test]
    fn test_loads_gzip_compressed_json_from_path() {
        let json = fs::read_to_string(&*TEST_EQUITIES_JSON_PATH).unwrap();
        let path = std::env::temp_dir().join(format!(
            "equity_lookup_preprocessor_{}.JSON.GZ",
            std::process::id()
        ));
        fs::write(&path, gzip(&json)).unwrap();

        let records = EquityRecordListPreprocessor::load_equity_records_from_path(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(records.unwrap().len(), 4);
    }

    #[test]
    fn test_corrupt_gzip_is_an_io_error() {
        let result = EquityRecordListPreprocessor::extract_equity_records_from_gzip_bytes(
            b"definitely not gzip",
            DatasetFormat::Csv,
        );

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}

#[cfg(test)]
mod format_detection_tests {
    use super::*;

    #[test]
    fn test_detect_dataset_format() {
        let cases = [
            ("equities.csv", DatasetFormat::Csv, false),
            ("data/Equities.JSON", DatasetFormat::Json, false),
            ("equities.csv.gz", DatasetFormat::Csv, true),
            ("EQUITIES.JSON.GZ", DatasetFormat::Json, true),
        ];

        for (path, expected_format, expected_compressed) in cases {
            let (format, is_compressed) =
                EquityRecordListPreprocessor::detect_dataset_format(Path::new(path)).unwrap();

            assert_eq!(format, expected_format, "format of {}", path);
            assert_eq!(is_compressed, expected_compressed, "compression of {}", path);
        }
    }

    #[test]
    fn test_unsupported_extensions_are_rejected() {
        for path in ["equities.txt", "equities.gz", "equities"] {
            assert!(matches!(
                EquityRecordListPreprocessor::detect_dataset_format(Path::new(path)),
                Err(Error::ParserError(_))
            ));
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = EquityRecordListPreprocessor::load_equity_records_from_path(Path::new(
            "tests/test_data_files/does_not_exist.csv",
        ));

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
