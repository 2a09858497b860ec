use crate::constants::DESCRIPTION_COLUMN_CANDIDATES;
use crate::models::EquityRecord;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
}

pub struct EquityRecordListPreprocessor {}

impl EquityRecordListPreprocessor {
    /// Parses a CSV dataset with a header row.
    ///
    /// Columns are matched by name, ignoring case and surrounding whitespace: `symbol`,
    /// `name`, `isin`, `country`, and the first non-empty of `summary`, `description`, or
    /// `desc` for the description. Missing columns yield empty fields and unreadable rows
    /// are skipped.
    pub fn read_equity_records_from_csv_string(csv: &str) -> Result<Vec<EquityRecord>, Error> {
        let mut equity_records = Vec::new();

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // Short rows are tolerated
            .from_reader(csv.as_bytes());

        // Extract column headers
        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column_position = |column_name: &str| {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column_name))
        };

        let symbol_column = column_position("symbol");
        let name_column = column_position("name");
        let isin_column = column_position("isin");
        let country_column = column_position("country");
        let description_columns: Vec<usize> = DESCRIPTION_COLUMN_CANDIDATES
            .iter()
            .filter_map(|&candidate| column_position(candidate))
            .collect();

        if symbol_column.is_none() && isin_column.is_none() && name_column.is_none() {
            warn!(
                "Dataset has none of the symbol, isin, or name columns (headers: {:?})",
                headers
            );
        }

        for (row_index, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable row {}: {}", row_index + 1, e);
                    continue;
                }
            };

            let value_at = |column: Option<usize>| {
                column
                    .and_then(|column| record.get(column))
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            };

            let description = description_columns
                .iter()
                .filter_map(|&column| record.get(column))
                .map(str::trim)
                .find(|value| !value.is_empty())
                .unwrap_or_default()
                .to_string();

            equity_records.push(EquityRecord {
                symbol: value_at(symbol_column),
                name: value_at(name_column),
                isin: value_at(isin_column),
                country: value_at(country_column),
                description,
            });
        }

        Ok(equity_records)
    }

    /// Parses a JSON dataset: an array of objects with `symbol`, `name`, `isin`, `country`
    /// and `description` keys.
    ///
    /// Absent or `null` keys yield empty fields; numbers and booleans are kept in their
    /// textual form. Array elements which are not objects are skipped.
    pub fn read_equity_records_from_json_string(json: &str) -> Result<Vec<EquityRecord>, Error> {
        let values: Vec<Value> = serde_json::from_str(json)?;

        let mut equity_records = Vec::with_capacity(values.len());

        for (element_index, value) in values.iter().enumerate() {
            if !value.is_object() {
                warn!("Skipping non-object element {}: {}", element_index, value);
                continue;
            }

            equity_records.push(EquityRecord {
                symbol: Self::json_field(value, "symbol"),
                name: Self::json_field(value, "name"),
                isin: Self::json_field(value, "isin"),
                country: Self::json_field(value, "country"),
                description: Self::json_field(value, "description"),
            });
        }

        Ok(equity_records)
    }

    fn json_field(value: &Value, key: &str) -> String {
        match value.get(key) {
            Some(Value::String(text)) => text.trim().to_string(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => String::new(),
        }
    }

    pub fn read_equity_records_from_string(
        text: &str,
        format: DatasetFormat,
    ) -> Result<Vec<EquityRecord>, Error> {
        match format {
            DatasetFormat::Csv => Self::read_equity_records_from_csv_string(text),
            DatasetFormat::Json => Self::read_equity_records_from_json_string(text),
        }
    }

    /// Decompress and parse a Gzip-compressed dataset
    pub fn extract_equity_records_from_gzip_bytes(
        read_bytes: &[u8],
        format: DatasetFormat,
    ) -> Result<Vec<EquityRecord>, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_equity_records_from_string(&decompressed_data, format)
    }

    /// Determines the dataset format from a file name: `.csv` or `.json`, optionally
    /// followed by `.gz`. The returned flag tells whether the file is Gzip-compressed.
    pub fn detect_dataset_format(path: &Path) -> Result<(DatasetFormat, bool), Error> {
        let file_name = path
            .file_name()
            .and_then(|file_name| file_name.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| Error::ParserError(format!("Invalid dataset path: {:?}", path)))?;

        let is_compressed = file_name.ends_with(".gz");
        let file_name = file_name.trim_end_matches(".gz");

        if file_name.ends_with(".csv") {
            Ok((DatasetFormat::Csv, is_compressed))
        } else if file_name.ends_with(".json") {
            Ok((DatasetFormat::Json, is_compressed))
        } else {
            Err(Error::ParserError(format!(
                "Unsupported dataset file type: {:?} (expected .csv, .json, .csv.gz, or .json.gz)",
                path
            )))
        }
    }

    pub fn load_equity_records_from_path(path: &Path) -> Result<Vec<EquityRecord>, Error> {
        let (format, is_compressed) = Self::detect_dataset_format(path)?;

        info!("Loading {:?} dataset from {:?}...", format, path);

        let equity_records = if is_compressed {
            let bytes = fs::read(path)?;
            Self::extract_equity_records_from_gzip_bytes(&bytes, format)?
        } else {
            let text = fs::read_to_string(path)?;
            Self::read_equity_records_from_string(&text, format)?
        };

        info!("Loaded {} records", equity_records.len());

        Ok(equity_records)
    }
}
