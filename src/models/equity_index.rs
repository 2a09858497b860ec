use crate::models::{EquityRecord, LookupField};
use crate::types::{NormalizedValue, RecordIndex};
use crate::utils::normalize;
use log::info;
use std::collections::HashMap;

/// Per-field lookup structures over a complete set of equity records.
///
/// Unique fields (`symbol`, `isin`) map each normalized value to a single record; the
/// first record seen with a given value wins and later ones are ignored. Multi fields
/// (`name`, `country`, `description`) map each normalized value to every record carrying
/// it, in dataset order. Records with an empty value for a field are absent from that
/// field's index.
///
/// Once built, an index is never mutated by searches and can be shared between threads.
#[derive(Debug, Default)]
pub struct EquityIndex {
    records: Vec<EquityRecord>,
    symbol_index: HashMap<NormalizedValue, RecordIndex>,
    isin_index: HashMap<NormalizedValue, RecordIndex>,
    name_index: HashMap<NormalizedValue, Vec<RecordIndex>>,
    country_index: HashMap<NormalizedValue, Vec<RecordIndex>>,
    description_index: HashMap<NormalizedValue, Vec<RecordIndex>>,
}

impl EquityIndex {
    /// Builds a new index from the given records.
    pub fn build(records: Vec<EquityRecord>) -> Self {
        let mut instance = EquityIndex::default();

        instance.rebuild(records);

        instance
    }

    /// Discards all existing state and ingests the given records.
    pub fn rebuild(&mut self, records: Vec<EquityRecord>) {
        self.clear();

        self.symbol_index.reserve(records.len());
        self.isin_index.reserve(records.len());

        for (record_index, record) in records.iter().enumerate() {
            Self::insert_unique(&mut self.symbol_index, &record.symbol, record_index);
            Self::insert_unique(&mut self.isin_index, &record.isin, record_index);
            Self::insert_multi(&mut self.name_index, &record.name, record_index);
            Self::insert_multi(&mut self.country_index, &record.country, record_index);
            Self::insert_multi(&mut self.description_index, &record.description, record_index);
        }

        self.records = records;

        info!(
            "Indexed {} records ({} symbols, {} ISINs, {} names, {} countries, {} descriptions)",
            self.records.len(),
            self.symbol_index.len(),
            self.isin_index.len(),
            self.name_index.len(),
            self.country_index.len(),
            self.description_index.len()
        );
    }

    fn clear(&mut self) {
        self.records.clear();
        self.symbol_index.clear();
        self.isin_index.clear();
        self.name_index.clear();
        self.country_index.clear();
        self.description_index.clear();
    }

    fn insert_unique(
        index: &mut HashMap<NormalizedValue, RecordIndex>,
        value: &str,
        record_index: RecordIndex,
    ) {
        let key = normalize(value);
        if key.is_empty() {
            return;
        }

        index.entry(key).or_insert(record_index);
    }

    fn insert_multi(
        index: &mut HashMap<NormalizedValue, Vec<RecordIndex>>,
        value: &str,
        record_index: RecordIndex,
    ) {
        let key = normalize(value);
        if key.is_empty() {
            return;
        }

        index.entry(key).or_insert_with(Vec::new).push(record_index);
    }

    /// The canonical record list, in dataset order.
    pub fn records(&self) -> &[EquityRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up an already-normalized value in a unique field.
    ///
    /// Returns `None` for multi fields.
    pub fn get_unique(
        &self,
        field: LookupField,
        normalized_value: &str,
    ) -> Option<&EquityRecord> {
        let index = match field {
            LookupField::Symbol => &self.symbol_index,
            LookupField::Isin => &self.isin_index,
            _ => return None,
        };

        index
            .get(normalized_value)
            .map(|&record_index| &self.records[record_index])
    }

    /// Looks up an already-normalized value in a multi field, returning every matching
    /// record in dataset order (duplicates included).
    ///
    /// Returns an empty list for unique fields.
    pub fn get_multi(&self, field: LookupField, normalized_value: &str) -> Vec<&EquityRecord> {
        let index = match field {
            LookupField::Name => &self.name_index,
            LookupField::Country => &self.country_index,
            LookupField::Description => &self.description_index,
            _ => return Vec::new(),
        };

        index
            .get(normalized_value)
            .map(|record_indices| {
                record_indices
                    .iter()
                    .map(|&record_index| &self.records[record_index])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Determines whether an already-normalized value is present in a field's index.
    pub fn contains(&self, field: LookupField, normalized_value: &str) -> bool {
        match field {
            LookupField::Symbol => self.symbol_index.contains_key(normalized_value),
            LookupField::Isin => self.isin_index.contains_key(normalized_value),
            LookupField::Name => self.name_index.contains_key(normalized_value),
            LookupField::Country => self.country_index.contains_key(normalized_value),
            LookupField::Description => self.description_index.contains_key(normalized_value),
        }
    }
}
