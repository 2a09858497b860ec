use crate::models::{
    EquityIndex, EquityRecord, ExportRow, FieldMode, FieldResolution, FieldResolver, LookupField,
};
use crate::types::{InputToken, NormalizedValue, OccurrenceCount, RecordKey};
use crate::utils::{normalize, sort_by_occurrence};
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;

/// A record matched through a unique field (symbol or ISIN).
#[derive(Debug, Clone, Serialize)]
pub struct UniqueHitGroup<'a> {
    pub record: &'a EquityRecord,
    pub matched_field: LookupField,
    /// The first input token which resolved to this record.
    pub example_input: InputToken,
    /// Number of input tokens which resolved to this record through `matched_field`.
    pub occurrence_count: OccurrenceCount,
}

/// Every record matched by one value of a multi field (name, country, or description).
#[derive(Debug, Clone, Serialize)]
pub struct MultiMatchGroup<'a> {
    pub matched_field: LookupField,
    pub query_value: NormalizedValue,
    /// The first input token which produced this group.
    pub example_input: InputToken,
    pub input_occurrence_count: OccurrenceCount,
    /// Matching records, de-duplicated by record key and sorted by symbol.
    pub matches: Vec<&'a EquityRecord>,
}

/// An input value which resolved to no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntry {
    /// The first raw input token seen for this (normalized) value.
    pub value: InputToken,
    pub occurrence_count: OccurrenceCount,
}

/// A borrowed view of either kind of result group, in display order.
#[derive(Debug, Copy, Clone)]
pub enum ResultGroup<'r, 'a> {
    Unique(&'r UniqueHitGroup<'a>),
    Multi(&'r MultiMatchGroup<'a>),
}

impl ResultGroup<'_, '_> {
    pub fn input_hit_count(&self) -> OccurrenceCount {
        match self {
            ResultGroup::Unique(group) => group.occurrence_count,
            ResultGroup::Multi(group) => group.input_occurrence_count,
        }
    }
}

/// Grouped, ordered, uncapped results of a single search.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResults<'a> {
    pub unique_hits: Vec<UniqueHitGroup<'a>>,
    pub multi_matches: Vec<MultiMatchGroup<'a>>,
    pub missing: Vec<MissingEntry>,
    pub processed_input_count: usize,
}

impl<'a> QueryResults<'a> {
    /// All groups in display order: every unique hit first, then every multi-match group.
    /// Missing values are never part of this sequence.
    pub fn groups(&self) -> impl Iterator<Item = ResultGroup<'_, 'a>> + '_ {
        self.unique_hits
            .iter()
            .map(ResultGroup::Unique)
            .chain(self.multi_matches.iter().map(ResultGroup::Multi))
    }

    pub fn group_count(&self) -> usize {
        self.unique_hits.len() + self.multi_matches.len()
    }

    /// Total number of input tokens which resolved to some group.
    pub fn input_hit_count(&self) -> OccurrenceCount {
        self.groups().map(|group| group.input_hit_count()).sum()
    }

    /// Total number of input tokens which resolved to no record.
    pub fn missing_occurrence_count(&self) -> OccurrenceCount {
        self.missing.iter().map(|entry| entry.occurrence_count).sum()
    }

    /// Flattens the results into tabular rows: one row per unique hit, and one row per
    /// member record of each multi-match group. Display caps do not apply.
    pub fn export_rows(&self) -> Vec<ExportRow<'_>> {
        let mut rows = Vec::with_capacity(
            self.unique_hits.len()
                + self
                    .multi_matches
                    .iter()
                    .map(|group| group.matches.len())
                    .sum::<usize>(),
        );

        for group in &self.unique_hits {
            rows.push(ExportRow::from_unique_hit(group));
        }

        for group in &self.multi_matches {
            for &record in &group.matches {
                rows.push(ExportRow::from_multi_match(group, record));
            }
        }

        rows
    }
}

struct MultiMatchAccumulator<'a> {
    group: MultiMatchGroup<'a>,
    match_positions: HashMap<RecordKey, usize>,
}

impl<'a> MultiMatchAccumulator<'a> {
    /// Adds hits keyed by record key. A record whose key is already present replaces the
    /// earlier one in place, so merging the same hits again changes nothing.
    fn merge_matches(&mut self, hits: &[&'a EquityRecord]) {
        for &record in hits {
            let record_key = record.record_key();

            match self.match_positions.get(&record_key) {
                Some(&position) => self.group.matches[position] = record,
                None => {
                    self.match_positions
                        .insert(record_key, self.group.matches.len());
                    self.group.matches.push(record);
                }
            }
        }
    }
}

/// Per-search accumulators. Groups are kept in first-seen order so the final stable sorts
/// fall back to input order.
#[derive(Default)]
struct QueryTally<'a> {
    unique_hits: Vec<UniqueHitGroup<'a>>,
    unique_hit_positions: HashMap<(LookupField, RecordKey), usize>,
    multi_matches: Vec<MultiMatchAccumulator<'a>>,
    multi_match_positions: HashMap<(LookupField, NormalizedValue), usize>,
    missing: Vec<MissingEntry>,
    missing_positions: HashMap<NormalizedValue, usize>,
}

impl<'a> QueryTally<'a> {
    fn record_unique_hit(
        &mut self,
        field: LookupField,
        record: &'a EquityRecord,
        input_token: &str,
    ) {
        let group_key = (field, record.record_key());

        match self.unique_hit_positions.get(&group_key) {
            Some(&position) => self.unique_hits[position].occurrence_count += 1,
            None => {
                self.unique_hit_positions
                    .insert(group_key, self.unique_hits.len());
                self.unique_hits.push(UniqueHitGroup {
                    record,
                    matched_field: field,
                    example_input: input_token.to_string(),
                    occurrence_count: 1,
                });
            }
        }
    }

    fn record_multi_match(
        &mut self,
        field: LookupField,
        normalized_token: NormalizedValue,
        input_token: &str,
        hits: &[&'a EquityRecord],
    ) {
        let group_key = (field, normalized_token);

        match self.multi_match_positions.get(&group_key) {
            Some(&position) => {
                let accumulator = &mut self.multi_matches[position];
                accumulator.group.input_occurrence_count += 1;
                accumulator.merge_matches(hits);
            }
            None => {
                let mut accumulator = MultiMatchAccumulator {
                    group: MultiMatchGroup {
                        matched_field: field,
                        query_value: group_key.1.clone(),
                        example_input: input_token.to_string(),
                        input_occurrence_count: 1,
                        matches: Vec::with_capacity(hits.len()),
                    },
                    match_positions: HashMap::with_capacity(hits.len()),
                };
                accumulator.merge_matches(hits);

                self.multi_match_positions
                    .insert(group_key, self.multi_matches.len());
                self.multi_matches.push(accumulator);
            }
        }
    }

    fn record_missing(&mut self, input_token: &str, normalized_token: NormalizedValue) {
        match self.missing_positions.get(&normalized_token) {
            Some(&position) => self.missing[position].occurrence_count += 1,
            None => {
                self.missing_positions
                    .insert(normalized_token, self.missing.len());
                self.missing.push(MissingEntry {
                    value: input_token.to_string(),
                    occurrence_count: 1,
                });
            }
        }
    }

    fn into_results(self, processed_input_count: usize) -> QueryResults<'a> {
        let mut unique_hits = self.unique_hits;
        sort_by_occurrence(
            &mut unique_hits,
            |group| group.occurrence_count,
            |group| group.record.name.as_str(),
        );

        let mut multi_matches: Vec<MultiMatchGroup<'a>> = self
            .multi_matches
            .into_iter()
            .map(|accumulator| {
                let mut group = accumulator.group;
                group.matches.sort_by(|a, b| a.symbol.cmp(&b.symbol));
                group
            })
            .collect();
        sort_by_occurrence(
            &mut multi_matches,
            |group| group.input_occurrence_count,
            |group| group.example_input.as_str(),
        );

        let mut missing = self.missing;
        sort_by_occurrence(
            &mut missing,
            |entry| entry.occurrence_count,
            |entry| entry.value.as_str(),
        );

        QueryResults {
            unique_hits,
            multi_matches,
            missing,
            processed_input_count,
        }
    }
}

/// Resolves batches of input tokens against an `EquityIndex`.
///
/// The engine only reads from the index; every search works on its own accumulators, so
/// any number of engines may search the same index concurrently.
pub struct QueryEngine<'a> {
    index: &'a EquityIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a EquityIndex) -> Self {
        QueryEngine { index }
    }

    pub fn run_query<T: AsRef<str>>(&self, input_tokens: &[T], mode: FieldMode) -> QueryResults<'a> {
        info!(
            "Resolving {} input token(s) using {} mode...",
            input_tokens.len(),
            mode
        );

        let mut tally = QueryTally::default();

        for input_token in input_tokens {
            let input_token = input_token.as_ref();
            let normalized_token = normalize(input_token);

            let field = match FieldResolver::resolve_field(input_token, mode, self.index) {
                FieldResolution::Resolved(field) => field,
                FieldResolution::Unresolved => {
                    debug!("Could not detect a field for \"{}\"", input_token);
                    tally.record_missing(input_token, normalized_token);
                    continue;
                }
            };

            if field.is_unique() {
                match self.index.get_unique(field, &normalized_token) {
                    Some(record) => tally.record_unique_hit(field, record, input_token),
                    None => tally.record_missing(input_token, normalized_token),
                }
            } else {
                let hits = self.index.get_multi(field, &normalized_token);

                if hits.is_empty() {
                    tally.record_missing(input_token, normalized_token);
                } else {
                    tally.record_multi_match(field, normalized_token, input_token, &hits);
                }
            }
        }

        let results = tally.into_results(input_tokens.len());

        info!(
            "Resolved {} unique hit(s), {} multi-match group(s), {} missing value(s)",
            results.unique_hits.len(),
            results.multi_matches.len(),
            results.missing.len()
        );

        results
    }
}
