use crate::models::{EquityRecord, LookupField, MultiMatchGroup, UniqueHitGroup};
use crate::types::OccurrenceCount;
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportRowKind {
    /// Row produced by a unique hit.
    Unique,
    /// Row produced by one member of a multi-match group.
    Query,
}

/// One flat row of a tabular export.
///
/// Field order matches `EXPORT_CSV_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'r> {
    pub card_kind: ExportRowKind,
    pub match_field: LookupField,
    pub match_input: &'r str,
    pub input_count: OccurrenceCount,
    pub symbol: &'r str,
    pub isin: &'r str,
    pub name: &'r str,
    pub country: &'r str,
    pub description: &'r str,
}

impl<'r> ExportRow<'r> {
    pub fn from_unique_hit(group: &'r UniqueHitGroup<'_>) -> Self {
        Self::with_record(
            ExportRowKind::Unique,
            group.matched_field,
            &group.example_input,
            group.occurrence_count,
            group.record,
        )
    }

    pub fn from_multi_match(group: &'r MultiMatchGroup<'_>, record: &'r EquityRecord) -> Self {
        Self::with_record(
            ExportRowKind::Query,
            group.matched_field,
            &group.example_input,
            group.input_occurrence_count,
            record,
        )
    }

    fn with_record(
        card_kind: ExportRowKind,
        match_field: LookupField,
        match_input: &'r str,
        input_count: OccurrenceCount,
        record: &'r EquityRecord,
    ) -> Self {
        ExportRow {
            card_kind,
            match_field,
            match_input,
            input_count,
            symbol: &record.symbol,
            isin: &record.isin,
            name: &record.name,
            country: &record.country,
            description: &record.description,
        }
    }
}
