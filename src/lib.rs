#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_RESULT_ASSEMBLER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    AssembledResults, DatasetFormat, EquityIndex, EquityLookup, EquityRecord,
    EquityRecordListPreprocessor, Error, ExportRow, ExportRowKind, FieldMode, FieldResolution,
    FieldResolver, LookupField, MissingEntry, MultiMatchGroup, QueryEngine, QueryResults,
    ResultAssembler, ResultAssemblerConfig, ResultGroup, ResultSummary, SearchOutcome,
    UniqueHitGroup,
};
pub mod types;
pub use types::{InputToken, NormalizedValue, OccurrenceCount, RecordKey};
pub mod utils;
pub use utils::{looks_like_isin, normalize, split_inputs, write_export_csv};

/// Splits pasted text into input tokens and resolves each of them against `index`.
///
/// Returns `SearchOutcome::NoInput` when the text holds no tokens at all.
pub fn search_index<'a>(index: &'a EquityIndex, raw_text: &str, mode: FieldMode) -> SearchOutcome<'a> {
    let input_tokens = split_inputs(raw_text);

    if input_tokens.is_empty() {
        return SearchOutcome::NoInput;
    }

    SearchOutcome::Completed(QueryEngine::new(index).run_query(&input_tokens, mode))
}
