use crate::models::{EquityIndex, EquityRecord, FieldMode, QueryResults};
use crate::{search_index, Error};
use log::info;
use std::sync::Arc;

/// Outcome of a search over pasted text.
#[derive(Debug)]
pub enum SearchOutcome<'a> {
    /// The pasted text contained no input tokens. This is distinct from a completed search
    /// in which every input was missing.
    NoInput,
    Completed(QueryResults<'a>),
}

/// Owns the current equity index and answers searches against it.
///
/// A build always produces a complete new index which then replaces the previous one, so a
/// partially built index is never visible. Callers which need to search from several
/// threads can take a `snapshot` of the current index and pass it to `search_index`.
#[derive(Debug, Default)]
pub struct EquityLookup {
    index: Option<Arc<EquityIndex>>,
}

impl EquityLookup {
    pub fn new() -> Self {
        EquityLookup { index: None }
    }

    /// Builds an index over `records`, replacing any previously built one.
    pub fn build(&mut self, records: Vec<EquityRecord>) {
        let index = EquityIndex::build(records);

        self.index = Some(Arc::new(index));
    }

    pub fn is_built(&self) -> bool {
        self.index.is_some()
    }

    pub fn snapshot(&self) -> Option<Arc<EquityIndex>> {
        self.index.clone()
    }

    pub fn record_count(&self) -> usize {
        self.index.as_ref().map_or(0, |index| index.record_count())
    }

    /// Splits `raw_text` into input tokens and resolves them against the current index.
    ///
    /// Fails with `Error::IndexNotBuilt` if no dataset has been built yet.
    pub fn search(&self, raw_text: &str, mode: FieldMode) -> Result<SearchOutcome<'_>, Error> {
        let index = self.index.as_deref().ok_or(Error::IndexNotBuilt)?;

        let outcome = search_index(index, raw_text, mode);

        if let SearchOutcome::NoInput = outcome {
            info!(
                "No input to search ({} records loaded)",
                index.record_count()
            );
        }

        Ok(outcome)
    }
}
