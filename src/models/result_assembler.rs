use crate::models::{EquityRecord, MissingEntry, MultiMatchGroup, QueryResults, UniqueHitGroup};
use crate::types::OccurrenceCount;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultAssemblerConfig {
    pub multi_match_display_limit: usize,
    pub missing_display_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub group_count: usize,
    /// Sum of occurrence counts across every returned group.
    pub input_hit_count: OccurrenceCount,
    pub distinct_missing_count: usize,
    pub missing_occurrence_count: OccurrenceCount,
    pub processed_input_count: usize,
}

/// A multi-match group trimmed to the display limit. Counts are never adjusted.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayedMultiMatchGroup<'r, 'a> {
    pub group: &'r MultiMatchGroup<'a>,
    pub shown_matches: &'r [&'a EquityRecord],
    pub omitted_match_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssembledResults<'r, 'a> {
    pub unique_hits: &'r [UniqueHitGroup<'a>],
    pub multi_matches: Vec<DisplayedMultiMatchGroup<'r, 'a>>,
    pub shown_missing: &'r [MissingEntry],
    pub omitted_missing_count: usize,
    pub summary: ResultSummary,
}

/// Applies display limits to query results for presentation.
///
/// The assembled output borrows from the `QueryResults`, which remain complete; consumers
/// needing every row (such as an export) should read the `QueryResults` directly.
pub struct ResultAssembler<'c> {
    config: &'c ResultAssemblerConfig,
}

impl<'c> ResultAssembler<'c> {
    pub fn new(config: &'c ResultAssemblerConfig) -> Self {
        ResultAssembler { config }
    }

    pub fn assemble<'r, 'a>(&self, results: &'r QueryResults<'a>) -> AssembledResults<'r, 'a> {
        let multi_matches = results
            .multi_matches
            .iter()
            .map(|group| {
                let (shown_matches, omitted_match_count) =
                    cap(&group.matches, self.config.multi_match_display_limit);

                DisplayedMultiMatchGroup {
                    group,
                    shown_matches,
                    omitted_match_count,
                }
            })
            .collect();

        let (shown_missing, omitted_missing_count) =
            cap(&results.missing, self.config.missing_display_limit);

        AssembledResults {
            unique_hits: &results.unique_hits,
            multi_matches,
            shown_missing,
            omitted_missing_count,
            summary: Self::summarize(results),
        }
    }

    pub fn summarize(results: &QueryResults<'_>) -> ResultSummary {
        ResultSummary {
            group_count: results.group_count(),
            input_hit_count: results.input_hit_count(),
            distinct_missing_count: results.missing.len(),
            missing_occurrence_count: results.missing_occurrence_count(),
            processed_input_count: results.processed_input_count,
        }
    }
}

fn cap<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);

    (&items[..shown], items.len() - shown)
}
