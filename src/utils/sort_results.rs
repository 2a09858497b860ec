use crate::types::OccurrenceCount;

/// Sorts result entries by their occurrence counts.
///
/// ### Sorting Order:
/// - **Primary:** Occurrence count in descending order (most frequent first).
/// - **Secondary:** The tie-break text in ascending ordinal (byte-wise) order. An empty
///   tie-break text sorts first.
/// - **Tertiary:** Original order. The sort is stable, so entries which are equal on both
///   keys keep the order in which they were first seen.
///
/// ### Example:
/// ```rust
/// use equity_lookup::utils::sort_by_occurrence;
///
/// let mut entries = vec![("MSFT", 1), ("AAPL", 3), ("", 1), ("GOOG", 1)];
/// sort_by_occurrence(&mut entries, |entry| entry.1, |entry| entry.0);
///
/// assert_eq!(entries, vec![("AAPL", 3), ("", 1), ("GOOG", 1), ("MSFT", 1)]);
/// ```
pub fn sort_by_occurrence<T, C, K>(entries: &mut [T], occurrence_count: C, tie_break: K)
where
    C: Fn(&T) -> OccurrenceCount,
    K: Fn(&T) -> &str,
{
    entries.sort_by(|a, b| {
        occurrence_count(b)
            .cmp(&occurrence_count(a))
            .then_with(|| tie_break(a).cmp(tie_break(b)))
    });
}
