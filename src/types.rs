// Types listed here are either shared across multiple files and/or exposed via the library.

/// A raw input token as it was pasted by the user, trimmed but otherwise untouched.
pub type InputToken = String;

/// A trimmed, lowercased value. All index keys and all lookups use this form.
pub type NormalizedValue = String;

/// Derived identity of an `EquityRecord`, used to de-duplicate matches.
///
/// See `EquityRecord::record_key` for the derivation rules.
pub type RecordKey = String;

/// Position of a record within the canonical record list of an `EquityIndex`.
pub type RecordIndex = usize;

/// Represents the number of input tokens which resolved to the same group (or the same
/// missing value).
pub type OccurrenceCount = usize;
