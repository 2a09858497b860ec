pub mod looks_like_isin;
pub use looks_like_isin::looks_like_isin;

pub mod normalize;
pub use normalize::{normalize, normalize_opt};

pub mod sort_results;
pub use sort_results::sort_by_occurrence;

pub mod split_inputs;
pub use split_inputs::split_inputs;

pub mod write_export_csv;
pub use write_export_csv::write_export_csv;
