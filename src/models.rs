pub mod error;
pub use error::Error;

pub mod lookup_field;
pub use lookup_field::{FieldMode, LookupField};

pub mod equity_record;
pub use equity_record::EquityRecord;

pub mod equity_record_list_preprocessor;
pub use equity_record_list_preprocessor::{DatasetFormat, EquityRecordListPreprocessor};

pub mod equity_index;
pub use equity_index::EquityIndex;

pub mod field_resolver;
pub use field_resolver::{AutoDetectionRule, FieldResolution, FieldResolver, AUTO_DETECTION_RULES};

pub mod query_engine;
pub use query_engine::{
    MissingEntry, MultiMatchGroup, QueryEngine, QueryResults, ResultGroup, UniqueHitGroup,
};

pub mod export_row;
pub use export_row::{ExportRow, ExportRowKind};

pub mod result_assembler;
pub use result_assembler::{
    AssembledResults, DisplayedMultiMatchGroup, ResultAssembler, ResultAssemblerConfig,
    ResultSummary,
};

pub mod equity_lookup;
pub use equity_lookup::{EquityLookup, SearchOutcome};
