use crate::constants::{MISSING_DISPLAY_LIMIT, MULTI_MATCH_DISPLAY_LIMIT};
use crate::models::ResultAssemblerConfig;

pub const DEFAULT_RESULT_ASSEMBLER_CONFIG: &ResultAssemblerConfig = &ResultAssemblerConfig {
    multi_match_display_limit: MULTI_MATCH_DISPLAY_LIMIT,
    missing_display_limit: MISSING_DISPLAY_LIMIT,
};
