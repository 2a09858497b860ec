use crate::models::{EquityIndex, FieldMode, LookupField};
use crate::utils::{looks_like_isin, normalize};

/// A single step of field auto-detection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AutoDetectionRule {
    /// The token has the shape of an ISIN.
    IsinShape,
    /// The normalized token is a known symbol.
    SymbolIndexed,
    /// The normalized token is a known company name.
    NameIndexed,
}

/// Auto-detection rules in priority order. The first rule which applies decides the field.
///
/// Country and description are deliberately absent: their values are too ambiguous to be
/// detected safely, so they are only reachable through an explicit field selection.
pub const AUTO_DETECTION_RULES: &[AutoDetectionRule] = &[
    AutoDetectionRule::IsinShape,
    AutoDetectionRule::SymbolIndexed,
    AutoDetectionRule::NameIndexed,
];

impl AutoDetectionRule {
    pub fn field(self) -> LookupField {
        match self {
            AutoDetectionRule::IsinShape => LookupField::Isin,
            AutoDetectionRule::SymbolIndexed => LookupField::Symbol,
            AutoDetectionRule::NameIndexed => LookupField::Name,
        }
    }

    pub fn applies(self, input_token: &str, normalized_token: &str, index: &EquityIndex) -> bool {
        match self {
            AutoDetectionRule::IsinShape => looks_like_isin(input_token),
            AutoDetectionRule::SymbolIndexed => {
                index.contains(LookupField::Symbol, normalized_token)
            }
            AutoDetectionRule::NameIndexed => index.contains(LookupField::Name, normalized_token),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldResolution {
    Resolved(LookupField),
    Unresolved,
}

pub struct FieldResolver {}

impl FieldResolver {
    /// Decides which field an input token should be looked up in.
    ///
    /// An explicit mode is returned unchanged. In auto mode the `AUTO_DETECTION_RULES` are
    /// walked in order; an ISIN-shaped token resolves to `isin` even when no record carries
    /// that ISIN.
    pub fn resolve_field(input_token: &str, mode: FieldMode, index: &EquityIndex) -> FieldResolution {
        match mode {
            FieldMode::Explicit(field) => FieldResolution::Resolved(field),
            FieldMode::Auto => {
                let normalized_token = normalize(input_token);

                AUTO_DETECTION_RULES
                    .iter()
                    .find(|rule| rule.applies(input_token, &normalized_token, index))
                    .map_or(FieldResolution::Unresolved, |rule| {
                        FieldResolution::Resolved(rule.field())
                    })
            }
        }
    }
}
