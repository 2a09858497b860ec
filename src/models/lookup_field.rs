use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A record field which can be searched.
///
/// `Symbol` and `Isin` are unique fields (one record per value); `Name`, `Country` and
/// `Description` are multi fields which may legitimately map to many records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupField {
    Isin,
    Symbol,
    Name,
    Country,
    Description,
}

impl LookupField {
    pub const ALL: [LookupField; 5] = [
        LookupField::Isin,
        LookupField::Symbol,
        LookupField::Name,
        LookupField::Country,
        LookupField::Description,
    ];

    pub fn is_unique(self) -> bool {
        matches!(self, LookupField::Isin | LookupField::Symbol)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LookupField::Isin => "isin",
            LookupField::Symbol => "symbol",
            LookupField::Name => "name",
            LookupField::Country => "country",
            LookupField::Description => "description",
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the field of each input token is chosen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldMode {
    /// Every token is looked up in the given field.
    Explicit(LookupField),
    /// The field is detected per token. See `FieldResolver`.
    Auto,
}

impl Default for FieldMode {
    fn default() -> Self {
        FieldMode::Explicit(LookupField::Isin)
    }
}

impl fmt::Display for FieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldMode::Explicit(field) => field.fmt(f),
            FieldMode::Auto => f.write_str("auto"),
        }
    }
}

impl FromStr for FieldMode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.trim().to_lowercase().as_str() {
            "auto" => Ok(FieldMode::Auto),
            "isin" => Ok(FieldMode::Explicit(LookupField::Isin)),
            "symbol" => Ok(FieldMode::Explicit(LookupField::Symbol)),
            "name" => Ok(FieldMode::Explicit(LookupField::Name)),
            "country" => Ok(FieldMode::Explicit(LookupField::Country)),
            "description" => Ok(FieldMode::Explicit(LookupField::Description)),
            _ => Err(Error::InvalidFieldMode(mode.to_string())),
        }
    }
}
