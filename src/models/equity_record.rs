use crate::constants::RECORD_KEY_NAME_COUNTRY_SEPARATOR;
use crate::models::LookupField;
use crate::types::RecordKey;
use crate::utils::normalize;
use serde::Serialize;

/// A single equity in the dataset.
///
/// Every field is a plain string which may be empty. Fields which are absent or malformed
/// in a source document become empty strings at ingestion, so downstream code never has
/// to check for presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EquityRecord {
    pub symbol: String,
    pub name: String,
    pub isin: String,
    pub country: String,
    pub description: String,
}

impl EquityRecord {
    pub fn new(symbol: &str, name: &str, isin: &str, country: &str, description: &str) -> Self {
        EquityRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            isin: isin.to_string(),
            country: country.to_string(),
            description: description.to_string(),
        }
    }

    pub fn field_value(&self, field: LookupField) -> &str {
        match field {
            LookupField::Isin => &self.isin,
            LookupField::Symbol => &self.symbol,
            LookupField::Name => &self.name,
            LookupField::Country => &self.country,
            LookupField::Description => &self.description,
        }
    }

    /// Derives the identity used to de-duplicate matches: the normalized ISIN if present,
    /// else the normalized symbol if present, else the normalized name and country.
    pub fn record_key(&self) -> RecordKey {
        let isin = normalize(&self.isin);
        if !isin.is_empty() {
            return isin;
        }

        let symbol = normalize(&self.symbol);
        if !symbol.is_empty() {
            return symbol;
        }

        format!(
            "{}{}{}",
            normalize(&self.name),
            RECORD_KEY_NAME_COUNTRY_SEPARATOR,
            normalize(&self.country)
        )
    }
}
