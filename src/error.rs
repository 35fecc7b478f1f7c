use thiserror::Error;

use crate::holiday::region::Region;

/// A single raw holiday record that could not be turned into a [`Holiday`].
///
/// These are recoverable: the catalog drops the record and keeps going.
///
/// [`Holiday`]: crate::holiday::holiday::Holiday
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayRecordError {
    #[error("holiday '{name}': cannot parse {field} date '{value}'")]
    InvalidDate {
        name: String,
        field: &'static str,
        value: String,
    },

    #[error("holiday '{name}': missing {field} date")]
    MissingBound { name: String, field: &'static str },

    #[error("holiday '{name}': malformed record: {reason}")]
    Malformed { name: String, reason: String },

    #[error("holiday '{name}': end date {end} lies before start date {start}")]
    InvertedRange {
        name: String,
        start: String,
        end: String,
    },
}

impl HolidayRecordError {
    pub fn name(&self) -> &str {
        match self {
            HolidayRecordError::InvalidDate { name, .. } => name,
            HolidayRecordError::MissingBound { name, .. } => name,
            HolidayRecordError::Malformed { name, .. } => name,
            HolidayRecordError::InvertedRange { name, .. } => name,
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("cannot read holiday catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse holiday catalog: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("unknown region code '{0}'")]
    UnknownRegion(String),

    #[error("no recommendations available: no holidays for {region} in {year}")]
    NoHolidaysAvailable { region: Region, year: i32 },
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
