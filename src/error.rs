//! Error types shared by the parser and the country context.

use thiserror::Error;

/// Record-level and configuration failures.
///
/// Record-level variants are recovered by skipping the offending line;
/// configuration variants abort the run before any pass starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GnsError {
    #[error("invalid {field} value {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown feature class {0:?}")]
    UnknownFeatureClass(String),

    #[error("country code must not be empty")]
    EmptyCountryCode,

    #[error("country name must not be empty")]
    EmptyCountryName,

    #[error("no country name known for code {0:?}")]
    UnknownCountry(String),
}

pub type GnsResult<T> = std::result::Result<T, GnsError>;
