//! Error types for haulsheet

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Driver form validation failures
///
/// The `Display` text is the message shown to the user; a failed save
/// carries exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequired(&'static str),

    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Birth date must use the YYYY-MM-DD format")]
    InvalidBirthDate,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown {entity} field: {key}")]
    UnknownField { entity: &'static str, key: String },

    #[error("No {entity} #{index} (have {len})")]
    IndexOutOfRange {
        entity: &'static str,
        index: usize,
        len: usize,
    },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Sheet format error: {0}")]
    SheetFormat(String),

    #[error("CSV import error: {0}")]
    CsvImport(String),

    #[error("PDF render error: {0}")]
    Pdf(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("{0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, Error>;
