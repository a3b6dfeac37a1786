use thiserror::Error;

use crate::domain::error::ValidationError;
use crate::domain::guest::GuestId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Neither the primary nor the fallback endpoint could be opened.
    #[error("connection error: primary: {primary}; fallback: {fallback}")]
    Connection { primary: String, fallback: String },

    /// An insert, update, or delete failed on an open connection.
    #[error("write error: {0}")]
    Write(String),

    /// A select failed on an open connection.
    #[error("read error: {0}")]
    Read(String),

    #[error("no fields provided to modify the guest")]
    NoOp,

    #[error("guest {0} not found")]
    NotFound(GuestId),

    #[error("Invalid report type specified.")]
    InvalidReportKind(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("total fees paid overflowed")]
    FeeOverflow,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
