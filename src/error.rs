//! Error types for the MCC/MNC library
//!
//! Query validation and PLMN decoding each have their own error enum so callers
//! can match on them directly. `MccMncError` wraps both together with the I/O
//! and JSON failures that can happen while loading a dataset.

use thiserror::Error;

/// Filter configuration rejected before any record is examined
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid parameter (object expected)")]
    NotAnObject,

    #[error("Invalid statusCode parameter (not found in statusCode list): {0}")]
    UnknownStatusCode(String),

    #[error("Invalid {field} parameter (string expected)")]
    InvalidType { field: &'static str },

    /// `mcc`/`mnc` given alongside a `plmn` that already determines it
    #[error("Don't use plmn and {field} parameter at once")]
    Conflict { field: &'static str },

    #[error("Invalid region parameter (not found in region list): {0}")]
    UnknownRegion(String),
}

/// Malformed encoded PLMN
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlmnError {
    #[error("plmn size lower than 6 (got {len})")]
    TooShort { len: usize },
}

/// Main error type for dataset loading and queries
#[derive(Error, Debug)]
pub enum MccMncError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Plmn(#[from] PlmnError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Dataset content that parsed but cannot be used
    #[error("{0}")]
    Dataset(String),
}

pub type Result<T> = std::result::Result<T, MccMncError>;
