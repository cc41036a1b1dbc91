//! Error types for recordset.

use thiserror::Error;

/// Errors returned by recordset operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordsetError {
    /// An argument is outside the domain the operation accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A deferred call was requested outside a tokio runtime.
    #[error("No tokio runtime available to schedule deferred calls")]
    RuntimeUnavailable,

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RecordsetError>;
