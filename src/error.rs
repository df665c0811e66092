//! Error taxonomy for the admissions assistant.
//!
//! Every failure surfaced by the library falls into one of these buckets.
//! Remote-call errors (`Embedding`, `Model`) are raised only after the
//! bounded retry loop in `remote` is exhausted.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad or missing CLI input. The binary prints a usage message and
    /// exits with code 1.
    #[error("{0}")]
    Usage(String),

    /// The source document could not be read or parsed.
    #[error("failed to load document {path}: {reason}")]
    DocumentLoad { path: String, reason: String },

    /// The embedding endpoint rejected the request or became unreachable.
    #[error("embedding request failed: {0}")]
    Embedding(String),

    /// The chat model endpoint rejected the request or became unreachable.
    #[error("model request failed: {0}")]
    Model(String),

    /// Invalid configuration values or an unreadable config file.
    #[error("invalid configuration: {0}")]
    Config(String),
}
