//! Error types for the mapping layer

use thiserror::Error;

/// Errors that can occur while generating statements, executing them or
/// decoding their results.
#[derive(Error, Debug)]
pub enum OgmError {
    /// A batch generator was handed an empty collection
    #[error("empty input: at least one entity is required")]
    EmptyInput,

    /// Update/upsert was called without a set fragment
    #[error("set fragment required for update/upsert")]
    SetFragmentRequired,

    /// The decode destination is an absent optional target
    #[error("nil target: cannot decode into an absent destination")]
    NilTarget,

    /// Zero rows where the destination requires at least one
    #[error("record not found")]
    RecordNotFound,

    /// The executor reported a non-success status
    #[error("execution failed (code: {code}, msg: {message})")]
    Execution { code: i32, message: String },

    /// The executor failed before any status was available
    #[error("transport error: {0}")]
    Transport(String),

    /// A value could not be assigned to its destination
    #[error("conversion error: {0}")]
    Conversion(String),

    /// The result set is internally inconsistent
    #[error("malformed result set: {0}")]
    MalformedResult(String),

    /// Invalid configuration
    #[error("config error: {0}")]
    Config(String),

    /// YAML (de)serialization error
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OgmResult<T> = Result<T, OgmError>;

/// Map an executor status code to a result.
///
/// Executors built on a status-returning driver call this after every
/// statement so that a non-success code always surfaces as an error instead
/// of an empty result set. Zero means success.
pub fn check_status(code: i32, message: impl Into<String>) -> OgmResult<()> {
    if code == 0 {
        Ok(())
    } else {
        Err(OgmError::Execution {
            code,
            message: message.into(),
        })
    }
}
