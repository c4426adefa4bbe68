//! Error types for agenda feed generation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    /// Unknown output format token. Callers surface this as a not-found
    /// condition, not a crash.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The requested week lies beyond the current ISO week. The display
    /// string is the fixed user-facing rejection.
    #[error("Keine Daten für zukünftige Wochen")]
    FutureWindow,

    /// A stored start/end value that cannot be parsed as a wall-clock
    /// timestamp. Data-integrity failure, never coerced to a default.
    #[error("Malformed timestamp {value:?} in item {uid}")]
    MalformedTimestamp { uid: String, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias used throughout agenda-core.
pub type Result<T> = std::result::Result<T, AgendaError>;
