//! Error handling for tsprism

use thiserror::Error;

/// Main error type for encode/compress analysis
#[derive(Error, Debug)]
pub enum TsPrismError {
    #[error("Type mismatch: column is {expected}, value is {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Compression error: {0}")]
    Compression(String),

    #[error("Decompression error: {0}")]
    Decompression(String),

    #[error("Compressor {compressor} exceeded deadline: {elapsed_nanos}ns > {deadline_nanos}ns")]
    DeadlineExceeded {
        compressor: String,
        elapsed_nanos: u64,
        deadline_nanos: u64,
    },

    #[error("Cursor error: {0}")]
    Cursor(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tsprism operations
pub type TsPrismResult<T> = std::result::Result<T, TsPrismError>;

/// Macro for creating encoding errors
#[macro_export]
macro_rules! encoding_err {
    ($msg:expr) => {
        $crate::common::error::TsPrismError::Encoding($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::TsPrismError::Encoding(format!($fmt, $($arg)*))
    };
}

/// Macro for creating compression errors
#[macro_export]
macro_rules! compression_err {
    ($msg:expr) => {
        $crate::common::error::TsPrismError::Compression($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::TsPrismError::Compression(format!($fmt, $($arg)*))
    };
}
