use thiserror::Error;

use crate::types::KeyName;

pub type CascResult<T> = Result<T, CascError>;

#[derive(Debug, Error)]
pub enum CascError {
    /// The frame envelope ends in the middle of a header field.
    #[error("file corrupt: frame envelope truncated at {field}")]
    FileCorrupt { field: &'static str },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("insufficient buffer: need {needed} bytes, have {available}")]
    InsufficientBuffer { needed: usize, available: usize },

    #[error("encryption key {0} not found")]
    KeyNotFound(KeyName),

    #[error("extra key capacity exceeded ({capacity} keys)")]
    CapacityExceeded { capacity: usize },

    #[error("out of memory while building the key registry")]
    OutOfMemory,

    #[error("invalid handle: storage session is closed")]
    InvalidHandle,

    #[error("config error: {0}")]
    Config(String),

    #[error("key file line {line}: {reason}")]
    KeyFile { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
