use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexcmpError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("length mismatch: expected {expected} {unit}, actual {actual} {unit}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        unit: &'static str,
    },

    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, HexcmpError>;
