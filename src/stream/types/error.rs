//! Custom error types for the kaitai-stream crate.

use std::fmt::Display;

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum StreamError {
    /// A bounds-checked read would run past the end of the window.
    #[error("End of stream: requested {requested} bytes, but only {available} bytes available")]
    EndOfStream { requested: usize, available: usize },

    /// A terminator scan reached the end of the window without a match.
    #[error("End of stream reached while looking for terminator {terminator:#04x} ({available} bytes scanned)")]
    MissingTerminator { terminator: u8, available: usize },

    /// A bit-level read asked for more bits than the reader supports.
    #[error("Unsupported bit width: tried to read {requested} bits, the maximum is {max}")]
    UnsupportedBitWidth { requested: u32, max: u32 },

    /// A transform was called with parameters it does not implement.
    #[error("Not implemented: {0}")]
    UnsupportedConfiguration(String),

    /// A delegated operation has no provider configured, or the provider failed.
    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// The text decoder does not know the requested encoding label.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// A structurally invalid argument, such as an empty XOR key.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested offset/length does not fit inside the backing buffer.
    #[error("Invalid window: offset {offset} + length {length} exceeds buffer of {buffer_len} bytes")]
    InvalidWindow {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },

    /// Fixed contents did not match what was read.
    #[error("Unexpected data: expected {expected:02x?}, but got {actual:02x?}")]
    UnexpectedData { expected: Vec<u8>, actual: Vec<u8> },

    #[error("Validation failed at {src_path}: not equal, expected [{expected}], but got [{actual}]")]
    ValidationNotEqual {
        expected: String,
        actual: String,
        src_path: String,
    },

    #[error("Validation failed at {src_path}: not in range, min [{min}], but got [{actual}]")]
    ValidationLessThan {
        min: String,
        actual: String,
        src_path: String,
    },

    #[error("Validation failed at {src_path}: not in range, max [{max}], but got [{actual}]")]
    ValidationGreaterThan {
        max: String,
        actual: String,
        src_path: String,
    },

    #[error("Validation failed at {src_path}: not any of the list, got [{actual}]")]
    ValidationNotAnyOf { actual: String, src_path: String },

    #[error("Validation failed at {src_path}: not matching the expression, got [{actual}]")]
    ValidationExpr { actual: String, src_path: String },
}

impl StreamError {
    /// Builds a `ValidationNotEqual` error from any displayable values.
    pub fn not_equal(expected: impl Display, actual: impl Display, src_path: &str) -> Self {
        Self::ValidationNotEqual {
            expected: expected.to_string(),
            actual: actual.to_string(),
            src_path: src_path.to_string(),
        }
    }

    pub fn less_than(min: impl Display, actual: impl Display, src_path: &str) -> Self {
        Self::ValidationLessThan {
            min: min.to_string(),
            actual: actual.to_string(),
            src_path: src_path.to_string(),
        }
    }

    pub fn greater_than(max: impl Display, actual: impl Display, src_path: &str) -> Self {
        Self::ValidationGreaterThan {
            max: max.to_string(),
            actual: actual.to_string(),
            src_path: src_path.to_string(),
        }
    }

    pub fn not_any_of(actual: impl Display, src_path: &str) -> Self {
        Self::ValidationNotAnyOf {
            actual: actual.to_string(),
            src_path: src_path.to_string(),
        }
    }

    pub fn expr_mismatch(actual: impl Display, src_path: &str) -> Self {
        Self::ValidationExpr {
            actual: actual.to_string(),
            src_path: src_path.to_string(),
        }
    }

    /// Returns `true` for errors caused by running out of input.
    ///
    /// Parsers that treat a truncated trailing field as absent match on this
    /// instead of on the individual variants.
    pub fn is_eof(&self) -> bool {
        matches!(
            self,
            Self::EndOfStream { .. } | Self::MissingTerminator { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `StreamError` type.
pub type Result<T> = std::result::Result<T, StreamError>;
