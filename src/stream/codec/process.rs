//! Byte transforms applied to raw field data before it is parsed.
//!
//! All functions here are pure: they take a slice and return a new buffer.

use log::trace;

use super::compression::Inflater;
use crate::stream::types::error::{Result, StreamError};

/// XORs every byte of `data` with `key`.
pub fn process_xor_one(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|&b| b ^ key).collect()
}

/// XORs `data` with `key` repeated cyclically.
///
/// # Errors
/// Returns [`StreamError::InvalidArgument`] if `key` is empty.
pub fn process_xor_many(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(StreamError::InvalidArgument(
            "XOR key must not be empty".to_string(),
        ));
    }
    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(&b, &k)| b ^ k)
        .collect())
}

/// Rotates every byte of `data` left by `amount` bits.
///
/// Only single-byte groups are implemented.
///
/// # Errors
/// Returns [`StreamError::UnsupportedConfiguration`] for any `group_size` other than 1.
pub fn process_rotate_left(data: &[u8], amount: u32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        return Err(StreamError::UnsupportedConfiguration(format!(
            "unable to rotate group of {} bytes yet",
            group_size
        )));
    }
    trace!("Rotating {} bytes left by {} bits", data.len(), amount % 8);
    Ok(data.iter().map(|b| b.rotate_left(amount % 8)).collect())
}

/// Inflates zlib-compressed `data` with the given provider.
///
/// # Errors
/// Returns [`StreamError::DependencyUnavailable`] when no inflater is
/// configured, or whatever error the inflater itself reports.
pub fn process_zlib(data: &[u8], inflater: Option<&dyn Inflater>) -> Result<Vec<u8>> {
    let inflater = inflater.ok_or_else(|| {
        StreamError::DependencyUnavailable("no zlib inflater configured".to_string())
    })?;
    inflater.inflate(data)
}
