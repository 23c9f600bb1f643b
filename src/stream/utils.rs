//! Helpers called by generated parsers on already-read data.

use std::cmp::Ordering;

use super::types::error::{Result, StreamError};

/// Drops every trailing `pad` byte.
pub fn bytes_strip_right(data: &[u8], pad: u8) -> &[u8] {
    let len = data.iter().rposition(|&b| b != pad).map_or(0, |i| i + 1);
    &data[..len]
}

/// Cuts `data` at the first `term`, keeping the terminator if `include` is set.
///
/// Data without a terminator is returned whole.
pub fn bytes_terminate(data: &[u8], term: u8, include: bool) -> &[u8] {
    match data.iter().position(|&b| b == term) {
        Some(i) if include => &data[..i + 1],
        Some(i) => &data[..i],
        None => data,
    }
}

/// Lexicographic byte comparison; a proper prefix sorts first.
pub fn byte_array_compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Remainder of `a / b` that is never negative.
///
/// # Errors
/// Returns [`StreamError::InvalidArgument`] if `b <= 0`.
pub fn modulo(a: i64, b: i64) -> Result<i64> {
    if b <= 0 {
        return Err(StreamError::InvalidArgument(format!(
            "mod divisor must be positive, got {}",
            b
        )));
    }
    Ok(a.rem_euclid(b))
}

/// Smallest element, or `None` for an empty slice.
pub fn array_min<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|min, x| if x < min { x } else { min })
}

/// Largest element, or `None` for an empty slice.
pub fn array_max<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|max, x| if x > max { x } else { max })
}
