//! Decompression providers.
//!
//! The stream never implements inflate itself. It calls an [`Inflater`]; the
//! built-in [`ZlibInflater`] wraps `flate2`.

use std::io::Read;

use flate2::read::ZlibDecoder;
use log::trace;

use crate::stream::types::error::{Result, StreamError};

/// An externally supplied zlib inflate function.
pub trait Inflater: Send + Sync {
    fn inflate(&self, data: &[u8]) -> Result<Vec<u8>>;
}

impl<F> Inflater for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    fn inflate(&self, data: &[u8]) -> Result<Vec<u8>> {
        self(data)
    }
}

/// Zlib (RFC 1950) inflate via `flate2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZlibInflater;

impl Inflater for ZlibInflater {
    fn inflate(&self, data: &[u8]) -> Result<Vec<u8>> {
        trace!("Inflating {} bytes with zlib", data.len());
        let mut output = Vec::with_capacity(data.len() * 2);
        let mut decoder = ZlibDecoder::new(data);
        decoder.read_to_end(&mut output).map_err(|e| {
            StreamError::DependencyUnavailable(format!("Zlib decompression failed: {}", e))
        })?;
        trace!("Inflated to {} bytes", output.len());
        Ok(output)
    }
}
