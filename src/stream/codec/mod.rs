//! Codec layer: text decoding, decompression and byte transforms.
//!
//! # Submodules
//!
//! - [`text`][]: ASCII decoding and the [`TextDecoder`] provider trait
//! - [`compression`][]: the [`Inflater`] provider trait and the zlib implementation
//! - [`process`][]: XOR, rotation and zlib transforms
//!
//! Providers are bundled into a [`Providers`] value that is handed to a
//! stream when it is built.

pub mod compression;
pub mod process;
pub mod text;

use std::fmt;
use std::sync::Arc;

pub use compression::{Inflater, ZlibInflater};
pub use text::{EncodingRsDecoder, TextDecoder};

use crate::stream::types::error::{Result, StreamError};

/// The external collaborators a stream delegates to.
///
/// `Providers::default()` wires in the built-in `encoding_rs` decoder and
/// `flate2` inflater. [`Providers::empty`] has neither, so every delegated
/// call fails with [`StreamError::DependencyUnavailable`].
#[derive(Clone)]
pub struct Providers {
    pub text: Option<Arc<dyn TextDecoder>>,
    pub inflate: Option<Arc<dyn Inflater>>,
}

impl Providers {
    pub fn empty() -> Self {
        Self {
            text: None,
            inflate: None,
        }
    }

    pub fn builtin() -> Self {
        Self {
            text: Some(Arc::new(EncodingRsDecoder)),
            inflate: Some(Arc::new(ZlibInflater)),
        }
    }

    pub fn with_text_decoder(mut self, decoder: impl TextDecoder + 'static) -> Self {
        self.text = Some(Arc::new(decoder));
        self
    }

    pub fn with_inflater(mut self, inflater: impl Inflater + 'static) -> Self {
        self.inflate = Some(Arc::new(inflater));
        self
    }

    /// Decodes `bytes` as text.
    ///
    /// `None` and `"ascii"` are handled locally; any other label requires a
    /// text decoder.
    pub fn decode_text(&self, bytes: &[u8], encoding: Option<&str>) -> Result<String> {
        match encoding {
            Some(label) if !text::is_ascii_label(encoding) => {
                let decoder = self.text.as_deref().ok_or_else(|| {
                    StreamError::DependencyUnavailable(format!(
                        "no text decoder configured for encoding '{}'",
                        label
                    ))
                })?;
                decoder.decode(bytes, label)
            }
            _ => Ok(text::decode_ascii(bytes)),
        }
    }

    /// Inflates `data` with the configured inflater.
    pub fn process_zlib(&self, data: &[u8]) -> Result<Vec<u8>> {
        process::process_zlib(data, self.inflate.as_deref())
    }
}

impl Default for Providers {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Providers")
            .field("text", &self.text.is_some())
            .field("inflate", &self.inflate.is_some())
            .finish()
    }
}
