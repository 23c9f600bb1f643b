//! Turning byte blocks into text.
//!
//! ASCII (and the "no encoding given" case) is decoded here, one `char` per
//! byte. Every other label goes to a [`TextDecoder`] provider; the built-in
//! one is [`EncodingRsDecoder`].

use encoding_rs::Encoding;
use log::{debug, trace};

use crate::stream::types::error::{Result, StreamError};

/// Blocks are decoded in chunks of this many bytes and concatenated.
pub const ASCII_CHUNK_SIZE: usize = 0x8000;

/// A host text-decoding facility keyed by an encoding label.
pub trait TextDecoder: Send + Sync {
    /// Decodes `bytes` using the encoding called `encoding`.
    ///
    /// Unknown labels must fail with [`StreamError::UnsupportedEncoding`].
    fn decode(&self, bytes: &[u8], encoding: &str) -> Result<String>;
}

impl<F> TextDecoder for F
where
    F: Fn(&[u8], &str) -> Result<String> + Send + Sync,
{
    fn decode(&self, bytes: &[u8], encoding: &str) -> Result<String> {
        self(bytes, encoding)
    }
}

/// [`TextDecoder`] backed by `encoding_rs` and the WHATWG label registry.
///
/// Node-style aliases (`utf16le`, `ucs2`, ...) are accepted as well.
#[derive(Debug, Default, Clone, Copy)]
pub struct EncodingRsDecoder;

impl EncodingRsDecoder {
    /// Resolves a label to an `encoding_rs` encoding.
    pub fn resolve(label: &str) -> Result<&'static Encoding> {
        let normalized = normalize_label(label);
        let encoding = Encoding::for_label(normalized.as_bytes())
            .ok_or_else(|| StreamError::UnsupportedEncoding(label.to_string()))?;
        debug!("Resolved encoding label '{}' to {}", label, encoding.name());
        Ok(encoding)
    }
}

impl TextDecoder for EncodingRsDecoder {
    fn decode(&self, bytes: &[u8], encoding: &str) -> Result<String> {
        let encoding = Self::resolve(encoding)?;
        // Same BOM handling as a WHATWG TextDecoder: strip a matching BOM,
        // never switch encodings because of one.
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        if had_errors {
            trace!(
                "Malformed {} input replaced with U+FFFD ({} bytes)",
                encoding.name(),
                bytes.len()
            );
        }
        Ok(text.into_owned())
    }
}

fn normalize_label(label: &str) -> String {
    let lower = label.trim().to_ascii_lowercase();
    match lower.as_str() {
        "utf16le" | "ucs2" | "ucs-2" | "utf16" => "utf-16le".to_string(),
        "utf16be" => "utf-16be".to_string(),
        "cp932" | "sjis" => "shift_jis".to_string(),
        "cp936" => "gbk".to_string(),
        "cp949" => "euc-kr".to_string(),
        "cp950" | "big-5" => "big5".to_string(),
        _ => lower,
    }
}

/// Returns `true` when `encoding` is decoded locally rather than by a provider.
pub fn is_ascii_label(encoding: Option<&str>) -> bool {
    match encoding {
        None => true,
        Some(label) => label.eq_ignore_ascii_case("ascii"),
    }
}

/// Maps each byte to the `char` with the same code point.
///
/// Bytes above 0x7F are kept as U+0080..U+00FF rather than rejected.
pub fn decode_ascii(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.chunks(ASCII_CHUNK_SIZE) {
        text.extend(chunk.iter().map(|&b| char::from(b)));
    }
    text
}
