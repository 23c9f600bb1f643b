//! Text reads: a byte block read followed by decoding.
//!
//! `encoding` is a label such as `"utf-8"`, `"ascii"` or `"shift_jis"`.
//! `None` behaves like `"ascii"`.

use super::reader::KaitaiStream;
use super::types::error::Result;

impl KaitaiStream<'_> {
    /// Decodes everything up to the end of the window.
    pub fn read_str_eos(&mut self, encoding: Option<&str>) -> Result<String> {
        let bytes = self.read_bytes_full()?;
        self.bytes_to_str(bytes, encoding)
    }

    /// Decodes exactly `n` bytes.
    pub fn read_str_byte_limit(&mut self, n: usize, encoding: Option<&str>) -> Result<String> {
        let bytes = self.read_bytes(n)?;
        self.bytes_to_str(bytes, encoding)
    }

    /// Decodes a terminated string; see [`read_bytes_term`](Self::read_bytes_term)
    /// for the meaning of the flags.
    pub fn read_str_z(
        &mut self,
        encoding: Option<&str>,
        terminator: u8,
        include: bool,
        consume: bool,
        eos_error: bool,
    ) -> Result<String> {
        let bytes = self.read_bytes_term(terminator, include, consume, eos_error)?;
        self.bytes_to_str(bytes, encoding)
    }

    /// Decodes an already extracted block with this stream's text decoder.
    pub fn bytes_to_str(&self, bytes: &[u8], encoding: Option<&str>) -> Result<String> {
        self.providers().decode_text(bytes, encoding)
    }
}
