use log::{debug, trace};

use super::codec::Providers;
use super::types::error::{Result, StreamError};
use super::types::models::{BitAccumulator, Window};

/// A bounds-checked read cursor over a borrowed byte window.
///
/// Reading capabilities are split across modules, each adding its own
/// `impl` block:
///
/// - positioning (this module): `seek`, `pos`, `size`, `eof`
/// - typed scalars: `read_u4le`, `read_f8be`, ...
/// - byte blocks: `read_bytes`, `read_bytes_term`, ...
/// - bits: `read_bits_int_be`, `read_bits_int_le`
/// - strings: `read_str_eos`, `read_str_z`, ...
///
/// Slices returned by block reads borrow the backing buffer (`'a`), not the
/// stream, so they stay valid after the stream moves on or is dropped.
#[derive(Debug, Clone)]
pub struct KaitaiStream<'a> {
    window: Window<'a>,
    pub(crate) position: usize,
    pub(crate) bits: BitAccumulator,
    providers: Providers,
}

impl<'a> KaitaiStream<'a> {
    /// Creates a stream over the whole of `buffer` with the built-in providers.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::from_window(Window::full(buffer))
    }

    /// Creates a stream over `buffer[offset..offset + length]`.
    ///
    /// # Errors
    /// Returns [`StreamError::InvalidWindow`] if the range does not fit in `buffer`.
    pub fn with_window(buffer: &'a [u8], offset: usize, length: Option<usize>) -> Result<Self> {
        Ok(Self::from_window(Window::new(buffer, offset, length)?))
    }

    pub fn from_window(window: Window<'a>) -> Self {
        trace!(
            "New stream: offset={}, length={}, buffer={} bytes",
            window.offset(),
            window.len(),
            window.buffer().len()
        );
        Self {
            window,
            position: 0,
            bits: BitAccumulator::default(),
            providers: Providers::default(),
        }
    }

    /// Replaces the text decoder and inflater used by this stream.
    pub fn with_providers(mut self, providers: Providers) -> Self {
        self.providers = providers;
        self
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    pub fn window(&self) -> Window<'a> {
        self.window
    }

    // ------------------------------------------------------------------
    // Window changes
    // ------------------------------------------------------------------

    /// Points the stream at a new buffer, keeping offset and length.
    pub fn set_buffer(&mut self, buffer: &'a [u8]) -> Result<()> {
        let window = Window::new(buffer, self.window.offset(), Some(self.window.len()))?;
        self.replace_window(window);
        Ok(())
    }

    pub fn set_byte_offset(&mut self, offset: usize) -> Result<()> {
        let window = Window::new(self.window.buffer(), offset, Some(self.window.len()))?;
        self.replace_window(window);
        Ok(())
    }

    pub fn set_byte_length(&mut self, length: usize) -> Result<()> {
        let window = Window::new(self.window.buffer(), self.window.offset(), Some(length))?;
        self.replace_window(window);
        Ok(())
    }

    fn replace_window(&mut self, window: Window<'a>) {
        debug!(
            "Window changed: offset {} -> {}, length {} -> {}",
            self.window.offset(),
            window.offset(),
            self.window.len(),
            window.len()
        );
        self.window = window;
        self.position = self.position.min(window.len());
    }

    // ------------------------------------------------------------------
    // Positioning
    // ------------------------------------------------------------------

    /// Length of the logical window in bytes, independent of the position.
    pub fn size(&self) -> usize {
        self.window.len()
    }

    pub fn pos(&self) -> usize {
        self.position
    }

    /// Bytes between the position and the end of the window.
    pub fn remaining(&self) -> usize {
        self.size() - self.position
    }

    /// `true` once every byte has been read and no residual bits are pending.
    ///
    /// Residual bits left by an unaligned read keep this `false` even if the
    /// position is at the end; call [`align_to_byte`](Self::align_to_byte)
    /// to drop them.
    pub fn eof(&self) -> bool {
        self.position >= self.size() && self.bits.is_empty()
    }

    /// Moves to `target`, clamped into `[0, size() - 1]`.
    ///
    /// Negative targets land on 0; targets at or past the end land on the
    /// last byte of the window. An empty window always seeks to 0.
    pub fn seek(&mut self, target: i64) {
        let last = self.size().saturating_sub(1);
        self.position = usize::try_from(target).map_or(0, |t| t.min(last));
    }

    /// [`seek`](Self::seek) for computed, possibly non-finite targets.
    ///
    /// NaN resolves to 0, `+inf` to the last byte, `-inf` to 0. Fractional
    /// targets are truncated towards zero.
    pub fn seek_f64(&mut self, target: f64) {
        let last = self.size().saturating_sub(1);
        self.position = if target.is_nan() || target <= 0.0 {
            0
        } else if target >= last as f64 {
            last
        } else {
            target as usize
        };
    }

    /// Fails unless `n` more bytes can be read from the current position.
    ///
    /// # Errors
    /// Returns [`StreamError::EndOfStream`] carrying the requested and available counts.
    pub fn ensure_bytes_left(&self, n: usize) -> Result<()> {
        let available = self.remaining();
        if n > available {
            return Err(StreamError::EndOfStream {
                requested: n,
                available,
            });
        }
        Ok(())
    }

    /// Discards residual bits from unaligned reads. The position is unchanged.
    pub fn align_to_byte(&mut self) {
        self.bits.clear();
    }

    /// Window-relative slice `[position, position + n)` after a bounds check.
    pub(crate) fn peek_slice(&self, n: usize) -> Result<&'a [u8]> {
        self.ensure_bytes_left(n)?;
        self.window
            .get(self.position, n)
            .ok_or(StreamError::EndOfStream {
                requested: n,
                available: self.remaining(),
            })
    }

    /// Everything from the position to the end of the window.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.window.bytes()[self.position..]
    }

    // ------------------------------------------------------------------
    // Sub-streams and delegated processing
    // ------------------------------------------------------------------

    /// Reads `n` bytes and returns a new stream scoped to exactly those bytes.
    ///
    /// The sub-stream shares the backing buffer and providers; its position
    /// starts at 0 and its bit state is empty.
    pub fn substream(&mut self, n: usize) -> Result<KaitaiStream<'a>> {
        self.ensure_bytes_left(n)?;
        let window = Window::new(
            self.window.buffer(),
            self.window.offset() + self.position,
            Some(n),
        )?;
        self.position += n;
        Ok(KaitaiStream::from_window(window).with_providers(self.providers.clone()))
    }

    /// Inflates `data` with this stream's configured inflater.
    pub fn process_zlib(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.providers.process_zlib(data)
    }
}
