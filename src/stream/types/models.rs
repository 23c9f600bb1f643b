//! Core data structures for the stream reader.
//!
//! - [`Window`]: the backing storage adapter, a borrowed sub-range of a buffer
//! - [`BitAccumulator`]: leftover bits from unaligned reads

use super::error::{Result, StreamError};

/// A borrowed, bounds-validated view of `length` bytes starting at `offset`
/// inside a larger buffer.
///
/// The window does not track a read position. Several windows (and streams)
/// may alias the same buffer; slices handed out by a window live as long as
/// the buffer itself, not as long as the window.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    buffer: &'a [u8],
    offset: usize,
    length: usize,
}

impl<'a> Window<'a> {
    /// Creates a window over `buffer[offset..offset + length]`.
    ///
    /// A missing `length` extends the window to the end of the buffer.
    ///
    /// # Errors
    /// Returns [`StreamError::InvalidWindow`] if the range does not fit in the buffer.
    pub fn new(buffer: &'a [u8], offset: usize, length: Option<usize>) -> Result<Self> {
        let invalid = |length: usize| StreamError::InvalidWindow {
            offset,
            length,
            buffer_len: buffer.len(),
        };

        let length = match length {
            Some(length) => length,
            None => buffer.len().checked_sub(offset).ok_or_else(|| invalid(0))?,
        };
        let end = offset.checked_add(length).ok_or_else(|| invalid(length))?;
        if end > buffer.len() {
            return Err(invalid(length));
        }

        Ok(Self {
            buffer,
            offset,
            length,
        })
    }

    /// A window covering the whole buffer. Cannot fail.
    pub fn full(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: 0,
            length: buffer.len(),
        }
    }

    /// The complete backing buffer, including bytes outside the window.
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The bytes inside the window.
    pub fn bytes(&self) -> &'a [u8] {
        &self.buffer[self.offset..self.offset + self.length]
    }

    /// Byte at window-relative position `pos`, or `None` past the end.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.bytes().get(pos).copied()
    }

    /// Window-relative sub-slice, or `None` if it would leave the window.
    pub fn get(&self, start: usize, len: usize) -> Option<&'a [u8]> {
        let end = start.checked_add(len)?;
        self.bytes().get(start..end)
    }
}

/// Bits already fetched from storage by an unaligned read but not yet handed
/// to the caller.
///
/// For big-endian reads the pending bits are the low `count` bits of `value`
/// and are consumed from the top. For little-endian reads they are also the
/// low `count` bits, consumed from the bottom.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitAccumulator {
    pub value: u64,
    /// Always in `0..8`.
    pub count: u32,
}

impl BitAccumulator {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Byte order of a multi-byte scalar or a bit-packed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

impl Endian {
    /// The byte order of the machine running the code.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Endian::Big => write!(f, "be"),
            Endian::Little => write!(f, "le"),
        }
    }
}
