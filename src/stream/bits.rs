//! Unaligned bit-level reads.
//!
//! Both packings share one refill model: when the accumulator holds fewer
//! bits than requested, exactly `ceil(missing / 8)` bytes are fetched through
//! [`read_bytes`](KaitaiStream::read_bytes), and whatever is left over stays
//! in the accumulator (always fewer than 8 bits).
//!
//! ```text
//! big-endian, 3 bits pending, n = 13:
//!
//!  |01101xxx|xxxxxxxx|xx......|
//!        \_____ 13 ____/\_____/
//!                        6 bits left
//!
//! little-endian, 3 bits pending, n = 13:
//!
//!  |xxx01101|xxxxxxxx|......xx|
//!   \_/               \____/ \/
//!  pending      6 bits left  last 2 of the 13
//! ```
//!
//! Byte-level reads do not touch the accumulator. Interleaving them with bit
//! reads without [`align_to_byte`](KaitaiStream::align_to_byte) keeps the old
//! residual bits around, and [`eof`](KaitaiStream::eof) keeps reporting
//! `false` while they are pending.

use log::trace;

use super::reader::KaitaiStream;
use super::types::error::{Result, StreamError};
use super::types::models::Endian;

/// Widest bit field a single call may read.
pub const MAX_BIT_WIDTH: u32 = 32;

#[inline]
fn low_mask(n: u32) -> u64 {
    (1u64 << n) - 1
}

impl KaitaiStream<'_> {
    /// Reads `n` bits packed most-significant-bit first.
    ///
    /// # Errors
    /// - [`StreamError::UnsupportedBitWidth`] if `n > 32`
    /// - [`StreamError::EndOfStream`] if the refill runs out of bytes
    ///
    /// Neither error changes the stream state.
    pub fn read_bits_int_be(&mut self, n: u32) -> Result<u64> {
        check_width(n)?;
        if n == 0 {
            return Ok(0);
        }

        let pending = self.bits.count;
        let bits_needed = n as i32 - pending as i32;
        let left_after = (-bits_needed & 7) as u32;

        let result = if bits_needed > 0 {
            let bytes = self.read_bytes(bytes_for(bits_needed))?;
            let new_bits = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
            trace!(
                "BE refill: {} bytes, {} bits pending before, {} after",
                bytes.len(),
                pending,
                left_after
            );
            let combined = (self.bits.value << (bytes.len() * 8)) | new_bits;
            self.bits.value = new_bits & low_mask(left_after);
            combined >> left_after
        } else {
            let value = self.bits.value >> left_after;
            self.bits.value &= low_mask(left_after);
            value
        };
        self.bits.count = left_after;

        Ok(result & low_mask(n))
    }

    /// Reads `n` bits packed least-significant-bit first.
    ///
    /// # Errors
    /// - [`StreamError::UnsupportedBitWidth`] if `n > 32`
    /// - [`StreamError::EndOfStream`] if the refill runs out of bytes
    ///
    /// Neither error changes the stream state.
    pub fn read_bits_int_le(&mut self, n: u32) -> Result<u64> {
        check_width(n)?;
        if n == 0 {
            return Ok(0);
        }

        let pending = self.bits.count;
        let bits_needed = n as i32 - pending as i32;
        let left_after = (-bits_needed & 7) as u32;

        let result = if bits_needed > 0 {
            let bytes = self.read_bytes(bytes_for(bits_needed))?;
            let new_bits = bytes
                .iter()
                .enumerate()
                .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << (i * 8)));
            trace!(
                "LE refill: {} bytes, {} bits pending before, {} after",
                bytes.len(),
                pending,
                left_after
            );
            let combined = (new_bits << pending) | self.bits.value;
            self.bits.value = new_bits >> (bits_needed as u32);
            combined
        } else {
            let value = self.bits.value;
            self.bits.value >>= n;
            value
        };
        self.bits.count = left_after;

        Ok(result & low_mask(n))
    }

    /// Reads `n` bits with the given packing.
    pub fn read_bits_int_endian(&mut self, n: u32, endian: Endian) -> Result<u64> {
        match endian {
            Endian::Big => self.read_bits_int_be(n),
            Endian::Little => self.read_bits_int_le(n),
        }
    }

    /// Older name of [`read_bits_int_be`](Self::read_bits_int_be).
    #[deprecated(note = "use `read_bits_int_be`")]
    pub fn read_bits_int(&mut self, n: u32) -> Result<u64> {
        self.read_bits_int_be(n)
    }
}

fn check_width(n: u32) -> Result<()> {
    if n > MAX_BIT_WIDTH {
        return Err(StreamError::UnsupportedBitWidth {
            requested: n,
            max: MAX_BIT_WIDTH,
        });
    }
    Ok(())
}

/// `ceil(bits / 8)` for a positive bit count.
fn bytes_for(bits: i32) -> usize {
    ((bits as usize) - 1) / 8 + 1
}
