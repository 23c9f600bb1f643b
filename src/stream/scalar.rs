//! Fixed-width integer and floating-point reads.
//!
//! Every read checks the window first and only then advances the position,
//! so a failed read leaves the stream untouched. Residual bits from an
//! unaligned read are not affected.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::reader::KaitaiStream;
use super::types::error::Result;

impl KaitaiStream<'_> {
    fn read_scalar<T>(&mut self, width: usize, decode: impl FnOnce(&[u8]) -> T) -> Result<T> {
        let bytes = self.peek_slice(width)?;
        let value = decode(bytes);
        self.position += width;
        Ok(value)
    }

    // ------------------------------------------------------------------
    // Single byte
    // ------------------------------------------------------------------

    pub fn read_u1(&mut self) -> Result<u8> {
        self.read_scalar(1, |b| b[0])
    }

    pub fn read_s1(&mut self) -> Result<i8> {
        self.read_scalar(1, |b| b[0] as i8)
    }

    // ------------------------------------------------------------------
    // Big-endian
    // ------------------------------------------------------------------

    pub fn read_u2be(&mut self) -> Result<u16> {
        self.read_scalar(2, BigEndian::read_u16)
    }

    pub fn read_u4be(&mut self) -> Result<u32> {
        self.read_scalar(4, BigEndian::read_u32)
    }

    pub fn read_u8be(&mut self) -> Result<u64> {
        self.read_scalar(8, BigEndian::read_u64)
    }

    pub fn read_s2be(&mut self) -> Result<i16> {
        self.read_scalar(2, BigEndian::read_i16)
    }

    pub fn read_s4be(&mut self) -> Result<i32> {
        self.read_scalar(4, BigEndian::read_i32)
    }

    pub fn read_s8be(&mut self) -> Result<i64> {
        self.read_scalar(8, BigEndian::read_i64)
    }

    /// Reads an IEEE 754 half-precision float, widened to `f32`.
    pub fn read_f2be(&mut self) -> Result<f32> {
        self.read_u2be().map(f16_bits_to_f32)
    }

    pub fn read_f4be(&mut self) -> Result<f32> {
        self.read_scalar(4, BigEndian::read_f32)
    }

    pub fn read_f8be(&mut self) -> Result<f64> {
        self.read_scalar(8, BigEndian::read_f64)
    }

    // ------------------------------------------------------------------
    // Little-endian
    // ------------------------------------------------------------------

    pub fn read_u2le(&mut self) -> Result<u16> {
        self.read_scalar(2, LittleEndian::read_u16)
    }

    pub fn read_u4le(&mut self) -> Result<u32> {
        self.read_scalar(4, LittleEndian::read_u32)
    }

    pub fn read_u8le(&mut self) -> Result<u64> {
        self.read_scalar(8, LittleEndian::read_u64)
    }

    pub fn read_s2le(&mut self) -> Result<i16> {
        self.read_scalar(2, LittleEndian::read_i16)
    }

    pub fn read_s4le(&mut self) -> Result<i32> {
        self.read_scalar(4, LittleEndian::read_i32)
    }

    pub fn read_s8le(&mut self) -> Result<i64> {
        self.read_scalar(8, LittleEndian::read_i64)
    }

    /// Reads an IEEE 754 half-precision float, widened to `f32`.
    pub fn read_f2le(&mut self) -> Result<f32> {
        self.read_u2le().map(f16_bits_to_f32)
    }

    pub fn read_f4le(&mut self) -> Result<f32> {
        self.read_scalar(4, LittleEndian::read_f32)
    }

    pub fn read_f8le(&mut self) -> Result<f64> {
        self.read_scalar(8, LittleEndian::read_f64)
    }
}

/// Expands IEEE 754 binary16 bits to the equal binary32 value.
///
/// # Layout
/// ```text
/// binary16: s eeeee mmmmmmmmmm
/// binary32: s eeeeeeee mmmmmmmmmm0000000000000
/// ```
/// The exponent is rebiased from 15 to 127 and the mantissa shifted left by
/// 13. Zeros, subnormals, infinities and NaNs keep their meaning.
pub fn f16_bits_to_f32(half: u16) -> f32 {
    let sign = u32::from(half & 0x8000) << 16;
    let exponent = u32::from((half >> 10) & 0x1f);
    let mantissa = u32::from(half & 0x03ff);

    let bits = match exponent {
        0 if mantissa == 0 => sign,
        0 => {
            // Subnormal half: mantissa * 2^-24. Normalize around the top set bit.
            let top = 31 - mantissa.leading_zeros();
            let exponent32 = top + 127 - 24;
            let mantissa32 = (mantissa << (23 - top)) & 0x007f_ffff;
            sign | (exponent32 << 23) | mantissa32
        }
        0x1f => sign | 0x7f80_0000 | (mantissa << 13),
        _ => sign | ((exponent + 127 - 15) << 23) | (mantissa << 13),
    };

    f32::from_bits(bits)
}
