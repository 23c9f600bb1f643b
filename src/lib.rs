//! # kaitai-stream
//!
//! A bounds-checked, zero-copy reader for binary data held in memory, meant
//! to be driven by generated or hand-written format parsers.
//!
//! It covers:
//! - integers (8/16/32/64-bit, signed and unsigned) and floats (16/32/64-bit)
//!   in both byte orders
//! - byte blocks, including terminator scans, borrowed from the input
//! - unaligned bit fields of up to 32 bits, MSB-first or LSB-first
//! - text decoding through a pluggable decoder (`encoding_rs` by default)
//! - XOR, rotation and zlib transforms (`flate2` by default)
//!
//! ```
//! use kaitai_stream::KaitaiStream;
//!
//! let data = [0x12, 0x34, b'h', b'i', 0x00, 0b1010_0000];
//! let mut io = KaitaiStream::new(&data);
//! assert_eq!(io.read_u2be()?, 0x1234);
//! assert_eq!(io.read_str_z(Some("utf-8"), 0, false, true, true)?, "hi");
//! assert_eq!(io.read_bits_int_be(3)?, 0b101);
//! # Ok::<(), kaitai_stream::StreamError>(())
//! ```
pub mod stream;

// Re-export the main types for convenience
pub use stream::{
    KaitaiStream,
    Result,
    StreamError,
    codec::{
        EncodingRsDecoder,
        Inflater,
        Providers,
        TextDecoder,
        ZlibInflater,
        process::{process_rotate_left, process_xor_many, process_xor_one, process_zlib},
    },
    types::models::{BitAccumulator, Endian, Window},
    utils::{array_max, array_min, byte_array_compare, bytes_strip_right, bytes_terminate, modulo},
};
