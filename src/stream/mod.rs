//! Core stream module.
//!
//! # Module Organization
//!
//! - [`reader`]: the [`KaitaiStream`] cursor, construction and positioning
//! - `scalar`, `bytes`, `bits`, `strings`: read capabilities, each an `impl`
//!   block on [`KaitaiStream`]
//! - [`codec`]: text decoding, decompression and byte transforms
//! - [`types`]: window, bit accumulator and error types
//! - [`utils`]: helpers on already-read byte arrays and numbers
//!
//! # Architecture
//!
//! ```text
//! Window ──► KaitaiStream ──► scalar / bytes ──► bits
//!  (&[u8],     (position,         │
//!   offset,     residual bits)    └──► strings ──► codec::Providers
//!   length)
//!
//! codec::process: pure transforms, independent of any stream
//! ```

mod bits;
mod bytes;
pub mod codec;
pub mod reader;
mod scalar;
mod strings;
pub mod types;
pub mod utils;

pub use bits::MAX_BIT_WIDTH;
pub use reader::KaitaiStream;
pub use scalar::f16_bits_to_f32;
pub use types::error::{Result, StreamError};
