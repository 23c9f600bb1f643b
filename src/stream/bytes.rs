//! Zero-copy byte block reads.

use log::trace;

use super::reader::KaitaiStream;
use super::types::error::{Result, StreamError};

impl<'a> KaitaiStream<'a> {
    /// Returns the next `n` bytes without copying and advances past them.
    ///
    /// # Errors
    /// Returns [`StreamError::EndOfStream`] if fewer than `n` bytes remain;
    /// the position is left unchanged.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_slice(n)?;
        self.position += n;
        Ok(bytes)
    }

    /// Returns every byte up to the end of the window.
    pub fn read_bytes_full(&mut self) -> Result<&'a [u8]> {
        self.read_bytes(self.remaining())
    }

    /// Reads up to the first occurrence of `terminator`.
    ///
    /// With the terminator found `i` bytes ahead:
    /// - the result is `i` bytes long, or `i + 1` with `include`;
    /// - the position ends `i + 1` bytes ahead with `consume`, otherwise `i`
    ///   bytes ahead so the terminator is the next byte to be read.
    ///
    /// Without a terminator, `eos_error` decides between failing and
    /// returning everything that is left.
    ///
    /// # Errors
    /// Returns [`StreamError::MissingTerminator`] when the terminator is absent
    /// and `eos_error` is set. The position is left unchanged.
    pub fn read_bytes_term(
        &mut self,
        terminator: u8,
        include: bool,
        consume: bool,
        eos_error: bool,
    ) -> Result<&'a [u8]> {
        let rest = self.rest();
        match rest.iter().position(|&b| b == terminator) {
            Some(i) => {
                let len = if include { i + 1 } else { i };
                let bytes = &rest[..len];
                self.position += if consume { i + 1 } else { i };
                trace!(
                    "Terminator {:#04x} found after {} bytes (include={}, consume={})",
                    terminator, i, include, consume
                );
                Ok(bytes)
            }
            None if eos_error => Err(StreamError::MissingTerminator {
                terminator,
                available: rest.len(),
            }),
            None => {
                trace!(
                    "Terminator {:#04x} not found, returning remaining {} bytes",
                    terminator,
                    rest.len()
                );
                self.position += rest.len();
                Ok(rest)
            }
        }
    }

    /// Reads `expected.len()` bytes and checks that they equal `expected`.
    ///
    /// # Errors
    /// Returns [`StreamError::UnexpectedData`] on a mismatch (the bytes are
    /// still consumed), or [`StreamError::EndOfStream`] if too few bytes remain.
    pub fn ensure_fixed_contents(&mut self, expected: &[u8]) -> Result<&'a [u8]> {
        let actual = self.read_bytes(expected.len())?;
        if actual != expected {
            return Err(StreamError::UnexpectedData {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        Ok(actual)
    }
}
