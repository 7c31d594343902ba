//! Packing of `0`/`1` code strings into bytes, most significant bit first.

use crate::error::{Error, Result};

#[derive(Default, Debug)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_count: usize,
}

impl BitWriter {
    pub fn with_bit_capacity(bits: usize) -> Self {
        BitWriter { bytes: Vec::with_capacity(bits.div_ceil(8)), bit_count: 0 }
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.bit_count % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << (7 - offset);
            }
        }
        self.bit_count += 1;
    }

    /// Appends a code written as `'0'`/`'1'` characters.
    pub fn push_code(&mut self, code: &str) {
        for c in code.bytes() {
            self.push_bit(c == b'1');
        }
    }

    /// Returns the packed bytes and the number of zero bits used to fill the
    /// last byte (always `0..=7`).
    pub fn finish(self) -> (Vec<u8>, u8) {
        let padding = (8 - self.bit_count % 8) % 8;
        (self.bytes, padding as u8)
    }
}

/// Iterates over packed bits, leaving out the trailing padding.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8], padding: u8) -> Result<Self> {
        if padding > 7 {
            return Err(Error::format(format!("padding length {padding} is not in 0..=7")));
        }
        if bytes.is_empty() && padding > 0 {
            return Err(Error::format("padding declared for an empty payload"));
        }
        Ok(BitReader { bytes, pos: 0, end: bytes.len() * 8 - padding as usize })
    }

    /// Number of data bits, excluding padding.
    pub fn bit_len(&self) -> usize {
        self.end
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.pos >= self.end {
            return None;
        }
        let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1 == 1;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.pos;
        (left, Some(left))
    }
}
