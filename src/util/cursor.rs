//! Sequential byte cursor for fixed-layout binary formats
//!
//! `ByteReader` walks a borrowed buffer front to back. Every read is bounds
//! checked and advances the position; nothing ever seeks backwards.
//! `ByteWriter` appends to a growable buffer and can back-patch size fields
//! once their values are known.

use byteorder::{ByteOrder, LittleEndian};
use bytes::{BufMut, BytesMut};

use crate::error::{Error, Result};

/// Bounds-checked little-endian reader over a byte slice
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, pos: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Total buffer length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Take the next `n` bytes
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let have = self.remaining();
        if n > have {
            return Err(Error::OutOfBounds { need: n, have });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Advance past `n` bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Read `n` bytes as an ASCII tag
    pub fn read_tag(&mut self, n: usize) -> Result<String> {
        let bytes = self.take(n)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    /// Read a 4-byte chunk identifier
    pub fn read_fourcc(&mut self) -> Result<[u8; 4]> {
        let mut id = [0u8; 4];
        id.copy_from_slice(self.take(4)?);
        Ok(id)
    }

    /// Read a tag and fail with a format error unless it equals `expected`
    pub fn expect_tag(&mut self, expected: &[u8]) -> Result<()> {
        let offset = self.pos;
        let found = self.take(expected.len())?;
        if found != expected {
            return Err(Error::format(format!(
                "expected tag {:?} at offset {}, found {:?}",
                String::from_utf8_lossy(expected),
                offset,
                String::from_utf8_lossy(found)
            )));
        }
        Ok(())
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }
}

/// Growable little-endian writer
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: BytesMut,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_tag(&mut self, tag: &[u8]) {
        self.buf.put_slice(tag);
    }

    pub fn write_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    pub fn write_i16_le(&mut self, value: i16) {
        self.buf.put_i16_le(value);
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn write_i32_le(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Overwrite a previously written u32 at `offset`
    pub fn patch_u32_le(&mut self, offset: usize, value: u32) -> Result<()> {
        let have = self.buf.len();
        let end = offset
            .checked_add(4)
            .filter(|&end| end <= have)
            .ok_or(Error::OutOfBounds {
                need: offset.saturating_add(4),
                have,
            })?;
        LittleEndian::write_u32(&mut self.buf[offset..end], value);
        Ok(())
    }

    /// Finish writing and return the bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }
}
