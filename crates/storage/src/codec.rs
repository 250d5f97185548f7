// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field-level encoding for fixed-length records
//!
//! Strings are NUL-padded UTF-8 in a fixed-width slot. Numbers are
//! little-endian. Bools are a single byte, 0 or 1.

use crate::error::StorageError;

/// A record with a fixed on-disk size
pub trait FixedRecord: Sized {
    /// Encoded size in bytes. Every record of the type occupies exactly this many.
    const SIZE: usize;

    /// Encode into `buf`, which is exactly `SIZE` bytes
    fn encode(&self, buf: &mut [u8]) -> Result<(), StorageError>;

    /// Decode from `buf`, which is exactly `SIZE` bytes
    fn decode(buf: &[u8]) -> Result<Self, StorageError>;
}

/// Sequential writer over a record buffer
pub struct FieldWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> &mut [u8] {
        let slot = &mut self.buf[self.pos..self.pos + n];
        self.pos += n;
        slot
    }

    /// Write `value` into a `width`-byte slot, NUL-padded
    pub fn str(&mut self, field: &'static str, value: &str, width: usize) -> Result<(), StorageError> {
        let bytes = value.as_bytes();
        if bytes.len() > width {
            return Err(StorageError::FieldTooLong {
                field,
                len: bytes.len(),
                max: width,
            });
        }
        if bytes.contains(&0) {
            return Err(StorageError::InvalidRecord(format!(
                "field {} contains a NUL byte",
                field
            )));
        }
        let slot = self.take(width);
        slot.fill(0);
        slot[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    pub fn f32(&mut self, value: f32) {
        self.take(4).copy_from_slice(&value.to_le_bytes());
    }

    pub fn u32(&mut self, value: u32) {
        self.take(4).copy_from_slice(&value.to_le_bytes());
    }

    pub fn bool(&mut self, value: bool) {
        self.take(1)[0] = u8::from(value);
    }
}

/// Sequential reader over a record buffer
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    /// Read a NUL-padded string from a `width`-byte slot
    pub fn str(&mut self, field: &'static str, width: usize) -> Result<String, StorageError> {
        let slot = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        let end = slot.iter().position(|&b| b == 0).unwrap_or(width);
        String::from_utf8(slot[..end].to_vec()).map_err(|e| {
            StorageError::InvalidRecord(format!("field {} is not UTF-8: {}", field, e))
        })
    }

    pub fn f32(&mut self) -> f32 {
        f32::from_le_bytes(self.take::<4>())
    }

    pub fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take::<4>())
    }

    pub fn bool(&mut self, field: &'static str) -> Result<bool, StorageError> {
        match self.take::<1>()[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(StorageError::InvalidRecord(format!(
                "field {} has non-boolean byte {}",
                field, other
            ))),
        }
    }
}
