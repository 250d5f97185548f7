// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in record store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("field {field} is {len} bytes, limit is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("offset {offset} is not a record boundary (record size {size}, file length {len})")]
    Misaligned { offset: u64, size: usize, len: u64 },
    #[error("record store {} is closed", .0.display())]
    Closed(PathBuf),
}
