// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record store over a single file
//!
//! Records are appended in insertion order and located by linear scan.
//! Every scan seeks back to the start of the file first, so no operation
//! depends on where a previous one left the cursor.

use crate::codec::FixedRecord;
use crate::error::StorageError;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A record together with the byte offset it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct Located<R> {
    pub offset: u64,
    pub record: R,
}

/// Durable, unsorted storage for one fixed-length record type
pub struct RecordStore<R> {
    path: PathBuf,
    file: Option<File>,
    _record: PhantomData<R>,
}

impl<R: FixedRecord> RecordStore<R> {
    /// Open or create the store at the given path. Existing records are kept.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let len = file.metadata()?.len();
        let size = R::SIZE as u64;
        if len % size != 0 {
            warn!(
                path = %path.display(),
                trailing_bytes = len % size,
                "record store ends with a partial record; it will be ignored and overwritten"
            );
        }
        debug!(path = %path.display(), records = len / size, "opened record store");

        Ok(Self {
            path: path.to_path_buf(),
            file: Some(file),
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn file(&mut self) -> Result<&mut File, StorageError> {
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(StorageError::Closed(self.path.clone())),
        }
    }

    /// Number of complete records in the store
    pub fn len(&mut self) -> Result<u64, StorageError> {
        let len = self.file()?.metadata()?.len();
        Ok(len / R::SIZE as u64)
    }

    pub fn is_empty(&mut self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// Append a record at the end of the store, returning its offset
    ///
    /// The record is synced to disk before this returns. A partial record
    /// left by an interrupted append is overwritten.
    pub fn append(&mut self, record: &R) -> Result<u64, StorageError> {
        let mut buf = vec![0u8; R::SIZE];
        record.encode(&mut buf)?;

        let file = self.file()?;
        let end = file.metadata()?.len();
        let offset = end - end % R::SIZE as u64;

        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&buf)?;
        file.sync_all()?;

        Ok(offset)
    }

    /// Return the first record matching `predicate`, with its offset
    pub fn find_first(
        &mut self,
        mut predicate: impl FnMut(&R) -> bool,
    ) -> Result<Option<Located<R>>, StorageError> {
        let mut found = None;
        self.scan(|offset, record| {
            if predicate(&record) {
                found = Some(Located { offset, record });
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(found)
    }

    /// Overwrite the record at a previously located offset
    pub fn update_at(&mut self, offset: u64, record: &R) -> Result<(), StorageError> {
        let mut buf = vec![0u8; R::SIZE];
        record.encode(&mut buf)?;

        let file = self.file()?;
        let len = file.metadata()?.len();
        let size = R::SIZE as u64;
        if offset % size != 0 || offset + size > len {
            return Err(StorageError::Misaligned {
                offset,
                size: R::SIZE,
                len,
            });
        }

        file.seek(SeekFrom::Start(offset))?;
        file.write_all(&buf)?;
        file.sync_all()?;

        Ok(())
    }

    /// Remove every record matching `predicate`, returning how many were removed
    ///
    /// Surviving records keep their relative order. The file is only
    /// rewritten when something matched.
    pub fn delete_where(
        &mut self,
        mut predicate: impl FnMut(&R) -> bool,
    ) -> Result<usize, StorageError> {
        let mut kept = Vec::new();
        let mut removed = 0;
        self.scan(|_, record| {
            if predicate(&record) {
                removed += 1;
            } else {
                kept.push(record);
            }
            ControlFlow::Continue(())
        })?;

        if removed == 0 {
            return Ok(0);
        }

        // Encode everything before truncating so an encode failure loses nothing
        let mut bytes = vec![0u8; kept.len() * R::SIZE];
        for (record, slot) in kept.iter().zip(bytes.chunks_exact_mut(R::SIZE)) {
            record.encode(slot)?;
        }

        let file = self.file()?;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&bytes)?;
        file.sync_all()?;

        debug!(
            path = %self.path.display(),
            removed,
            kept = kept.len(),
            "rewrote record store"
        );
        Ok(removed)
    }

    /// Visit every record in storage order
    pub fn for_each(&mut self, mut visitor: impl FnMut(&R)) -> Result<(), StorageError> {
        self.scan(|_, record| {
            visitor(&record);
            ControlFlow::Continue(())
        })
    }

    /// Collect every record in storage order
    pub fn records(&mut self) -> Result<Vec<R>, StorageError> {
        let mut all = Vec::new();
        self.scan(|_, record| {
            all.push(record);
            ControlFlow::Continue(())
        })?;
        Ok(all)
    }

    /// Sync and release the file handle. Safe to call more than once.
    pub fn close(&mut self) -> Result<(), StorageError> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
            debug!(path = %self.path.display(), "closed record store");
        }
        Ok(())
    }

    fn scan(
        &mut self,
        mut visit: impl FnMut(u64, R) -> ControlFlow<()>,
    ) -> Result<(), StorageError> {
        let Self { path, file, .. } = self;
        let file = file
            .as_mut()
            .ok_or_else(|| StorageError::Closed(path.clone()))?;

        file.seek(SeekFrom::Start(0))?;
        let mut reader = BufReader::new(file);
        let mut buf = vec![0u8; R::SIZE];
        let mut offset = 0u64;

        loop {
            let n = read_full(&mut reader, &mut buf)?;
            if n == 0 {
                break;
            }
            if n < R::SIZE {
                debug!(
                    path = %path.display(),
                    offset,
                    bytes = n,
                    "ignoring partial record at end of store"
                );
                break;
            }
            let record = R::decode(&buf)?;
            if visit(offset, record).is_break() {
                break;
            }
            offset += R::SIZE as u64;
        }

        Ok(())
    }
}

/// Fill `buf` from `reader`, returning fewer bytes only at end of file
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
