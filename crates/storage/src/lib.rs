// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Fixed-length binary record storage
//!
//! Each record type lives in its own unsorted file of equal-sized records,
//! addressed by linear scan. There is no index and no log: every mutation is
//! a single synced write (append, in-place overwrite, or filtered rewrite).
//!
//! ```text
//! Sailing / Reservation / Vessel / Vehicle
//!        │ FixedRecord::encode
//!        ▼
//!   RecordStore<R> ──append / update_at / delete_where──▶ disk (*.dat)
//!        ▲
//!        └──find_first / for_each ◀── FixedRecord::decode
//! ```

mod codec;
mod error;
mod records;
mod store;

pub use codec::{FieldReader, FieldWriter, FixedRecord};
pub use error::StorageError;
pub use records::{LICENSE_WIDTH, PHONE_WIDTH, SAILING_ID_WIDTH, VESSEL_NAME_WIDTH};
pub use store::{Located, RecordStore};
