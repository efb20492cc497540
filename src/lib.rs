//! A fixed-length multiple binary flag written in pure Rust.
//! `no_std` (with `alloc`), no `unsafe`.
//!
//! [`MultipleBinaryFlag`] holds between 2 and 17,179,868,704 independent
//! booleans and picks its backing storage from the requested length:
//!
//! | length              | storage                  |
//! |---------------------|--------------------------|
//! | `2..=32`            | a single `u32`           |
//! | `33..=64`           | a single `u64`           |
//! | `65..=MAX_LENGTH`   | an array of `u32` words  |
//!
//! Every storage behaves the same through the public API.
//!
//! # Examples
//! ```
//! use binary_flag::{MultipleBinaryFlag, StorageKind};
//!
//! let mut flag = MultipleBinaryFlag::new(100, false).unwrap();
//! assert_eq!(flag.storage_kind(), StorageKind::WordArray);
//! assert_eq!(flag.get_flag(), Some(false));
//! for position in 0..100 {
//!     flag.set_flag(position).unwrap();
//! }
//! assert_eq!(flag.get_flag(), Some(true));
//!
//! flag.dispose();
//! assert_eq!(flag.get_flag(), None);
//! ```
//!
//! # Features
//!
//! - Point operations: `set_flag`, `reset_flag`, `is_set`
//! - Aggregate query: `get_flag` (all set / any clear / unknown)
//! - `Display` as a `'T'`/`'F'` string, position 0 first
//! - Explicit, idempotent disposal with well-defined reads and writes afterwards
//!
//! The flag is a plain single-owner value: it does no locking, and mutation
//! goes through `&mut self`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod error;
mod flag;
mod storage;
mod word;
mod word_array;

pub use error::{FlagError, Result};
pub use flag::{MAX_LENGTH, MIN_LENGTH, MultipleBinaryFlag, UNKNOWN};
pub use storage::StorageKind;
