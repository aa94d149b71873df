//! Common utilities for Wondercard.
//!
//! This crate provides foundational types and utilities used across all Wondercard crates:
//!
//! - [`BinaryReader`] - Zero-copy little-endian reading from byte slices
//! - [`crc`] - The table-driven checksum guarding distribution records
//! - Bounds-checked slice helpers shared by the record crates

mod error;
mod reader;

pub mod crc;

pub use error::{Error, Result};
pub use reader::{check_range, BinaryReader};

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Re-export memchr for fast byte searching
pub use memchr;
