//! Wondercard - Generation III distribution record toolkit.
//!
//! This crate provides a unified interface to the Wondercard crates for
//! reading and editing the card and news records that Generation III games
//! receive as gifts.
//!
//! # Crates
//!
//! - [`wondercard_common`] - Binary reading and the record checksum
//! - [`wondercard_text`] - Single-byte character set codec
//! - [`wondercard_record`] - Card (`.wc3`) and news (`.wn3`) records and script relocation
//!
//! # Example
//!
//! ```no_run
//! use wondercard::prelude::*;
//!
//! let card = Record::from_file("eon_ticket.wc3")?;
//! let report = card.verify();
//! println!("{} valid: {}", card.shape(), report.is_valid());
//!
//! let image = script::extract_relocatable(&card)?;
//! std::fs::write("eon_ticket.bin", image)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use wondercard_common as common;
pub use wondercard_record as record;
pub use wondercard_text as text;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use wondercard_common::crc;
    pub use wondercard_record::{
        script, ChecksumReport, Distribution, Record, RecordKind, RecordShape, ScriptHeader,
    };
    pub use wondercard_text::Locale;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
