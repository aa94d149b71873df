//! Distribution record parser and editor for Generation III games.
//!
//! The games receive gifts over the link cable as fixed-size records:
//!
//! - **Cards** (`.wc3`) carry a title, a few text lines, an icon and an event
//!   script that hands out the gift
//! - **News** (`.wn3`) carry eleven lines of bulletin text
//!
//! Both come in a domestic and a Japanese variant that differ only in size
//! and text slot widths. There is no magic number; the buffer length decides
//! the [`RecordShape`].
//!
//! # Layout
//!
//! All multi-byte fields are little-endian.
//!
//! | Shape          | Size | Text start | Header checksum covers |
//! |----------------|------|------------|------------------------|
//! | Card           | 1420 | 14         | `4..0x150`             |
//! | Card Japanese  | 1252 | 14         | `4..0xA8`              |
//! | News           | 448  | 8          | `4..448`               |
//! | News Japanese  | 228  | 8          | `4..228`               |
//!
//! Cards end with a 1000-byte script block (4-byte [`ScriptHeader`] plus a
//! 996-byte script) guarded by a second checksum stored just before it.
//!
//! # Example
//!
//! ```no_run
//! use wondercard_record::{Distribution, Record};
//!
//! let mut card = Record::from_file("aurora_ticket.wc3")?;
//! println!("{}: {}", card.shape(), card.text(0)?);
//!
//! card.set_text(0, "AURORA TICKET")?;
//! card.set_color_distribution(2, Distribution::Allowed);
//! card.fix_checksums();
//! card.write_to_file("aurora_ticket_edit.wc3")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod record;
pub mod script;
pub mod shape;

pub use error::{Error, Result};
pub use header::ScriptHeader;
pub use record::{color_group, ChecksumReport, ChecksumStatus, Distribution, Record, COLOR_GROUPS};
pub use shape::{RecordKind, RecordShape, ShapeLayout, TextSlot, SCRIPT_SIZE};
