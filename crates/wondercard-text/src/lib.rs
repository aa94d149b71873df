//! Generation III character set codec.
//!
//! Distribution records store text as one byte per glyph. The glyph a byte
//! stands for depends on the font locale of the game that reads it:
//!
//! - [`Locale::Domestic`] - Latin font used outside Japan
//! - [`Locale::Japanese`] - kana font with full-width Latin letters
//!
//! # Example
//!
//! ```
//! use wondercard_text::{decode, encode, Locale};
//!
//! let bytes = encode("MEW", Locale::Domestic);
//! assert_eq!(bytes, [0xC7, 0xBF, 0xD1, 0xFF]);
//! assert_eq!(decode(&bytes, Locale::Domestic), "MEW");
//! ```
//!
//! The [`legacy`] module keeps the older fixed-width text path with its own
//! table.

mod codec;
pub mod legacy;
pub mod tables;

pub use codec::{decode, encode, encode_into, Locale, FIRST_CONTROL, SENTINEL, TERMINATOR};
