//! Locale-aware text encoding.
//!
//! Text slots hold one byte per glyph and end with a `0xFF` terminator when
//! shorter than the slot. Decoding is lenient and never fails; encoding stops
//! at the first character the font cannot draw.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tables::{DOMESTIC, JAPANESE};

/// Terminator byte written after encoded text.
pub const TERMINATOR: u8 = 0xFF;

/// Character standing in for bytes with no glyph.
pub const SENTINEL: char = '\u{FF}';

/// First byte value that is a control code rather than a glyph.
pub const FIRST_CONTROL: u8 = 0xF7;

/// Font locale of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Latin font used by English and European releases.
    Domestic,
    /// Japanese kana font.
    Japanese,
}

impl Locale {
    /// Get the glyph table for this locale.
    pub fn table(self) -> &'static [char] {
        match self {
            Locale::Domestic => &DOMESTIC,
            Locale::Japanese => &JAPANESE,
        }
    }

    /// Look up the byte for a glyph. The first table position wins.
    pub fn byte_for(self, chr: char) -> Option<u8> {
        let lookup = match self {
            Locale::Domestic => &*DOMESTIC_LOOKUP,
            Locale::Japanese => &*JAPANESE_LOOKUP,
        };
        lookup.get(&chr).copied()
    }

    /// Look up the glyph for a byte, or [`SENTINEL`] if there is none.
    pub fn glyph(self, byte: u8) -> char {
        self.table()
            .get(byte as usize)
            .copied()
            .unwrap_or(SENTINEL)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Domestic => write!(f, "domestic"),
            Locale::Japanese => write!(f, "japanese"),
        }
    }
}

static DOMESTIC_LOOKUP: LazyLock<HashMap<char, u8>> = LazyLock::new(|| build_lookup(&DOMESTIC));
static JAPANESE_LOOKUP: LazyLock<HashMap<char, u8>> = LazyLock::new(|| build_lookup(&JAPANESE));

fn build_lookup(table: &[char]) -> HashMap<char, u8> {
    let mut map = HashMap::with_capacity(table.len());
    for (byte, &chr) in table.iter().enumerate() {
        map.entry(chr).or_insert(byte as u8);
    }
    map
}

/// Decode encoded text into a string.
///
/// Reading stops at the first control byte (`>= 0xF7`) or at the first byte
/// without a glyph, whichever comes first.
pub fn decode(bytes: &[u8], locale: Locale) -> String {
    bytes
        .iter()
        .take_while(|&&byte| byte < FIRST_CONTROL)
        .map(|&byte| locale.glyph(byte))
        .take_while(|&chr| chr != SENTINEL)
        .collect()
}

/// Encode a string, appending a terminator.
///
/// A character the font cannot draw ends the text early; everything after
/// it is dropped. The result is at most one byte longer than the number of
/// characters in `text`.
pub fn encode(text: &str, locale: Locale) -> Vec<u8> {
    let mut encoded: Vec<u8> = text
        .chars()
        .map_while(|chr| match chr {
            SENTINEL => None,
            _ => locale.byte_for(chr),
        })
        .collect();
    encoded.push(TERMINATOR);
    encoded
}

/// Encode a string into at most `capacity` bytes.
///
/// Text that fills the whole capacity loses its terminator.
pub fn encode_into(text: &str, locale: Locale, capacity: usize) -> Vec<u8> {
    let mut encoded = encode(text, locale);
    encoded.truncate(capacity);
    encoded
}
