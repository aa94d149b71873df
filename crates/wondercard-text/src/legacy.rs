//! Fixed-width legacy text path.
//!
//! Older card text was written through a separate 256-glyph table into a
//! fixed 40-byte buffer, with no terminator handling. The table overlaps the
//! locale fonts but differs in many positions, so it must not be mixed with
//! [`crate::Locale`] tables.

use crate::tables::LEGACY;

/// Width of one legacy text line in bytes.
pub const LINE_SIZE: usize = 40;

/// Decode every byte through the legacy table.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| LEGACY[byte as usize]).collect()
}

/// Encode up to [`LINE_SIZE`] characters into a zero-filled line.
///
/// Each character takes the first matching position below `0xFF`. A
/// character with no match still uses its position, which stays zero.
pub fn encode(text: &str) -> [u8; LINE_SIZE] {
    let mut line = [0u8; LINE_SIZE];
    for (slot, chr) in line.iter_mut().zip(text.chars()) {
        if let Some(position) = LEGACY[..0xFF].iter().position(|&glyph| glyph == chr) {
            *slot = position as u8;
        }
    }
    line
}
