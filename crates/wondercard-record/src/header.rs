//! Script header of a card.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// The four bytes in front of a card's event script.
///
/// They say which map and NPC deliver the gift. The script checksum covers
/// them together with the script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct ScriptHeader {
    /// Script id.
    pub id: u8,
    /// Map bank of the delivering NPC.
    pub map_bank: u8,
    /// Map number within the bank.
    pub map_number: u8,
    /// NPC id on the map.
    pub npc: u8,
}
