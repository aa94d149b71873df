//! Script relocation.
//!
//! A card's event script is written for the address it will run from in the
//! game's memory. Script editors expect a flat image with the script placed
//! at that address and the address itself in the first four bytes. The
//! address comes from the script's own first instruction, a 32-bit operand
//! that starts one byte into the region.

use wondercard_common::{check_range, BinaryReader};

use crate::shape::SCRIPT_SIZE;
use crate::{Error, Record, Result};

/// Mask that drops the bank byte from a script address.
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Read the flat load address of a card's script.
pub fn script_address(record: &Record) -> Result<u32> {
    let script = record.script()?;
    let address = BinaryReader::new_at(script, 1).read_u32()?;
    Ok(address & ADDRESS_MASK)
}

/// Build a relocated image of a card's script.
///
/// The image is `address + 996` bytes long with the script at `address`.
/// The address is only written to the header when it is above 3; smaller
/// addresses leave the first four bytes to the zero fill and the script.
pub fn extract_relocatable(record: &Record) -> Result<Vec<u8>> {
    let script = record.script()?;
    let address = script_address(record)?;
    let base = address as usize;

    let mut image = vec![0u8; base + SCRIPT_SIZE];
    if address > 3 {
        image[..4].copy_from_slice(&address.to_le_bytes());
    }
    image[base..].copy_from_slice(script);

    log::debug!("relocated script to {:#x} ({} byte image)", address, image.len());

    Ok(image)
}

/// Slice a script back out of a relocated image.
///
/// Reads the address from the first four bytes and returns the 996 bytes
/// found there. The caller writes them back with
/// [`Record::set_script`], or uses [`Record::import_relocatable`].
pub fn reinsert_relocatable(image: &[u8]) -> Result<Vec<u8>> {
    let address = BinaryReader::new(image).read_u32()? as usize;
    let range = check_range(image.len(), address, SCRIPT_SIZE).map_err(|_| Error::OutOfRange {
        offset: address,
        length: SCRIPT_SIZE,
        size: image.len(),
    })?;
    Ok(image[range].to_vec())
}
