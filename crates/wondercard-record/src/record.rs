//! Distribution record model.

use std::fs;
use std::ops::Range;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use wondercard_common::{check_range, crc, memchr, BinaryReader, IntoBytes};
use wondercard_text::{legacy, Locale};

use crate::header::ScriptHeader;
use crate::shape::{
    RecordKind, RecordShape, ScriptLayout, ShapeLayout, TextSlot, CHECKSUM_OFFSET, SCRIPT_SIZE,
};
use crate::{script, Error, Result};

/// Card flag byte: distribution bits over the color index.
const CARD_FLAGS_OFFSET: usize = 0x0C;
const CARD_ALLOWED_BIT: u8 = 0x80;
const CARD_RESTRICTED_BIT: u8 = 0x40;

const NEWS_DISTRIBUTION_OFFSET: usize = 0x06;
const NEWS_COLOR_OFFSET: usize = 0x07;

/// Number of color groups a card can be shown in.
pub const COLOR_GROUPS: u8 = 8;

/// Whether a record may be passed on to other players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Distribution {
    /// Cannot be shared.
    #[default]
    None,
    /// Can be shared.
    Allowed,
    /// Can be shared with a restriction.
    Restricted,
}

impl Distribution {
    /// Get the numeric level (0, 1 or 2).
    pub const fn level(&self) -> u8 {
        match self {
            Distribution::None => 0,
            Distribution::Allowed => 1,
            Distribution::Restricted => 2,
        }
    }
}

/// Map a raw card color to its display group.
///
/// Each group spans four consecutive raw values; anything from `0x20` up is
/// not a valid color and lands in group 0.
pub const fn color_group(raw: u8) -> u8 {
    match raw {
        0x00..=0x1F => raw / 4,
        _ => 0,
    }
}

/// Stored and recomputed value of one checksum field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChecksumStatus {
    /// Value found in the buffer.
    pub stored: u16,
    /// Value computed over the covered region.
    pub computed: u16,
}

impl ChecksumStatus {
    /// Check if the stored value matches.
    pub fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

/// Checksum state of a whole record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChecksumReport {
    /// Header checksum.
    pub header: ChecksumStatus,
    /// Script checksum (cards only).
    pub script: Option<ChecksumStatus>,
}

impl ChecksumReport {
    /// Check if every checksum matches.
    pub fn is_valid(&self) -> bool {
        self.header.is_valid() && self.script.map_or(true, |s| s.is_valid())
    }
}

/// A card or news distribution record.
///
/// Holds the editable buffer and an untouched copy of the bytes it was
/// created from. Checksums are never updated implicitly; call
/// [`fix_checksums`](Self::fix_checksums) after editing.
#[derive(Debug, Clone)]
pub struct Record {
    shape: RecordShape,
    data: Vec<u8>,
    original: Box<[u8]>,
    exportable: bool,
    edited: bool,
}

impl Record {
    /// Parse a record from raw bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let shape =
            RecordShape::detect(bytes.len()).ok_or(Error::UnrecognizedLength(bytes.len()))?;

        let record = Self {
            shape,
            data: bytes.to_vec(),
            original: bytes.into(),
            exportable: bytes.iter().any(|&b| b != 0),
            edited: false,
        };

        log::debug!("detected {} record ({} bytes)", shape, bytes.len());

        if record.exportable {
            let report = record.verify();
            if !report.header.is_valid() {
                log::warn!(
                    "header checksum mismatch: stored {:#06x}, computed {:#06x}",
                    report.header.stored,
                    report.header.computed
                );
            }
            if let Some(status) = report.script.filter(|s| !s.is_valid()) {
                log::warn!(
                    "script checksum mismatch: stored {:#06x}, computed {:#06x}",
                    status.stored,
                    status.computed
                );
            }
        }

        Ok(record)
    }

    /// Create an all-zero record of the given shape.
    pub fn empty(shape: RecordShape) -> Self {
        let data = vec![0u8; shape.size()];
        Self {
            shape,
            original: data.clone().into_boxed_slice(),
            data,
            exportable: false,
            edited: false,
        }
    }

    /// Read a record from disk.
    ///
    /// A `.wc3` or `.wn3` extension must agree with the detected kind; other
    /// extensions are not checked.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let record = Self::parse(&fs::read(path)?)?;

        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            let expected = record.shape.kind();
            if RecordKind::from_extension(extension).is_some_and(|kind| kind != expected) {
                return Err(Error::InvalidExtension {
                    expected: expected.extension().to_string(),
                    actual: extension.to_string(),
                });
            }
        }

        Ok(record)
    }

    /// Write the current buffer to disk.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, &self.data)?;
        Ok(())
    }

    /// Get the detected shape.
    pub fn shape(&self) -> RecordShape {
        self.shape
    }

    /// Get the byte layout of the detected shape.
    pub fn layout(&self) -> &'static ShapeLayout {
        self.shape.layout()
    }

    /// Get the font locale.
    pub fn locale(&self) -> Locale {
        self.shape.locale()
    }

    /// Get the current buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the bytes the record was created from.
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// Check if the source buffer held anything but zeros.
    pub fn is_exportable(&self) -> bool {
        self.exportable
    }

    /// Check if a setter has run since creation.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Check if the buffer differs from the original bytes.
    pub fn is_modified(&self) -> bool {
        *self.data != *self.original
    }

    /// Iterate over offsets whose byte differs from the original.
    pub fn changed_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.data
            .iter()
            .zip(self.original.iter())
            .enumerate()
            .filter(|(_, (current, original))| current != original)
            .map(|(offset, _)| offset)
    }

    fn range(&self, offset: usize, length: usize) -> Result<Range<usize>> {
        check_range(self.data.len(), offset, length).map_err(|_| Error::OutOfRange {
            offset,
            length,
            size: self.data.len(),
        })
    }

    /// Read raw bytes.
    pub fn bytes(&self, offset: usize, length: usize) -> Result<&[u8]> {
        let range = self.range(offset, length)?;
        Ok(&self.data[range])
    }

    /// Overwrite raw bytes at `offset`.
    pub fn set_bytes(&mut self, bytes: &[u8], offset: usize) -> Result<()> {
        let range = self.range(offset, bytes.len())?;
        self.data[range].copy_from_slice(bytes);
        self.edited = true;
        Ok(())
    }

    fn write_u16(&mut self, offset: usize, value: u16) {
        LittleEndian::write_u16(&mut self.data[offset..offset + 2], value);
        self.edited = true;
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::Unsupported {
            operation,
            shape: self.shape,
        }
    }

    // Flags and color

    /// Get the distribution permission.
    ///
    /// News only knows "allowed" (`1`); every other value, including `2`,
    /// reads as [`Distribution::None`].
    pub fn distribution(&self) -> Distribution {
        match self.shape.kind() {
            RecordKind::News => match self.data[NEWS_DISTRIBUTION_OFFSET] {
                1 => Distribution::Allowed,
                _ => Distribution::None,
            },
            RecordKind::Card => {
                let flags = self.data[CARD_FLAGS_OFFSET];
                if flags & CARD_ALLOWED_BIT != 0 {
                    Distribution::Allowed
                } else if flags & CARD_RESTRICTED_BIT != 0 {
                    Distribution::Restricted
                } else {
                    Distribution::None
                }
            }
        }
    }

    /// Get the raw color value.
    ///
    /// For cards this is the flag byte without the "allowed" bit.
    pub fn color(&self) -> u8 {
        match self.shape.kind() {
            RecordKind::News => self.data[NEWS_COLOR_OFFSET],
            RecordKind::Card => self.data[CARD_FLAGS_OFFSET] & !CARD_ALLOWED_BIT,
        }
    }

    /// Get the display group (0..8) of the color.
    pub fn color_group(&self) -> u8 {
        color_group(self.color() & 0x1F)
    }

    /// Set color and distribution.
    ///
    /// For cards `color` is a display group (0..8; anything else becomes 0).
    /// For news it is stored verbatim.
    pub fn set_color_distribution(&mut self, color: u8, distribution: Distribution) {
        match self.shape.kind() {
            RecordKind::News => {
                self.data[NEWS_DISTRIBUTION_OFFSET] = distribution.level();
                self.data[NEWS_COLOR_OFFSET] = color;
            }
            RecordKind::Card => {
                let base = if color < COLOR_GROUPS { color * 4 } else { 0 };
                self.data[CARD_FLAGS_OFFSET] = match distribution {
                    Distribution::None => base,
                    Distribution::Allowed => base | CARD_ALLOWED_BIT,
                    Distribution::Restricted => base | CARD_RESTRICTED_BIT,
                };
            }
        }
        self.edited = true;
    }

    /// Get the card icon id.
    pub fn icon(&self) -> Result<u16> {
        let offset = self.layout().icon_offset.ok_or_else(|| self.unsupported("icon"))?;
        Ok(BinaryReader::new_at(&self.data, offset).read_u16()?)
    }

    /// Set the card icon id.
    pub fn set_icon(&mut self, icon: u16) -> Result<()> {
        let offset = self.layout().icon_offset.ok_or_else(|| self.unsupported("icon"))?;
        self.write_u16(offset, icon);
        Ok(())
    }

    // Text

    /// Get the number of text slots.
    pub fn slot_count(&self) -> usize {
        self.layout().slot_count()
    }

    /// Get a text slot.
    pub fn slot(&self, index: usize) -> Result<TextSlot> {
        self.layout().slot(index).ok_or(Error::SlotOutOfRange {
            index,
            count: self.slot_count(),
        })
    }

    fn slot_text(&self, slot: TextSlot) -> String {
        let bytes = &self.data[slot.range()];
        // trailing zero bytes are padding; a written space is followed by 0xFF
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |last| last + 1);
        wondercard_text::decode(&bytes[..end], self.locale())
    }

    /// Decode the text of a slot, without trailing zero padding.
    pub fn text(&self, index: usize) -> Result<String> {
        let slot = self.slot(index)?;
        Ok(self.slot_text(slot))
    }

    /// Decode every text slot in order.
    pub fn texts(&self) -> impl Iterator<Item = String> + '_ {
        self.layout().slots().map(|slot| self.slot_text(slot))
    }

    /// Encode text into a slot.
    ///
    /// The encoded bytes are clamped to the slot; bytes after the terminator
    /// keep their old value.
    pub fn set_text(&mut self, index: usize, text: &str) -> Result<()> {
        let slot = self.slot(index)?;
        let encoded = wondercard_text::encode_into(text, self.locale(), slot.length);
        self.set_bytes(&encoded, slot.offset)
    }

    /// Zero the whole text region. Checksum fields are left alone.
    pub fn clear_text(&mut self) {
        let range = self.layout().text_range();
        self.data[range].fill(0);
        self.edited = true;
    }

    /// Get the number of 40-byte legacy lines that fit in the text region.
    pub fn legacy_line_count(&self) -> usize {
        self.layout().text_len / legacy::LINE_SIZE
    }

    fn legacy_offset(&self, index: usize) -> Result<usize> {
        let count = self.legacy_line_count();
        if index >= count {
            return Err(Error::SlotOutOfRange { index, count });
        }
        Ok(self.layout().text_start + index * legacy::LINE_SIZE)
    }

    /// Decode a 40-byte line through the legacy table.
    pub fn legacy_text(&self, index: usize) -> Result<String> {
        let offset = self.legacy_offset(index)?;
        Ok(legacy::decode(self.bytes(offset, legacy::LINE_SIZE)?))
    }

    /// Encode a 40-byte line through the legacy table.
    pub fn set_legacy_text(&mut self, index: usize, text: &str) -> Result<()> {
        let offset = self.legacy_offset(index)?;
        self.set_bytes(&legacy::encode(text), offset)
    }

    // Checksums

    /// Compute the header checksum.
    pub fn header_checksum(&self) -> u16 {
        crc::checksum(&self.data[self.layout().checksum_range()])
    }

    /// Get the stored header checksum.
    pub fn stored_header_checksum(&self) -> u16 {
        LittleEndian::read_u16(&self.data[CHECKSUM_OFFSET..])
    }

    /// Recompute and store the header checksum.
    pub fn fix_header_checksum(&mut self) {
        let checksum = self.header_checksum();
        self.write_u16(CHECKSUM_OFFSET, checksum);
    }

    fn script_layout(&self, operation: &'static str) -> Result<ScriptLayout> {
        self.layout().script.ok_or_else(|| self.unsupported(operation))
    }

    /// Compute the script checksum.
    pub fn script_checksum(&self) -> Result<u16> {
        let script = self.script_layout("script checksum")?;
        Ok(crc::checksum(&self.data[script.header_offset..]))
    }

    /// Get the stored script checksum.
    pub fn stored_script_checksum(&self) -> Result<u16> {
        let script = self.script_layout("script checksum")?;
        Ok(LittleEndian::read_u16(&self.data[script.checksum_offset..]))
    }

    /// Recompute and store the script checksum.
    pub fn fix_script_checksum(&mut self) -> Result<()> {
        let script = self.script_layout("script checksum")?;
        let checksum = self.script_checksum()?;
        self.write_u16(script.checksum_offset, checksum);
        Ok(())
    }

    /// Recompute every checksum the shape carries.
    pub fn fix_checksums(&mut self) {
        if let Some(script) = self.layout().script {
            let checksum = crc::checksum(&self.data[script.header_offset..]);
            self.write_u16(script.checksum_offset, checksum);
        }
        self.fix_header_checksum();
    }

    /// Compare stored and computed checksums.
    pub fn verify(&self) -> ChecksumReport {
        let script = self.layout().script.map(|script| ChecksumStatus {
            stored: LittleEndian::read_u16(&self.data[script.checksum_offset..]),
            computed: crc::checksum(&self.data[script.header_offset..]),
        });

        ChecksumReport {
            header: ChecksumStatus {
                stored: self.stored_header_checksum(),
                computed: self.header_checksum(),
            },
            script,
        }
    }

    // Script

    /// Get the script header.
    pub fn script_header(&self) -> Result<ScriptHeader> {
        let script = self.script_layout("script header")?;
        Ok(BinaryReader::new_at(&self.data, script.header_offset).read_struct()?)
    }

    /// Set the script header.
    pub fn set_script_header(&mut self, header: ScriptHeader) -> Result<()> {
        let script = self.script_layout("script header")?;
        self.set_bytes(header.as_bytes(), script.header_offset)
    }

    /// Get the 996-byte script region.
    pub fn script(&self) -> Result<&[u8]> {
        let script = self.script_layout("script")?;
        Ok(&self.data[script.offset..])
    }

    /// Replace the script, zeroing whatever the new one does not cover.
    pub fn set_script(&mut self, bytes: &[u8]) -> Result<()> {
        let script = self.script_layout("script")?;
        if bytes.len() > SCRIPT_SIZE {
            return Err(Error::ScriptTooLarge(bytes.len()));
        }
        self.data[script.offset..].fill(0);
        self.set_bytes(bytes, script.offset)
    }

    /// Replace the script from a relocated image.
    ///
    /// See [`script::reinsert_relocatable`].
    pub fn import_relocatable(&mut self, image: &[u8]) -> Result<()> {
        let bytes = script::reinsert_relocatable(image)?;
        self.set_script(&bytes)
    }

    /// Zero every byte after the last `0xFF` in the script region.
    ///
    /// A region without any `0xFF` is zeroed entirely. Returns the number of
    /// bytes cleared.
    pub fn clean_trailing_trash(&mut self) -> Result<usize> {
        let script = self.script_layout("trash cleaning")?;
        let region = &mut self.data[script.offset..];
        let keep = memchr::memrchr(0xFF, region).map_or(0, |end| end + 1);
        let cleared = region.len() - keep;
        region[keep..].fill(0);
        if cleared > 0 {
            self.edited = true;
        }
        Ok(cleared)
    }
}

/// Mutators that overwrite magic values to change which distribution channel
/// accepts a record. They exist to reproduce files made by older tools.
#[cfg(feature = "diagnostics")]
impl Record {
    /// Magic written at offset 4 by [`fake_card_magic`](Self::fake_card_magic).
    pub const FAKE_CARD_MAGIC: u32 = 0xB9BE_B4BA;

    /// Script association that routes a card to the delivery NPC.
    pub const FAKE_SCRIPT_MAGIC: u32 = 0xFFFF_FF33;

    /// Overwrite the four bytes after the header checksum.
    pub fn fake_card_magic(&mut self) -> Result<()> {
        self.set_bytes(&Self::FAKE_CARD_MAGIC.to_le_bytes(), crate::shape::CHECKSUM_START)
    }

    /// Overwrite the script header with the delivery NPC association.
    pub fn fake_script_magic(&mut self) -> Result<()> {
        let script = self.script_layout("script magic")?;
        self.set_bytes(&Self::FAKE_SCRIPT_MAGIC.to_le_bytes(), script.header_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{CARD_SIZE, NEWS_SIZE};

    fn card() -> Record {
        Record::empty(RecordShape::Card)
    }

    #[test]
    fn test_parse_rejects_unknown_length() {
        let err = Record::parse(&[0u8; 100]).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedLength(100)));
    }

    #[test]
    fn test_parse_detects_shape() {
        for shape in RecordShape::ALL {
            let record = Record::parse(&vec![0u8; shape.size()]).unwrap();
            assert_eq!(record.shape(), shape);
            assert!(!record.is_exportable());
            assert!(!record.is_edited());
        }
    }

    #[test]
    fn test_exportable() {
        let mut data = vec![0u8; NEWS_SIZE];
        data[100] = 1;
        assert!(Record::parse(&data).unwrap().is_exportable());
    }

    #[test]
    fn test_card_flags_scenario() {
        let mut data = vec![0u8; CARD_SIZE];
        data[12] = 0x84;
        let mut record = Record::parse(&data).unwrap();

        assert_eq!(record.distribution(), Distribution::Allowed);
        assert_eq!(record.distribution().level(), 1);
        assert_eq!(record.color(), 0x04);
        assert_eq!(record.color_group(), 1);

        record.set_color_distribution(3, Distribution::None);
        assert_eq!(record.data()[12], 0x0C);
        assert!(record.is_edited());
    }

    #[test]
    fn test_card_restricted() {
        let mut record = card();
        record.set_color_distribution(7, Distribution::Restricted);
        assert_eq!(record.data()[12], 0x5C);
        assert_eq!(record.distribution(), Distribution::Restricted);
        // the restricted bit survives in the raw color but not in the group
        assert_eq!(record.color(), 0x5C);
        assert_eq!(record.color_group(), 7);

        record.set_color_distribution(9, Distribution::Allowed);
        assert_eq!(record.data()[12], 0x80);
    }

    #[test]
    fn test_color_group_buckets() {
        assert_eq!(color_group(0x00), 0);
        assert_eq!(color_group(0x03), 0);
        assert_eq!(color_group(0x04), 1);
        assert_eq!(color_group(0x1F), 7);
        assert_eq!(color_group(0x20), 0);
        assert_eq!(color_group(0xFF), 0);
    }

    #[test]
    fn test_news_flags() {
        let mut record = Record::empty(RecordShape::News);
        record.set_color_distribution(0x2A, Distribution::Allowed);
        assert_eq!(&record.data()[6..8], &[0x01, 0x2A]);
        assert_eq!(record.distribution(), Distribution::Allowed);
        assert_eq!(record.color(), 0x2A);

        // value 2 is written but reads back as "none"
        record.set_color_distribution(0x2A, Distribution::Restricted);
        assert_eq!(record.data()[6], 0x02);
        assert_eq!(record.distribution(), Distribution::None);
    }

    #[test]
    fn test_icon() {
        let mut record = card();
        record.set_icon(0x0197).unwrap();
        assert_eq!(&record.data()[346..348], &[0x97, 0x01]);
        assert_eq!(record.icon().unwrap(), 0x0197);

        let mut japanese = Record::empty(RecordShape::CardJapanese);
        japanese.set_icon(25).unwrap();
        assert_eq!(japanese.data()[178], 25);

        let news = Record::empty(RecordShape::News);
        assert!(matches!(news.icon(), Err(Error::Unsupported { .. })));
    }

    #[test]
    fn test_raw_access_bounds() {
        let mut record = card();
        assert_eq!(record.bytes(CARD_SIZE - 2, 2).unwrap(), &[0, 0]);
        assert!(matches!(
            record.bytes(CARD_SIZE - 1, 2),
            Err(Error::OutOfRange { size: CARD_SIZE, .. })
        ));
        assert!(record.set_bytes(&[1, 2, 3], CARD_SIZE - 2).is_err());
        assert!(!record.is_edited());

        record.set_bytes(&[1, 2], 20).unwrap();
        assert!(record.is_edited());
        assert_eq!(record.changed_offsets().collect::<Vec<_>>(), vec![20, 21]);
        assert!(record.is_modified());
        assert_eq!(record.original()[20], 0);
    }

    #[test]
    fn test_text_roundtrip_each_shape() {
        for shape in RecordShape::ALL {
            let mut record = Record::empty(shape);
            let text = match shape.locale() {
                Locale::Domestic => "MYSTERY GIFT",
                Locale::Japanese => "ふしぎなおくりもの",
            };
            for index in 0..record.slot_count() {
                record.set_text(index, text).unwrap();
            }
            for index in 0..record.slot_count() {
                assert_eq!(record.text(index).unwrap(), text, "{shape} slot {index}");
            }
        }
    }

    #[test]
    fn test_text_clamped_to_slot() {
        let mut record = Record::empty(RecordShape::CardJapanese);
        record.set_text(1, "あいうえおかきくけこさしすせそ").unwrap();
        record.set_text(2, "た").unwrap();

        // slot 1 is 13 bytes wide and holds no terminator
        assert_eq!(record.text(1).unwrap(), "あいうえおかきくけこさしす");
        assert_eq!(record.text(2).unwrap(), "た");
    }

    #[test]
    fn test_text_slot_out_of_range() {
        let mut record = card();
        assert!(matches!(
            record.text(8),
            Err(Error::SlotOutOfRange { index: 8, count: 8 })
        ));
        assert!(record.set_text(8, "A").is_err());
    }

    #[test]
    fn test_clear_text() {
        for shape in RecordShape::ALL {
            let mut data = vec![0xBBu8; shape.size()];
            data[0] = 0x12;
            data[1] = 0x34;
            let mut record = Record::parse(&data).unwrap();
            record.clear_text();

            for index in 0..record.slot_count() {
                assert_eq!(record.text(index).unwrap(), "", "{shape}");
            }
            let range = record.layout().text_range();
            assert!(record.data()[range.clone()].iter().all(|&b| b == 0));
            if range.end < shape.size() {
                assert_eq!(record.data()[range.end], 0xBB);
            }
            assert_eq!(record.stored_header_checksum(), 0x3412);
        }
    }

    #[test]
    fn test_padding_is_trimmed() {
        let mut record = card();
        record.set_bytes(&[0xBB, 0x00, 0xBC, 0x00, 0x00], 14).unwrap();
        assert_eq!(record.text(0).unwrap(), "A B");

        let mut japanese = Record::empty(RecordShape::NewsJapanese);
        japanese.set_text(3, "ね").unwrap();
        japanese.set_bytes(&[0x18, 0x00, 0x00], japanese.slot(4).unwrap().offset).unwrap();
        assert_eq!(japanese.text(3).unwrap(), "ね");
        assert_eq!(japanese.text(4).unwrap(), "ね");
    }

    #[test]
    fn test_written_trailing_space_survives() {
        let mut record = card();
        record.set_text(0, "AB ").unwrap();
        assert_eq!(record.text(0).unwrap(), "AB ");

        let mut japanese = Record::empty(RecordShape::CardJapanese);
        japanese.set_text(2, "あ\u{3000}").unwrap();
        assert_eq!(japanese.text(2).unwrap(), "あ\u{3000}");
    }

    #[test]
    fn test_cleared_slot_after_write() {
        let mut record = card();
        record.set_text(0, "A").unwrap();
        record.clear_text();
        assert_eq!(record.text(0).unwrap(), "");
    }

    #[test]
    fn test_legacy_text() {
        let mut record = card();
        record.set_legacy_text(1, "Hi").unwrap();
        assert_eq!(&record.data()[54..57], &[0xC2, 0xDD, 0x00]);
        assert!(record.legacy_text(1).unwrap().starts_with("Hi  "));
        assert!(record.legacy_text(8).is_err());
    }

    #[test]
    fn test_legacy_lines_stay_in_text_region() {
        let expected = [
            (RecordShape::Card, 8),
            (RecordShape::CardJapanese, 3),
            (RecordShape::News, 11),
            (RecordShape::NewsJapanese, 5),
        ];
        for (shape, count) in expected {
            let mut record = Record::empty(shape);
            assert_eq!(record.legacy_line_count(), count, "{shape}");

            let line = "A".repeat(legacy::LINE_SIZE);
            for index in 0..count {
                record.set_legacy_text(index, &line).unwrap();
            }
            assert!(matches!(
                record.set_legacy_text(count, &line),
                Err(Error::SlotOutOfRange { .. })
            ));
            assert!(record.legacy_text(count).is_err());

            let text_end = record.layout().text_range().end;
            assert!(record.changed_offsets().all(|offset| offset < text_end), "{shape}");
        }
    }

    #[test]
    fn test_legacy_text_leaves_japanese_script_alone() {
        let mut record = Record::empty(RecordShape::CardJapanese);
        record.set_script(&[0x55; SCRIPT_SIZE]).unwrap();
        let script = record.script().unwrap().to_vec();

        assert!(record.set_legacy_text(7, &"A".repeat(40)).is_err());
        assert_eq!(record.script().unwrap(), &script[..]);
        assert_eq!(record.icon().unwrap(), 0);
    }

    #[test]
    fn test_header_checksum_fix() {
        let mut record = card();
        assert_eq!(record.header_checksum(), 0xCB9B);
        assert!(!record.verify().header.is_valid());

        record.fix_header_checksum();
        assert_eq!(&record.data()[..2], &[0x9B, 0xCB]);
        assert!(record.verify().header.is_valid());

        // editing a covered byte invalidates it again
        record.set_text(0, "A").unwrap();
        assert!(!record.verify().header.is_valid());
    }

    #[test]
    fn test_checksum_regions_per_shape() {
        let expected = [
            (RecordShape::Card, 0xCB9B),
            (RecordShape::CardJapanese, 0xDDEE),
            (RecordShape::News, 0xF1D5),
            (RecordShape::NewsJapanese, 0xA77F),
        ];
        for (shape, checksum) in expected {
            assert_eq!(Record::empty(shape).header_checksum(), checksum, "{shape}");
        }
    }

    #[test]
    fn test_news_checksum_excludes_its_field() {
        let mut record = Record::empty(RecordShape::News);
        record.fix_checksums();
        let first = record.stored_header_checksum();
        // the checksum field itself is outside the region
        record.fix_checksums();
        assert_eq!(record.stored_header_checksum(), first);
        assert!(record.verify().script.is_none());
    }

    #[test]
    fn test_script_checksum() {
        let mut record = card();
        assert_eq!(record.script_checksum().unwrap(), 0xC3E8);

        record.fix_checksums();
        assert_eq!(&record.data()[416..418], &[0xE8, 0xC3]);
        assert!(record.verify().is_valid());

        let news = Record::empty(RecordShape::News);
        assert!(news.script_checksum().is_err());
    }

    #[test]
    fn test_script_header() {
        let mut record = card();
        let header = ScriptHeader {
            id: 0x33,
            map_bank: 0xFF,
            map_number: 0xFE,
            npc: 0x01,
        };
        record.set_script_header(header).unwrap();
        assert_eq!(&record.data()[420..424], &[0x33, 0xFF, 0xFE, 0x01]);
        assert_eq!(record.script_header().unwrap(), header);
    }

    #[test]
    fn test_set_script_zeroes_rest() {
        let mut record = card();
        record.set_script(&[0xAA; SCRIPT_SIZE]).unwrap();
        record.set_script(&[0x01, 0x02]).unwrap();

        let script = record.script().unwrap();
        assert_eq!(script.len(), SCRIPT_SIZE);
        assert_eq!(&script[..2], &[0x01, 0x02]);
        assert!(script[2..].iter().all(|&b| b == 0));

        assert!(matches!(
            record.set_script(&[0; SCRIPT_SIZE + 1]),
            Err(Error::ScriptTooLarge(997))
        ));
    }

    #[test]
    fn test_clean_trailing_trash() {
        let mut record = card();
        let mut script = vec![0x55u8; SCRIPT_SIZE];
        script[10] = 0xFF;
        script[20] = 0xFF;
        record.set_script(&script).unwrap();

        assert_eq!(record.clean_trailing_trash().unwrap(), SCRIPT_SIZE - 21);
        let cleaned = record.script().unwrap();
        assert_eq!(cleaned[20], 0xFF);
        assert_eq!(cleaned[19], 0x55);
        assert!(cleaned[21..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clean_trailing_trash_noop_keeps_edited_flag() {
        let mut data = vec![0u8; CARD_SIZE];
        data[CARD_SIZE - 1] = 0xFF;
        let mut record = Record::parse(&data).unwrap();

        assert_eq!(record.clean_trailing_trash().unwrap(), 0);
        assert!(!record.is_edited());
        assert!(!record.is_modified());
    }

    #[test]
    fn test_clean_trailing_trash_without_terminator() {
        let mut record = card();
        record.set_script(&[0x55; SCRIPT_SIZE]).unwrap();
        assert_eq!(record.clean_trailing_trash().unwrap(), SCRIPT_SIZE);
        assert!(record.script().unwrap().iter().all(|&b| b == 0));
        // the script header is not part of the scan
        record.set_script_header(ScriptHeader { id: 0xFF, ..Default::default() }).unwrap();
        record.clean_trailing_trash().unwrap();
        assert_eq!(record.script_header().unwrap().id, 0xFF);
    }

    #[test]
    fn test_script_unsupported_on_news() {
        let mut news = Record::empty(RecordShape::NewsJapanese);
        assert!(news.script().is_err());
        assert!(news.clean_trailing_trash().is_err());
        assert!(matches!(
            news.set_script(&[]),
            Err(Error::Unsupported { shape: RecordShape::NewsJapanese, .. })
        ));
    }

    #[test]
    fn test_file_roundtrip_and_extension_check() {
        let dir = std::env::temp_dir().join(format!("wondercard-record-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let mut record = card();
        record.set_text(0, "MEW").unwrap();
        record.fix_checksums();

        let card_path = dir.join("gift.wc3");
        record.write_to_file(&card_path).unwrap();
        let loaded = Record::from_file(&card_path).unwrap();
        assert_eq!(loaded.data(), record.data());
        assert!(loaded.verify().is_valid());

        let wrong_path = dir.join("gift.wn3");
        record.write_to_file(&wrong_path).unwrap();
        assert!(matches!(
            Record::from_file(&wrong_path),
            Err(Error::InvalidExtension { .. })
        ));

        let bin_path = dir.join("gift.bin");
        record.write_to_file(&bin_path).unwrap();
        assert!(Record::from_file(&bin_path).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(feature = "diagnostics")]
    #[test]
    fn test_fake_magic() {
        let mut record = card();
        record.fake_card_magic().unwrap();
        assert_eq!(&record.data()[4..8], &[0xBA, 0xB4, 0xBE, 0xB9]);

        record.fake_script_magic().unwrap();
        let header = record.script_header().unwrap();
        assert_eq!(header.id, 0x33);
        assert_eq!(header.map_bank, 0xFF);
        assert!(Record::empty(RecordShape::News).fake_script_magic().is_err());
    }
}
