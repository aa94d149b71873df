//! Record shapes and their byte layouts.
//!
//! Nothing in a distribution record says which kind or locale it is; the
//! buffer length alone decides. Every offset the record model uses comes from
//! the [`ShapeLayout`] table of the detected shape.

use std::ops::Range;

use wondercard_text::Locale;

/// Offset of the header checksum field.
pub const CHECKSUM_OFFSET: usize = 0;

/// First byte covered by the header checksum.
pub const CHECKSUM_START: usize = 4;

/// Size of the event script in a card.
pub const SCRIPT_SIZE: usize = 996;

/// Size of the script header (id, map bank, map number, NPC id).
pub const SCRIPT_HEADER_SIZE: usize = 4;

/// Bytes covered by the script checksum (header plus script).
pub const SCRIPT_CHECKSUM_LEN: usize = SCRIPT_HEADER_SIZE + SCRIPT_SIZE;

/// Header region length of a domestic card.
const CARD_HEADER_LEN: usize = 0x14C;

/// Header region length of a Japanese card.
const CARD_JAPANESE_HEADER_LEN: usize = 0xA4;

/// Two 40-byte sections sit between the card header and the script block.
const CARD_SECTION_LEN: usize = 0x28;

/// Script checksum field (4 bytes) plus the 1000-byte script block.
const CARD_SCRIPT_BLOCK_LEN: usize = 4 + 0x3E8;

/// Size of a domestic card.
pub const CARD_SIZE: usize =
    CHECKSUM_START + CARD_HEADER_LEN + 2 * CARD_SECTION_LEN + CARD_SCRIPT_BLOCK_LEN;

/// Size of a Japanese card.
pub const CARD_JAPANESE_SIZE: usize =
    CHECKSUM_START + CARD_JAPANESE_HEADER_LEN + 2 * CARD_SECTION_LEN + CARD_SCRIPT_BLOCK_LEN;

/// Size of a domestic news record: checksum, header, 11 lines of 40 bytes.
pub const NEWS_SIZE: usize = 4 + 4 + 440;

/// Size of a Japanese news record: checksum, header, 11 lines of 20 bytes.
pub const NEWS_JAPANESE_SIZE: usize = 4 + 4 + 220;

const CARD_TEXT_START: usize = 14;
const NEWS_TEXT_START: usize = 8;

/// The container kind of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecordKind {
    /// Single gift card (`.wc3`).
    Card,
    /// Multi-line news bulletin (`.wn3`).
    News,
}

impl RecordKind {
    /// Get the conventional file extension.
    pub const fn extension(&self) -> &'static str {
        match self {
            RecordKind::Card => "wc3",
            RecordKind::News => "wn3",
        }
    }

    /// Map a file extension to a kind, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("wc3") {
            Some(RecordKind::Card)
        } else if extension.eq_ignore_ascii_case("wn3") {
            Some(RecordKind::News)
        } else {
            None
        }
    }
}

/// One of the four record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordShape {
    /// Domestic card.
    Card,
    /// Japanese card.
    CardJapanese,
    /// Domestic news.
    News,
    /// Japanese news.
    NewsJapanese,
}

impl RecordShape {
    /// All shapes.
    pub const ALL: [RecordShape; 4] = [
        RecordShape::Card,
        RecordShape::CardJapanese,
        RecordShape::News,
        RecordShape::NewsJapanese,
    ];

    /// Detect the shape of a buffer from its length.
    pub fn detect(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.size() == len)
    }

    /// Get the byte layout of this shape.
    pub fn layout(&self) -> &'static ShapeLayout {
        match self {
            RecordShape::Card => &CARD_LAYOUT,
            RecordShape::CardJapanese => &CARD_JAPANESE_LAYOUT,
            RecordShape::News => &NEWS_LAYOUT,
            RecordShape::NewsJapanese => &NEWS_JAPANESE_LAYOUT,
        }
    }

    /// Get the total size in bytes.
    pub fn size(&self) -> usize {
        self.layout().size
    }

    /// Get the container kind.
    pub const fn kind(&self) -> RecordKind {
        match self {
            RecordShape::Card | RecordShape::CardJapanese => RecordKind::Card,
            RecordShape::News | RecordShape::NewsJapanese => RecordKind::News,
        }
    }

    /// Get the font locale.
    pub const fn locale(&self) -> Locale {
        match self {
            RecordShape::Card | RecordShape::News => Locale::Domestic,
            RecordShape::CardJapanese | RecordShape::NewsJapanese => Locale::Japanese,
        }
    }

    /// Get the name of this shape.
    pub const fn name(&self) -> &'static str {
        match self {
            RecordShape::Card => "Card",
            RecordShape::CardJapanese => "CardJapanese",
            RecordShape::News => "News",
            RecordShape::NewsJapanese => "NewsJapanese",
        }
    }
}

impl std::fmt::Display for RecordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A text slot inside a record buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSlot {
    /// Absolute byte offset.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
}

impl TextSlot {
    /// Get the byte range covered by this slot.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// Offsets of the script block of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLayout {
    /// Offset of the little-endian script checksum.
    pub checksum_offset: usize,
    /// Offset of the script header; the script checksum covers from here.
    pub header_offset: usize,
    /// Offset of the event script itself.
    pub offset: usize,
}

impl ScriptLayout {
    const fn for_size(size: usize) -> Self {
        Self {
            checksum_offset: size - SCRIPT_CHECKSUM_LEN - 4,
            header_offset: size - SCRIPT_CHECKSUM_LEN,
            offset: size - SCRIPT_SIZE,
        }
    }
}

/// Byte layout of one record shape.
#[derive(Debug)]
pub struct ShapeLayout {
    /// Total buffer size.
    pub size: usize,
    /// Offset of the first text slot.
    pub text_start: usize,
    /// Length of the text region that [`clear_text`](crate::Record::clear_text) wipes.
    pub text_len: usize,
    /// Text slots, relative to `text_start`.
    slots: &'static [TextSlot],
    /// Length of the region covered by the header checksum, from [`CHECKSUM_START`].
    pub checksum_len: usize,
    /// Offset of the little-endian icon id (cards only).
    pub icon_offset: Option<usize>,
    /// Script block offsets (cards only).
    pub script: Option<ScriptLayout>,
}

impl ShapeLayout {
    /// Get the number of text slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Get a text slot with its absolute offset.
    pub fn slot(&self, index: usize) -> Option<TextSlot> {
        self.slots.get(index).map(|slot| TextSlot {
            offset: self.text_start + slot.offset,
            length: slot.length,
        })
    }

    /// Iterate over all text slots with absolute offsets.
    pub fn slots(&self) -> impl Iterator<Item = TextSlot> + '_ {
        (0..self.slot_count()).filter_map(|index| self.slot(index))
    }

    /// Get the byte range wiped by a text clear.
    pub const fn text_range(&self) -> Range<usize> {
        self.text_start..self.text_start + self.text_len
    }

    /// Get the byte range covered by the header checksum.
    pub const fn checksum_range(&self) -> Range<usize> {
        CHECKSUM_START..CHECKSUM_START + self.checksum_len
    }
}

const fn uniform_slots<const N: usize>(width: usize) -> [TextSlot; N] {
    let mut slots = [TextSlot {
        offset: 0,
        length: 0,
    }; N];
    let mut i = 0;
    while i < N {
        slots[i] = TextSlot {
            offset: i * width,
            length: width,
        };
        i += 1;
    }
    slots
}

static CARD_SLOTS: [TextSlot; 8] = uniform_slots(40);
static NEWS_SLOTS: [TextSlot; 11] = uniform_slots(40);
static NEWS_JAPANESE_SLOTS: [TextSlot; 11] = uniform_slots(20);

#[rustfmt::skip]
static CARD_JAPANESE_SLOTS: [TextSlot; 8] = [
    TextSlot { offset: 0,   length: 18 },
    TextSlot { offset: 18,  length: 13 },
    TextSlot { offset: 31,  length: 20 },
    TextSlot { offset: 51,  length: 20 },
    TextSlot { offset: 71,  length: 20 },
    TextSlot { offset: 91,  length: 20 },
    TextSlot { offset: 111, length: 20 },
    TextSlot { offset: 131, length: 20 },
];

static CARD_LAYOUT: ShapeLayout = ShapeLayout {
    size: CARD_SIZE,
    text_start: CARD_TEXT_START,
    text_len: 40 * 8,
    slots: &CARD_SLOTS,
    checksum_len: CARD_HEADER_LEN,
    icon_offset: Some(CHECKSUM_START + CARD_HEADER_LEN + 10),
    script: Some(ScriptLayout::for_size(CARD_SIZE)),
};

static CARD_JAPANESE_LAYOUT: ShapeLayout = ShapeLayout {
    size: CARD_JAPANESE_SIZE,
    text_start: CARD_TEXT_START,
    text_len: 18 + 13 + 20 * 6,
    slots: &CARD_JAPANESE_SLOTS,
    checksum_len: CARD_JAPANESE_HEADER_LEN,
    icon_offset: Some(CHECKSUM_START + CARD_JAPANESE_HEADER_LEN + 10),
    script: Some(ScriptLayout::for_size(CARD_JAPANESE_SIZE)),
};

static NEWS_LAYOUT: ShapeLayout = ShapeLayout {
    size: NEWS_SIZE,
    text_start: NEWS_TEXT_START,
    text_len: 40 * 11,
    slots: &NEWS_SLOTS,
    checksum_len: NEWS_SIZE - CHECKSUM_START,
    icon_offset: None,
    script: None,
};

static NEWS_JAPANESE_LAYOUT: ShapeLayout = ShapeLayout {
    size: NEWS_JAPANESE_SIZE,
    text_start: NEWS_TEXT_START,
    text_len: 20 * 11,
    slots: &NEWS_JAPANESE_SLOTS,
    checksum_len: NEWS_JAPANESE_SIZE - CHECKSUM_START,
    icon_offset: None,
    script: None,
};
