//! Field descriptor model shared by layout derivers and the dumper.
//!
//! A descriptor sequence annotates a buffer positionally: the first
//! descriptor owns the first `size` bytes, the next one the following bytes,
//! and so on. Offsets are never stored, only implied by order.

use serde::{Deserialize, Serialize};

/// Terminal colors understood by the painters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    LightBlue,
    DarkRed,
    Magenta,
    Orange,
    LightGray,
    Gray,
    Blue,
    Green,
    Cyan,
    Red,
    Pink,
    Yellow,
    White,
    /// Terminal default
    None,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 17] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::LightBlue,
        Color::DarkRed,
        Color::Magenta,
        Color::Orange,
        Color::LightGray,
        Color::Gray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Pink,
        Color::Yellow,
        Color::White,
        Color::None,
    ];
}

/// Foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
}

impl Style {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// White text on the given background, the look of every field cell.
    pub const fn on(bg: Color) -> Self {
        Self::new(Color::White, bg)
    }

    /// No styling at all; used for the seam after a field's last byte.
    pub const fn neutral() -> Self {
        Self::new(Color::None, Color::None)
    }

    /// Style of the padding cells on a short final row.
    pub const fn filler() -> Self {
        Self::new(Color::Black, Color::Black)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Decorative palette. Never contains black, yellow, white or none.
const PALETTE: [Color; 13] = [
    Color::DarkBlue,
    Color::DarkGreen,
    Color::LightBlue,
    Color::DarkRed,
    Color::Magenta,
    Color::Orange,
    Color::LightGray,
    Color::Gray,
    Color::Blue,
    Color::Green,
    Color::Cyan,
    Color::Red,
    Color::Pink,
];

/// Round-robin decorative style for the `index`-th item.
///
/// Pure function of `index`, so two runs over the same input color
/// identically.
pub fn color_for_index(index: usize) -> Style {
    Style::on(PALETTE[index % PALETTE.len()])
}

/// A named, sized, styled run of bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub size: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    pub style: Style,
}

impl FieldDescriptor {
    pub fn new(size: u64, name: impl Into<String>, bg: Color) -> Self {
        Self {
            size,
            name: name.into(),
            note: String::new(),
            style: Style::on(bg),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Synthesized descriptor for bytes no known structure claims.
    pub fn gap(size: u64) -> Self {
        Self {
            size,
            name: "unknown".to_string(),
            note: String::new(),
            style: Style::on(Color::Black),
        }
    }

    pub fn is_gap(&self) -> bool {
        self.name == "unknown" && self.style.bg == Color::Black
    }
}

/// Sum of descriptor sizes, saturating at `u64::MAX`.
pub fn total_size(fields: &[FieldDescriptor]) -> u64 {
    fields.iter().fold(0u64, |acc, f| acc.saturating_add(f.size))
}

/// Pair each descriptor with its implied starting offset.
pub fn offsets(fields: &[FieldDescriptor]) -> impl Iterator<Item = (u64, &FieldDescriptor)> {
    fields.iter().scan(0u64, |cursor, field| {
        let start = *cursor;
        *cursor = cursor.saturating_add(field.size);
        Some((start, field))
    })
}

/// Name of the descriptor owning byte `index`, if any.
pub fn owner_of(fields: &[FieldDescriptor], index: u64) -> Option<&FieldDescriptor> {
    offsets(fields)
        .find(|(start, f)| index >= *start && index < start.saturating_add(f.size))
        .map(|(_, f)| f)
}
