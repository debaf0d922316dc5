//! Structural row model: which byte lands in which row, owned by which field.

use std::mem;

use crate::field::{FieldDescriptor, Style};

/// One byte of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCell {
    pub value: u8,
    /// Index of the owning descriptor
    pub field: usize,
    pub style: Style,
    /// Last byte of its descriptor; the following separator is the seam.
    pub ends_field: bool,
}

impl ByteCell {
    pub fn hex(&self) -> String {
        hex::encode([self.value])
    }

    /// Style of the separator painted after this byte.
    pub fn separator_style(&self) -> Style {
        if self.ends_field {
            Style::neutral()
        } else {
            self.style
        }
    }

    /// ASCII panel character.
    pub fn printable(&self) -> char {
        printable(self.value)
    }
}

/// A field contributing at least one byte to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry<'a> {
    pub name: &'a str,
    pub style: Style,
}

/// One output line of the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRow<'a> {
    /// Offset of the first byte in the row
    pub offset: u64,
    pub cells: Vec<ByteCell>,
    /// Distinct field names, in first-seen order
    pub legend: Vec<LegendEntry<'a>>,
}

impl<'a> DumpRow<'a> {
    fn new(offset: u64, columns: usize) -> Self {
        Self {
            offset,
            cells: Vec::with_capacity(columns),
            legend: Vec::new(),
        }
    }

    fn push(&mut self, cell: ByteCell, field: &'a FieldDescriptor) {
        self.cells.push(cell);
        if !self.legend.iter().any(|entry| entry.name == field.name) {
            self.legend.push(LegendEntry {
                name: &field.name,
                style: field.style,
            });
        }
    }

    /// Number of blank columns needed to fill the row to `columns`.
    pub fn padding(&self, columns: usize) -> usize {
        columns.saturating_sub(self.cells.len())
    }

    /// The ASCII side panel, always `columns` characters wide.
    pub fn ascii(&self, columns: usize) -> String {
        let mut panel: String = self.cells.iter().map(ByteCell::printable).collect();
        panel.extend(std::iter::repeat(' ').take(self.padding(columns)));
        panel
    }

    pub fn legend_names(&self) -> Vec<&'a str> {
        self.legend.iter().map(|entry| entry.name).collect()
    }
}

/// Printable ASCII is shown as itself, everything else as a space.
pub fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        ' '
    }
}

/// Split `bytes` into rows of `columns` cells, each cell tagged with the
/// descriptor that owns it.
///
/// Stops at whichever runs out first, the buffer or the descriptors. A
/// descriptor spanning a row boundary appears in the legend of every row it
/// touches.
pub fn build_rows<'a>(
    bytes: &[u8],
    fields: &'a [FieldDescriptor],
    columns: usize,
) -> Vec<DumpRow<'a>> {
    let columns = columns.max(1);
    let mut rows = Vec::with_capacity(bytes.len() / columns + 1);
    let mut row = DumpRow::new(0, columns);
    let mut pos = 0usize;

    'fields: for (index, field) in fields.iter().enumerate() {
        for i in 0..field.size {
            let Some(&value) = bytes.get(pos) else {
                break 'fields;
            };
            if row.cells.len() == columns {
                let next = DumpRow::new(pos as u64, columns);
                rows.push(mem::replace(&mut row, next));
            }
            let cell = ByteCell {
                value,
                field: index,
                style: field.style,
                ends_field: i + 1 == field.size,
            };
            row.push(cell, field);
            pos += 1;
        }
    }

    if !row.cells.is_empty() {
        rows.push(row);
    }
    rows
}
