//! Annotated hex dump
//!
//! Renders a buffer as rows of colored hex cells grouped by field, followed
//! by an ASCII panel and a legend of the fields appearing in each row. The
//! dumper knows nothing about file formats; any descriptor list works.

pub mod row;

use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::config::DumpConfig;
use crate::error::{FieldviewError, Result};
use crate::field::{total_size, FieldDescriptor, Style};
use crate::paint::Paint;
pub use row::{build_rows, ByteCell, DumpRow, LegendEntry};

/// Width of one hex cell including its separator.
pub const CELL_WIDTH: usize = 3;

/// Render one row to text, newline included.
pub fn render_row(row: &DumpRow<'_>, columns: usize, painter: &dyn Paint) -> String {
    let mut line = String::with_capacity(columns * 16);
    let _ = write!(line, "0x{:04x}| ", row.offset);

    for cell in &row.cells {
        line.push_str(&painter.paint_style(cell.style, &cell.hex()));
        line.push_str(&painter.paint_style(cell.separator_style(), " "));
    }
    for _ in 0..row.padding(columns) {
        line.push_str(&painter.paint_style(Style::filler(), &" ".repeat(CELL_WIDTH)));
    }

    line.push_str(" |");
    line.push_str(&row.ascii(columns));
    line.push_str("| ");

    for entry in &row.legend {
        line.push_str(&painter.paint_style(entry.style, entry.name));
        line.push(' ');
    }
    line.push('\n');
    line
}

/// Render already-built rows.
pub fn render_rows(rows: &[DumpRow<'_>], columns: usize, painter: &dyn Paint) -> String {
    let mut out = String::new();
    for row in rows {
        trace!(offset = row.offset, cells = row.cells.len(), "Rendering row");
        out.push_str(&render_row(row, columns, painter));
    }
    out
}

/// Render `bytes` annotated by `fields`.
///
/// The whole dump is built in memory and returned at once. Outside strict
/// mode a descriptor list that does not sum to the buffer length is
/// tolerated: rendering stops at whichever ends first.
pub fn render_dump(
    bytes: &[u8],
    fields: &[FieldDescriptor],
    config: &DumpConfig,
    painter: &dyn Paint,
) -> Result<String> {
    config.validate()?;

    let declared = total_size(fields);
    let actual = bytes.len() as u64;
    if declared != actual {
        if config.strict {
            return Err(FieldviewError::LayoutMismatch { declared, actual });
        }
        debug!(declared, actual, "Descriptor sizes do not match buffer length");
    }

    let rows = build_rows(bytes, fields, config.columns_per_row);
    debug!(rows = rows.len(), columns = config.columns_per_row, "Rendering dump");
    Ok(render_rows(&rows, config.columns_per_row, painter))
}
