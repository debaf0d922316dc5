//! Integration tests for the annotated dumper, alone and fed by the deriver.

mod common;

use std::collections::BTreeSet;

use common::*;
use fieldview::dump::render_rows;
use fieldview::field::owner_of;
use fieldview::{
    build_rows, derive_elf_layout, render_dump, AnsiPaint, Color, DumpConfig, FieldDescriptor,
    PlainPaint, Style,
};

fn plain(columns: usize) -> DumpConfig {
    DumpConfig {
        columns_per_row: columns,
        color: false,
        ..Default::default()
    }
}

#[test]
fn twenty_bytes_wrap_into_two_rows() {
    let bytes: Vec<u8> = (b'a'..b'a' + 20).collect();
    let fields = vec![FieldDescriptor::new(20, "letters", Color::Green)];
    let rows = build_rows(&bytes, &fields, 16);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].cells.len(), 4);
    assert_eq!(rows[1].padding(16), 12);

    let ascii = rows[1].ascii(16);
    assert_eq!(ascii.len(), 16);
    assert_eq!(&ascii[..4], "qrst");
    assert!(ascii[4..].chars().all(|c| c == ' '));

    let text = render_dump(&bytes, &fields, &plain(16), &PlainPaint).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("0x0000| "));
    assert!(lines[1].starts_with("0x0010| 71 72 73 74 "));
    assert!(lines[1].ends_with("|qrst            | letters "));
}

#[test]
fn seam_follows_the_last_byte_of_each_field() {
    let bytes = [0x10u8, 0x11, 0x12, 0x20, 0x21];
    let fields = vec![
        FieldDescriptor::new(3, "three", Color::Cyan),
        FieldDescriptor::new(2, "two", Color::Pink),
    ];
    let rows = build_rows(&bytes, &fields, 16);
    let seps: Vec<Style> = rows[0].cells.iter().map(|c| c.separator_style()).collect();

    assert_eq!(seps[0], Style::on(Color::Cyan));
    assert_eq!(seps[1], Style::on(Color::Cyan));
    assert_eq!(seps[2], Style::neutral());
    assert_eq!(seps[3], Style::on(Color::Pink));
    assert_eq!(seps[4], Style::neutral());
}

#[test]
fn field_spanning_rows_is_listed_in_each() {
    let bytes = [0u8; 12];
    let fields = vec![
        FieldDescriptor::new(3, "a", Color::Red),
        FieldDescriptor::new(6, "spans", Color::Blue),
        FieldDescriptor::new(3, "c", Color::Green),
    ];
    let rows = build_rows(&bytes, &fields, 4);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].legend_names(), vec!["a", "spans"]);
    assert_eq!(rows[1].legend_names(), vec!["spans"]);
    assert_eq!(rows[2].legend_names(), vec!["spans", "c"]);
}

#[test]
fn header_only_elf_renders_four_full_rows() {
    let data = header_only_elf();
    let fields = derive_elf_layout(&data).unwrap();
    assert_eq!(fields.len(), 14);
    assert!(fields.iter().all(|f| !f.is_gap()));

    let rows = build_rows(&data, &fields, 16);
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.cells.len() == 16 && r.padding(16) == 0));

    let text = render_dump(&data, &fields, &plain(16), &PlainPaint).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().next().unwrap().ends_with("| e_ident "));
}

#[test]
fn legend_matches_byte_ownership() {
    let data = build_elf(&[
        SectionSpec::progbits(".text", &[0x55; 37]),
        SectionSpec::progbits(".data", b"some readable data").padded(9),
    ]);
    let fields = derive_elf_layout(&data).unwrap();

    for columns in [1usize, 7, 16, 33] {
        let rows = build_rows(&data, &fields, columns);
        let covered: usize = rows.iter().map(|r| r.cells.len()).sum();
        assert_eq!(covered, data.len());

        for row in &rows {
            let start = row.offset;
            let end = start + row.cells.len() as u64;
            let expected: BTreeSet<&str> = (start..end)
                .map(|i| owner_of(&fields, i).unwrap().name.as_str())
                .collect();
            let actual: BTreeSet<&str> = row.legend_names().into_iter().collect();
            assert_eq!(actual, expected, "row at {start:#x} with {columns} columns");

            for (k, cell) in row.cells.iter().enumerate() {
                let owner = owner_of(&fields, start + k as u64).unwrap();
                assert!(std::ptr::eq(&fields[cell.field], owner));
                assert_eq!(cell.style, owner.style);
            }
        }
    }
}

#[test]
fn short_layout_stops_early_and_long_layout_stops_at_buffer_end() {
    let bytes = [0xffu8; 10];
    let short = vec![FieldDescriptor::new(4, "only", Color::Red)];
    let rows = build_rows(&bytes, &short, 16);
    assert_eq!(rows[0].cells.len(), 4);

    let long = vec![FieldDescriptor::new(400, "huge", Color::Red)];
    let rows = build_rows(&bytes, &long, 16);
    assert_eq!(rows[0].cells.len(), 10);

    let strict = DumpConfig {
        strict: true,
        ..plain(16)
    };
    assert!(render_dump(&bytes, &long, &strict, &PlainPaint).is_err());
    assert!(render_dump(&bytes, &long, &plain(16), &PlainPaint).is_ok());
}

#[test]
fn colored_output_is_reproducible() {
    let data = build_elf(&[
        SectionSpec::progbits(".text", &[0x90; 20]),
        SectionSpec::progbits(".data", b"xyz").padded(4),
    ]);
    let render = || {
        let fields = derive_elf_layout(&data).unwrap();
        render_dump(&data, &fields, &DumpConfig::default(), &AnsiPaint).unwrap()
    };
    let first = render();
    assert_eq!(first, render());
    assert!(first.contains("\x1b["));

    let fields = derive_elf_layout(&data).unwrap();
    let rows = build_rows(&data, &fields, 16);
    assert_eq!(render_rows(&rows, 16, &AnsiPaint), first);
}
