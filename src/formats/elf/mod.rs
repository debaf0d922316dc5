//! ELF64 layout deriver
//!
//! Walks the fixed file header and the section header table of an ELF64
//! object and produces a field descriptor sequence covering every byte of
//! the file. Bytes claimed by no known structure become `"unknown"` gaps.

pub mod headers;
pub mod layout;
pub mod sections;
pub mod types;
pub mod utils;

use tracing::{debug, info_span};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::field::FieldDescriptor;
use headers::parse_header;
use layout::OffsetMap;
use sections::{parse_sections, SectionEntry};
pub use types::*;

/// Derive the layout of an ELF64 file with the default configuration.
pub fn derive_elf_layout(bytes: &[u8]) -> Result<Vec<FieldDescriptor>> {
    derive_elf_layout_with(bytes, &LayoutConfig::default())
}

/// Derive the layout of an ELF64 file.
pub fn derive_elf_layout_with(bytes: &[u8], config: &LayoutConfig) -> Result<Vec<FieldDescriptor>> {
    let span = info_span!("derive_elf_layout", len = bytes.len());
    let _guard = span.enter();

    let header = parse_header(bytes)?;
    let sections = parse_sections(bytes, &header)?;

    let mut map = OffsetMap::new(config.overlap_policy);
    map.extend(header_fields())?;
    for section in &sections {
        map.extend(section.header_fields())?;
    }
    if config.section_contents {
        map.extend(sections.iter().filter_map(SectionEntry::contents_field))?;
    }

    let fields = map.into_layout(bytes.len() as u64)?;
    debug!(
        sections = sections.len(),
        descriptors = fields.len(),
        gaps = fields.iter().filter(|f| f.is_gap()).count(),
        "Derived ELF layout"
    );
    Ok(fields)
}

/// The fourteen `Elf64_Ehdr` members, keyed by file offset.
pub fn header_fields() -> Vec<(u64, FieldDescriptor)> {
    let mut offset = 0;
    HEADER_MEMBERS
        .iter()
        .map(|member| {
            let placed = (
                offset,
                FieldDescriptor::new(member.size, member.name, member.color).with_note(member.note),
            );
            offset += member.size;
            placed
        })
        .collect()
}
