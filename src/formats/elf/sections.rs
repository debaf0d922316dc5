//! Section header table walk

use tracing::debug;

use crate::error::{FieldviewError, Result};
use crate::field::{color_for_index, FieldDescriptor};
use crate::formats::elf::types::*;
use crate::formats::elf::utils::{read_cstring, EndianRead};

/// One entry of the section header table, with its name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    /// Position in the section header table
    pub index: usize,
    /// File offset of the header entry itself
    pub offset: u64,
    /// Name from the section header string table
    pub name: String,
    pub header: SectionHeader,
}

impl SectionEntry {
    /// The ten `Elf64_Shdr` members as descriptors keyed by file offset.
    pub fn header_fields(&self) -> Vec<(u64, FieldDescriptor)> {
        let mut offset = self.offset;
        SECTION_MEMBERS
            .iter()
            .map(|member| {
                let name = if member.name == "sh_name" {
                    format!("[{}].{}({})", self.index, member.name, self.name)
                } else {
                    format!("[{}].{}", self.index, member.name)
                };
                let field = FieldDescriptor::new(member.size, name, member.color)
                    .with_note(member.note);
                let placed = (offset, field);
                offset += member.size;
                placed
            })
            .collect()
    }

    /// Whether the section occupies bytes in the file.
    pub fn has_file_contents(&self) -> bool {
        !matches!(self.header.sh_type, SHT_NULL | SHT_NOBITS) && self.header.sh_size > 0
    }

    /// Descriptor covering the section's contents, if it has any.
    pub fn contents_field(&self) -> Option<(u64, FieldDescriptor)> {
        if !self.has_file_contents() {
            return None;
        }
        let name = if self.name.is_empty() {
            format!("[{}]", self.index)
        } else {
            self.name.clone()
        };
        let field = FieldDescriptor::new(self.header.sh_size, name, color_for_index(self.index).bg)
            .with_note("section contents");
        Some((self.header.sh_offset, field))
    }
}

/// File offset of section header `index`.
fn entry_offset(header: &ElfHeader, index: u64) -> Result<u64> {
    index
        .checked_mul(SHDR_SIZE)
        .and_then(|rel| header.e_shoff.checked_add(rel))
        .ok_or_else(|| FieldviewError::MalformedHeader {
            offset: header.e_shoff,
            needed: SHDR_SIZE as usize,
            message: format!("section header {index} offset overflows"),
        })
}

/// Parse a single section header
fn parse_section_header(data: &[u8], offset: u64, endian: ElfData) -> Result<SectionHeader> {
    // Bounds-check the whole entry up front so the error names its start.
    data.read_array::<{ SHDR_SIZE as usize }>(offset)?;
    Ok(SectionHeader {
        sh_name: data.read_u32(offset, endian)?,
        sh_type: data.read_u32(offset + 4, endian)?,
        sh_flags: data.read_u64(offset + 8, endian)?,
        sh_addr: data.read_u64(offset + 16, endian)?,
        sh_offset: data.read_u64(offset + 24, endian)?,
        sh_size: data.read_u64(offset + 32, endian)?,
        sh_link: data.read_u32(offset + 40, endian)?,
        sh_info: data.read_u32(offset + 44, endian)?,
        sh_addralign: data.read_u64(offset + 48, endian)?,
        sh_entsize: data.read_u64(offset + 56, endian)?,
    })
}

/// File offset where the section name strings begin, if the file has a
/// section header string table.
fn string_table_base(data: &[u8], header: &ElfHeader) -> Result<Option<u64>> {
    if header.e_shstrndx == SHN_UNDEF {
        return Ok(None);
    }
    let offset = entry_offset(header, u64::from(header.e_shstrndx))?;
    let shstrtab = parse_section_header(data, offset, header.data)?;
    Ok(Some(shstrtab.sh_offset))
}

/// Walk every section header in table order, resolving names.
pub fn parse_sections(data: &[u8], header: &ElfHeader) -> Result<Vec<SectionEntry>> {
    if header.e_shnum == 0 {
        return Ok(Vec::new());
    }

    let strings = string_table_base(data, header)?;
    let mut sections = Vec::with_capacity(header.e_shnum as usize);

    for index in 0..u64::from(header.e_shnum) {
        let offset = entry_offset(header, index)?;
        let sh = parse_section_header(data, offset, header.data)?;
        let name = match strings {
            Some(base) => {
                let at = base.checked_add(u64::from(sh.sh_name)).ok_or_else(|| {
                    FieldviewError::MalformedHeader {
                        offset: base,
                        needed: 1,
                        message: format!("name of section {index} overflows"),
                    }
                })?;
                read_cstring(data, at)?
            }
            None => String::new(),
        };

        debug!(
            index,
            name = %name,
            sh_type = sh.sh_type,
            sh_offset = sh.sh_offset,
            sh_size = sh.sh_size,
            "Discovered section"
        );

        sections.push(SectionEntry {
            index: index as usize,
            offset,
            name,
            header: sh,
        });
    }

    Ok(sections)
}
