//! Shared builders for synthetic ELF64 files.
//!
//! The builder lays a file out as: header, section contents in declaration
//! order (each optionally preceded by padding), `.shstrtab`, then the section
//! header table. Everything is little-endian.

#![allow(dead_code)]

use fieldview::field::{offsets, FieldDescriptor};

pub const SHT_PROGBITS: u32 = 1;
pub const SHT_STRTAB: u32 = 3;
pub const SHT_NOBITS: u32 = 8;

/// A section to place in a synthetic file.
pub struct SectionSpec {
    pub name: &'static str,
    pub sh_type: u32,
    pub contents: Vec<u8>,
    /// Unclaimed bytes written before the contents
    pub padding_before: usize,
}

impl SectionSpec {
    pub fn progbits(name: &'static str, contents: &[u8]) -> Self {
        Self {
            name,
            sh_type: SHT_PROGBITS,
            contents: contents.to_vec(),
            padding_before: 0,
        }
    }

    pub fn padded(mut self, padding: usize) -> Self {
        self.padding_before = padding;
        self
    }
}

/// A 64-byte ELF64 header with no sections.
pub fn header_only_elf() -> Vec<u8> {
    let mut data = vec![0u8; 64];
    data[0..4].copy_from_slice(b"\x7fELF");
    data[4] = 2; // ELFCLASS64
    data[5] = 1; // ELFDATA2LSB
    data[6] = 1; // EV_CURRENT
    data[16] = 1; // ET_REL
    data[18] = 62; // EM_X86_64
    data[20] = 1; // e_version
    data[52] = 64; // e_ehsize
    data[58] = 64; // e_shentsize
    data
}

fn put_u16(data: &mut [u8], at: usize, v: u16) {
    data[at..at + 2].copy_from_slice(&v.to_le_bytes());
}

fn put_u32(data: &mut [u8], at: usize, v: u32) {
    data[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

fn put_u64(data: &mut [u8], at: usize, v: u64) {
    data[at..at + 8].copy_from_slice(&v.to_le_bytes());
}

/// Section header entry: (name offset, type, file offset, size).
fn section_header(name: u32, sh_type: u32, offset: u64, size: u64) -> [u8; 64] {
    let mut entry = [0u8; 64];
    put_u32(&mut entry, 0, name);
    put_u32(&mut entry, 4, sh_type);
    put_u64(&mut entry, 24, offset);
    put_u64(&mut entry, 32, size);
    put_u64(&mut entry, 48, 1);
    entry
}

/// Build a file holding `sections` plus a trailing `.shstrtab`.
///
/// Section indices: 0 is the null section, `1..=n` are `sections`, and
/// `n + 1` is `.shstrtab`.
pub fn build_elf(sections: &[SectionSpec]) -> Vec<u8> {
    let mut data = header_only_elf();

    let mut strtab = vec![0u8];
    let mut headers = vec![[0u8; 64]];

    for spec in sections {
        data.extend(std::iter::repeat(0xee).take(spec.padding_before));
        let name = strtab.len() as u32;
        strtab.extend_from_slice(spec.name.as_bytes());
        strtab.push(0);

        let offset = data.len() as u64;
        if spec.sh_type != SHT_NOBITS {
            data.extend_from_slice(&spec.contents);
        }
        headers.push(section_header(
            name,
            spec.sh_type,
            offset,
            spec.contents.len() as u64,
        ));
    }

    let shstrtab_name = strtab.len() as u32;
    strtab.extend_from_slice(b".shstrtab\0");
    let shstrtab_offset = data.len() as u64;
    data.extend_from_slice(&strtab);
    headers.push(section_header(
        shstrtab_name,
        SHT_STRTAB,
        shstrtab_offset,
        strtab.len() as u64,
    ));

    let shoff = data.len() as u64;
    for entry in &headers {
        data.extend_from_slice(entry);
    }

    put_u64(&mut data, 40, shoff);
    put_u16(&mut data, 60, headers.len() as u16);
    put_u16(&mut data, 62, (headers.len() - 1) as u16);
    data
}

/// Assert that `fields` partitions `[0, len)` with no empty descriptors.
pub fn assert_partition(fields: &[FieldDescriptor], len: usize) {
    let mut expected = 0u64;
    for (offset, field) in offsets(fields) {
        assert!(field.size > 0, "empty descriptor `{}`", field.name);
        assert_eq!(offset, expected, "descriptor `{}` misplaced", field.name);
        expected = offset + field.size;
    }
    assert_eq!(expected, len as u64, "layout does not cover the buffer");
}

/// Offset of the first descriptor called `name`.
pub fn offset_of(fields: &[FieldDescriptor], name: &str) -> Option<u64> {
    offsets(fields)
        .find(|(_, f)| f.name == name)
        .map(|(offset, _)| offset)
}
