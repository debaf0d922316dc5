//! Core ELF64 types, constants and the static field tables

use crate::field::Color;

/// ELF magic number
pub const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Size of `e_ident`
pub const EI_NIDENT: u64 = 16;
/// Index of the data-encoding byte within `e_ident`
pub const EI_DATA: usize = 5;
/// `sizeof(Elf64_Ehdr)`
pub const EHDR_SIZE: u64 = 64;
/// `sizeof(Elf64_Shdr)`
pub const SHDR_SIZE: u64 = 64;

/// Offsets of the header fields the deriver needs
pub const E_SHOFF: u64 = 40;
pub const E_SHENTSIZE: u64 = 58;
pub const E_SHNUM: u64 = 60;
pub const E_SHSTRNDX: u64 = 62;

/// Section types
pub const SHT_NULL: u32 = 0;
pub const SHT_PROGBITS: u32 = 1;
pub const SHT_STRTAB: u32 = 3;
pub const SHT_NOBITS: u32 = 8;

/// Special section indices
pub const SHN_UNDEF: u16 = 0;

/// ELF data encoding (endianness)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfData {
    Little = 1,
    Big = 2,
}

impl ElfData {
    /// Lenient decoding: only an explicit `ELFDATA2MSB` selects big-endian.
    pub fn from_u8(val: u8) -> Self {
        match val {
            2 => ElfData::Big,
            _ => ElfData::Little,
        }
    }
}

/// The parts of the ELF64 file header the layout walk depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElfHeader {
    pub data: ElfData,
    pub e_shoff: u64,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

/// Section header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionHeader {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,
}

/// One statically declared structure member: size, name, note, color.
#[derive(Debug, Clone, Copy)]
pub struct MemberSpec {
    pub size: u64,
    pub name: &'static str,
    pub note: &'static str,
    pub color: Color,
}

const fn member(size: u64, name: &'static str, note: &'static str, color: Color) -> MemberSpec {
    MemberSpec {
        size,
        name,
        note,
        color,
    }
}

/// `Elf64_Ehdr`, in declaration order
pub const HEADER_MEMBERS: [MemberSpec; 14] = [
    member(EI_NIDENT, "e_ident", "Magic number and other info", Color::Orange),
    member(2, "e_type", "Object file type", Color::DarkBlue),
    member(2, "e_machine", "Architecture", Color::DarkGreen),
    member(4, "e_version", "Object file version", Color::LightBlue),
    member(8, "e_entry", "Entry point virtual address", Color::DarkRed),
    member(8, "e_phoff", "Program header table file offset", Color::Magenta),
    member(8, "e_shoff", "Section header table file offset", Color::LightGray),
    member(4, "e_flags", "Processor-specific flags", Color::Orange),
    member(2, "e_ehsize", "ELF header size in bytes", Color::Gray),
    member(2, "e_phentsize", "Program header table entry size", Color::Blue),
    member(2, "e_phnum", "Program header table entry count", Color::Green),
    member(2, "e_shentsize", "Section header table entry size", Color::Cyan),
    member(2, "e_shnum", "Section header table entry count", Color::Red),
    member(2, "e_shstrndx", "Section header string table index", Color::Pink),
];

/// `Elf64_Shdr`, in declaration order
pub const SECTION_MEMBERS: [MemberSpec; 10] = [
    member(4, "sh_name", "Section name, index into the string table", Color::Orange),
    member(4, "sh_type", "Section type", Color::DarkBlue),
    member(8, "sh_flags", "Section flags", Color::DarkGreen),
    member(8, "sh_addr", "Section virtual address at execution", Color::Red),
    member(8, "sh_offset", "Section file offset", Color::DarkRed),
    member(8, "sh_size", "Section size in bytes", Color::Magenta),
    member(4, "sh_link", "Link to another section", Color::Orange),
    member(4, "sh_info", "Additional section information", Color::LightGray),
    member(8, "sh_addralign", "Section alignment", Color::Blue),
    member(8, "sh_entsize", "Entry size if section holds table", Color::LightBlue),
];
