//! ELF64 file header parsing

use tracing::{debug, warn};

use crate::error::{FieldviewError, Result};
use crate::formats::elf::types::*;
use crate::formats::elf::utils::EndianRead;

/// Parse the fixed ELF64 header.
///
/// Only the size of the buffer is checked; magic, class and version are
/// left to the reader of the dump.
pub fn parse_header(data: &[u8]) -> Result<ElfHeader> {
    if (data.len() as u64) < EHDR_SIZE {
        return Err(FieldviewError::MalformedHeader {
            offset: 0,
            needed: EHDR_SIZE as usize,
            message: format!("buffer holds only {} bytes", data.len()),
        });
    }

    if &data[0..4] != ELF_MAGIC {
        debug!("ELF magic missing, walking header anyway");
    }

    let endian = ElfData::from_u8(data[EI_DATA]);
    let e_shoff = data.read_u64(E_SHOFF, endian)?;
    let e_shentsize = data.read_u16(E_SHENTSIZE, endian)?;
    let e_shnum = data.read_u16(E_SHNUM, endian)?;
    let e_shstrndx = data.read_u16(E_SHSTRNDX, endian)?;

    if e_shnum > 0 && u64::from(e_shentsize) != SHDR_SIZE {
        warn!(
            e_shentsize,
            expected = SHDR_SIZE,
            "Unexpected section header entry size, using the ELF64 layout"
        );
    }

    Ok(ElfHeader {
        data: endian,
        e_shoff,
        e_shentsize,
        e_shnum,
        e_shstrndx,
    })
}
