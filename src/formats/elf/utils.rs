//! Bounds-checked reads for ELF parsing

use crate::error::{FieldviewError, Result};
use crate::formats::elf::types::ElfData;

/// Trait for reading values with endianness support.
///
/// Offsets are absolute file offsets; any read that would leave the buffer
/// fails with `MalformedHeader` instead of touching memory past the end.
pub trait EndianRead {
    fn read_array<const N: usize>(&self, offset: u64) -> Result<[u8; N]>;

    fn read_u16(&self, offset: u64, data: ElfData) -> Result<u16> {
        let bytes = self.read_array::<2>(offset)?;
        Ok(match data {
            ElfData::Little => u16::from_le_bytes(bytes),
            ElfData::Big => u16::from_be_bytes(bytes),
        })
    }

    fn read_u32(&self, offset: u64, data: ElfData) -> Result<u32> {
        let bytes = self.read_array::<4>(offset)?;
        Ok(match data {
            ElfData::Little => u32::from_le_bytes(bytes),
            ElfData::Big => u32::from_be_bytes(bytes),
        })
    }

    fn read_u64(&self, offset: u64, data: ElfData) -> Result<u64> {
        let bytes = self.read_array::<8>(offset)?;
        Ok(match data {
            ElfData::Little => u64::from_le_bytes(bytes),
            ElfData::Big => u64::from_be_bytes(bytes),
        })
    }
}

impl EndianRead for [u8] {
    fn read_array<const N: usize>(&self, offset: u64) -> Result<[u8; N]> {
        let range = checked_range(offset, N as u64, self.len())?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self[range]);
        Ok(out)
    }
}

/// Convert `(offset, len)` into an in-bounds slice range.
pub fn checked_range(offset: u64, len: u64, data_len: usize) -> Result<std::ops::Range<usize>> {
    let out_of_range = || FieldviewError::MalformedHeader {
        offset,
        needed: len as usize,
        message: format!("read past end of {data_len}-byte buffer"),
    };
    let end = offset.checked_add(len).ok_or_else(out_of_range)?;
    if end > data_len as u64 {
        return Err(out_of_range());
    }
    Ok(offset as usize..end as usize)
}

/// Read a null-terminated string starting at `offset`.
///
/// A missing terminator ends the string at the buffer end. Invalid UTF-8 is
/// replaced rather than rejected since names are display-only.
pub fn read_cstring(data: &[u8], offset: u64) -> Result<String> {
    if offset >= data.len() as u64 {
        return Err(FieldviewError::MalformedHeader {
            offset,
            needed: 1,
            message: "string offset past end of buffer".to_string(),
        });
    }
    let slice = &data[offset as usize..];
    let end = memchr::memchr(0, slice).unwrap_or(slice.len());
    Ok(String::from_utf8_lossy(&slice[..end]).into_owned())
}
