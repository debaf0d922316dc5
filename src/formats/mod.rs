//! Layout sources: derived (ELF64) and fixed (Java class).

pub mod class;
pub mod elf;

use std::path::Path;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::field::FieldDescriptor;

/// How a file's field layout is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Hardcoded class file layout
    JavaClass,
    /// Layout derived from the ELF64 headers
    Elf64,
}

impl Format {
    /// Pick the format from the file name alone.
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        let name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.contains(".class") {
            Format::JavaClass
        } else {
            Format::Elf64
        }
    }

    /// Build the descriptor list for `bytes`.
    pub fn layout(self, bytes: &[u8], config: &LayoutConfig) -> Result<Vec<FieldDescriptor>> {
        match self {
            Format::JavaClass => Ok(class::java_class_layout()),
            Format::Elf64 => elf::derive_elf_layout_with(bytes, config),
        }
    }
}
