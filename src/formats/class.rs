//! Fixed layout for Java class files.
//!
//! Class files are not derived; this is a hardcoded descriptor list sized
//! for a small class with twenty-eight 9-byte constant pool entries.

use crate::field::{color_for_index, FieldDescriptor};

/// Number of constant pool entries in the fixture.
pub const CONSTANT_POOL_ENTRIES: usize = 28;
/// Size of each constant pool entry in the fixture.
pub const CONSTANT_POOL_ENTRY_SIZE: u64 = 9;

/// The hardcoded class file descriptor list.
pub fn java_class_layout() -> Vec<FieldDescriptor> {
    let mut members: Vec<(u64, String)> = vec![
        (4, "magic".to_string()),
        (2, "minor_version".to_string()),
        (2, "major_version".to_string()),
        (2, "constant_pool_count".to_string()),
    ];
    members.extend(
        (0..CONSTANT_POOL_ENTRIES)
            .map(|i| (CONSTANT_POOL_ENTRY_SIZE, format!("constant_pool[{i}]"))),
    );
    members.extend(
        [
            (2, "access_flags"),
            (2, "this_class"),
            (2, "super_class"),
            (2, "interface_count"),
            (20, "interfaces"),
        ]
        .map(|(size, name)| (size, name.to_string())),
    );

    members
        .into_iter()
        .enumerate()
        .map(|(i, (size, name))| FieldDescriptor::new(size, name, color_for_index(i).bg))
        .collect()
}
