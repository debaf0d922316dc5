//! Merging offset-keyed descriptors into one linear, gap-filled layout

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::OverlapPolicy;
use crate::error::{FieldviewError, Result};
use crate::field::FieldDescriptor;

/// Descriptors collected from several sources, ordered by start offset.
///
/// At most one descriptor is held per start offset; which one survives a
/// collision is decided by the `OverlapPolicy`.
#[derive(Debug)]
pub struct OffsetMap {
    policy: OverlapPolicy,
    entries: BTreeMap<u64, FieldDescriptor>,
}

impl OffsetMap {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            policy,
            entries: BTreeMap::new(),
        }
    }

    /// Add a descriptor starting at `offset`. Zero-size descriptors are
    /// ignored so they can never displace a real one.
    pub fn insert(&mut self, offset: u64, field: FieldDescriptor) -> Result<()> {
        if field.size == 0 {
            debug!(offset, name = %field.name, "Skipping zero-size descriptor");
            return Ok(());
        }
        match self.entries.entry(offset) {
            Entry::Vacant(slot) => {
                slot.insert(field);
            }
            Entry::Occupied(mut slot) => match self.policy {
                OverlapPolicy::FirstWins => {
                    warn!(
                        offset,
                        kept = %slot.get().name,
                        dropped = %field.name,
                        "Descriptors share a start offset, keeping the first"
                    );
                }
                OverlapPolicy::LastWins => {
                    warn!(
                        offset,
                        kept = %field.name,
                        dropped = %slot.get().name,
                        "Descriptors share a start offset, keeping the last"
                    );
                    slot.insert(field);
                }
                OverlapPolicy::Reject => {
                    return Err(FieldviewError::OverlappingFields {
                        offset,
                        existing: slot.get().name.clone(),
                        incoming: field.name,
                    });
                }
            },
        }
        Ok(())
    }

    pub fn extend<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = (u64, FieldDescriptor)>,
    {
        for (offset, field) in fields {
            self.insert(offset, field)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk the descriptors in offset order and produce a sequence that
    /// partitions `[0, total_len)` exactly.
    ///
    /// Holes become `"unknown"` gaps. A descriptor starting inside one
    /// already placed is dropped (or rejected under `Reject`). Descriptors
    /// reaching past `total_len` are clamped to it.
    pub fn into_layout(self, total_len: u64) -> Result<Vec<FieldDescriptor>> {
        let mut fields = Vec::with_capacity(self.entries.len() * 2 + 1);
        let mut cursor = 0u64;
        let mut last_name = String::new();

        for (offset, mut field) in self.entries {
            if offset < cursor {
                if self.policy == OverlapPolicy::Reject {
                    return Err(FieldviewError::OverlappingFields {
                        offset,
                        existing: last_name,
                        incoming: field.name,
                    });
                }
                warn!(
                    offset,
                    size = field.size,
                    name = %field.name,
                    covered_by = %last_name,
                    "Dropping descriptor that starts inside an earlier one"
                );
                continue;
            }
            if offset >= total_len {
                warn!(offset, name = %field.name, "Dropping descriptor past end of buffer");
                continue;
            }
            if offset > cursor {
                fields.push(FieldDescriptor::gap(offset - cursor));
            }
            let available = total_len - offset;
            if field.size > available {
                warn!(
                    offset,
                    size = field.size,
                    available,
                    name = %field.name,
                    "Clamping descriptor to end of buffer"
                );
                field.size = available;
            }
            cursor = offset + field.size;
            last_name = field.name.clone();
            fields.push(field);
        }

        if cursor < total_len {
            fields.push(FieldDescriptor::gap(total_len - cursor));
        }

        fields.retain(|f| f.size > 0);
        Ok(fields)
    }
}
