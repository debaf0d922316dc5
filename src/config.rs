//! Configuration for layout derivation and dump rendering.
//!
//! Provides centralized configuration with sensible defaults. Every struct
//! round-trips through JSON so a driver can load overrides from a file.

use serde::{Deserialize, Serialize};

use crate::error::{FieldviewError, Result};

/// Master configuration for a fieldview run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Dump rendering configuration.
    pub dump: DumpConfig,
    /// Layout derivation configuration.
    pub layout: LayoutConfig,
}

impl ViewerConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.dump.validate()
    }
}

/// Dump rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Bytes per output row
    pub columns_per_row: usize,
    /// Report a layout/buffer length mismatch instead of truncating
    pub strict: bool,
    /// Emit terminal colors
    pub color: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            columns_per_row: 16,
            strict: false,
            color: true,
        }
    }
}

impl DumpConfig {
    pub fn validate(&self) -> Result<()> {
        if self.columns_per_row == 0 {
            return Err(FieldviewError::InvalidConfig(
                "columns_per_row must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// What to do when two descriptors claim the same bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Keep the descriptor that was emitted first.
    #[default]
    FirstWins,
    /// A later descriptor at the same offset replaces the earlier one.
    LastWins,
    /// Any collision is an error.
    Reject,
}

/// Layout derivation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Collision handling for descriptors claiming the same bytes
    pub overlap_policy: OverlapPolicy,
    /// Emit one descriptor per section covering its file contents
    pub section_contents: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::FirstWins,
            section_contents: true,
        }
    }
}
