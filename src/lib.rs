//! fieldview: field-annotated binary viewer.
//!
//! A layout deriver turns a buffer into an ordered list of named, sized,
//! colored field descriptors; the dumper renders any buffer plus descriptor
//! list as a colorized hex dump with ASCII and legend panels.

/// Configuration for derivation and rendering
pub mod config;
/// Annotated hex dump rendering
pub mod dump;
pub mod error;
/// Field descriptor model
pub mod field;
/// Layout sources
pub mod formats;
/// Bounded input loading
pub mod io;
pub mod logging;
/// Terminal styling capability
pub mod paint;

pub use config::{DumpConfig, LayoutConfig, OverlapPolicy, ViewerConfig};
pub use dump::{build_rows, render_dump, DumpRow};
pub use error::{FieldviewError, Result};
pub use field::{color_for_index, Color, FieldDescriptor, Style};
pub use formats::elf::derive_elf_layout;
pub use formats::Format;
pub use paint::{AnsiPaint, Paint, PlainPaint};
