//! Core grid pipeline
//!
//! ```text
//! source lines
//!     │  scanner    marker lines -> per-line commands, row bookkeeping
//!     │  resolver   row arguments -> column classes
//!     │  codec      commands -> <!--grid:...--> tags
//!     ▼
//! host renderer
//!     │  codec      tags -> commands
//!     │  expander   commands -> profile markup
//!     ▼
//! final text
//! ```
//!
//! [`extension::GridExtension`] wires the stages into the two host hooks.

pub mod codec;
pub mod command;
pub mod expander;
pub mod extension;
pub mod resolver;
pub mod scanner;

pub use codec::{decode_payload, parse, serialize, TagMatch, TAG_CLOSE, TAG_OPEN};
pub use command::{GridCommand, LineCommands, RowArgs, RowColumns};
pub use expander::{column_classes, expand, expand_command};
pub use extension::{GridExtension, PassthroughRenderer, PreprocessOutput, Renderer};
pub use resolver::{resolve_row_styles, resolve_styles, split_row_args};
pub use scanner::{classify_line, scan_lines, Marker, MarkerScanner, RowFrame, RowStack, ScanResult};
