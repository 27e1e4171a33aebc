//! # mdgrid
//!
//! Row/column grid markers for Markdown, expanded into CSS framework markup.
//!
//! ## Features
//!
//! - **Plain-text markers**: `-- row 4, 4:1, 3 --`, `--` and `-- end --`
//! - **Nested rows**: rows can open inside columns; unterminated rows are
//!   closed at the end of the document with a warning
//! - **Profiles**: built-in Bootstrap, Bootstrap 3, Foundation and Skeleton
//!   templates, or any user-defined set
//! - **Aliases**: ordered regex rules turning short arguments into classes
//! - **Renderer-agnostic**: two hooks wrap any block-level Markdown renderer
//!
//! ## Usage Examples
//!
//! ### Whole document
//!
//! ```rust
//! use mdgrid::convert;
//!
//! let html = convert("-- row 6, 6 --\nleft\n--\nright\n-- end --").unwrap();
//! assert!(html.starts_with(r#"<div class="row">"#));
//! assert!(html.contains(r#"<div class="span6 first">"#));
//! assert!(html.contains(r#"<div class="span6 last">"#));
//! ```
//!
//! ### Around a host renderer
//!
//! ```rust
//! use mdgrid::{GridExtension, ProfileConfig, ProfileRegistry};
//!
//! let registry = ProfileRegistry::builtin().unwrap();
//! let config = ProfileConfig::named("foundation");
//! let ext = GridExtension::from_config(Some(&config), &registry).unwrap();
//!
//! let render = |text: &str| text.replace("hello", "<p>hello</p>");
//! let out = ext.convert("-- row 6 --\nhello\n-- end --", &render).unwrap();
//! assert!(out.content.contains(r#"<div class="large-6 end columns">"#));
//! assert!(out.content.contains("<p>hello</p>"));
//! ```

/// Core grid pipeline
pub mod core;

/// Data layer - built-in profile tables
pub mod data;

/// Feature modules - aliases and profiles
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the pipeline
pub use core::{
    expand, parse, scan_lines, serialize, GridCommand, GridExtension, PassthroughRenderer,
    PreprocessOutput, Renderer, ScanResult,
};

// Re-export feature modules
pub use features::aliases;
pub use features::profiles;
pub use features::profiles::{
    get_builtin, resolve_user_config, Profile, ProfileConfig, ProfileRegistry,
};

// Re-export utilities
pub use utils::error::{GridError, GridOutput, GridResult, GridWarning};
#[cfg(feature = "config")]
pub use utils::files;

/// Convert a document with the default profile and no host renderer
pub fn convert(input: &str) -> GridResult<String> {
    Ok(convert_with_warnings(input)?.content)
}

/// Convert with the default profile, keeping the warnings
pub fn convert_with_warnings(input: &str) -> GridResult<GridOutput> {
    let registry = ProfileRegistry::builtin()?;
    GridExtension::from_config(None, &registry)?.convert(input, &PassthroughRenderer)
}

/// Convert with a named built-in profile and no host renderer
pub fn convert_with_profile(input: &str, profile: &str) -> GridResult<String> {
    let ext = GridExtension::new(get_builtin(profile)?);
    Ok(ext.convert(input, &PassthroughRenderer)?.content)
}

/// True if any line of `input` is a grid marker
pub fn has_grid_markers(input: &str) -> bool {
    input.lines().any(|line| core::classify_line(line).is_some())
}
