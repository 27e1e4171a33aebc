//! Host integration
//!
//! The grid extension runs as two hook points around a host's block-level
//! renderer:
//!
//! ```text
//! lines ── preprocess ──> lines with <!--grid:...--> tags
//!                               │
//!                         host renderer
//!                               │
//! final text <── postprocess ───┘
//! ```
//!
//! `preprocess` scans marker lines, resolves column styles and replaces each
//! marker line with its intermediate tag. `postprocess` finds the tags in the
//! rendered output and expands them with the profile's templates.

use super::codec::{parse, serialize};
use super::expander::expand;
use super::resolver::resolve_styles;
use super::scanner::{scan_lines, RowFrame};
use crate::features::profiles::{resolve_user_config, Profile, ProfileConfig, ProfileRegistry};
use crate::utils::error::{GridOutput, GridResult, GridWarning};

/// The host's block-level rendering stage
pub trait Renderer {
    fn render(&self, text: &str) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, text: &str) -> String {
        self(text)
    }
}

/// Renderer that returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRenderer;

impl Renderer for PassthroughRenderer {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Result of the pre-render hook
#[derive(Debug, Clone, Default)]
pub struct PreprocessOutput {
    /// Document lines with marker lines replaced by tags; may end with one
    /// extra line closing unterminated rows
    pub lines: Vec<String>,
    /// Rows in document order with their resolved styles
    pub rows: Vec<RowFrame>,
    pub warnings: Vec<GridWarning>,
}

/// Grid extension bound to one profile
#[derive(Debug, Clone)]
pub struct GridExtension {
    profile: Profile,
}

impl GridExtension {
    pub fn new(profile: Profile) -> Self {
        GridExtension { profile }
    }

    /// Build from an optional user config resolved against `registry`
    pub fn from_config(
        config: Option<&ProfileConfig>,
        registry: &ProfileRegistry,
    ) -> GridResult<Self> {
        Ok(Self::new(resolve_user_config(config, registry)?))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Pre-render hook: replace marker lines with intermediate tags
    pub fn preprocess<S: AsRef<str>>(&self, lines: &[S]) -> PreprocessOutput {
        let mut scan = scan_lines(lines);
        let rows = resolve_styles(&mut scan, &self.profile);

        let mut output: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
        for (&index, commands) in &scan.commands {
            let tag = serialize(commands);
            match output.get_mut(index) {
                Some(line) => *line = tag,
                // Synthetic closure line
                None => output.push(tag),
            }
        }

        PreprocessOutput {
            lines: output,
            rows,
            warnings: scan.warnings,
        }
    }

    /// Post-render hook: expand every intermediate tag in `text`
    pub fn postprocess(&self, text: &str) -> GridResult<String> {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;

        for tag in parse(text)? {
            result.push_str(&text[last..tag.span.start]);
            result.push_str(&expand(&tag.commands, &self.profile));
            last = tag.span.end;
        }
        result.push_str(&text[last..]);

        Ok(result)
    }

    /// Run both hooks around `renderer`.
    ///
    /// The renderer always sees `\n` line endings. When the input uses
    /// `\r\n`, every line ending of the output is written as `\r\n`; a
    /// trailing line ending is kept either way.
    pub fn convert(&self, text: &str, renderer: &dyn Renderer) -> GridResult<GridOutput> {
        let lines: Vec<&str> = text.lines().collect();
        let pre = self.preprocess(&lines);

        let mut joined = pre.lines.join("\n");
        if text.ends_with('\n') {
            joined.push('\n');
        }

        let rendered = renderer.render(&joined);
        let mut content = self.postprocess(&rendered)?;
        if text.contains("\r\n") {
            content = content.replace("\r\n", "\n").replace('\n', "\r\n");
        }
        Ok(GridOutput::with_warnings(content, pre.warnings))
    }
}
