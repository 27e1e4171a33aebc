//! Marker Scanner
//!
//! A single-pass, stack-driven scanner that recognizes the three grid marker
//! lines inside a document and turns them into per-line grid commands.
//!
//! ```text
//! -- row 4, 4:1 --     => [row, col]
//! --                   => [endcol, col]
//! -- end --            => [endcol, endrow]
//! ```
//!
//! Markers are matched against the whole line, case-insensitively, with
//! surrounding whitespace ignored. Every other line carries no command.
//!
//! # Leniency
//!
//! Malformed marker sequences never abort a scan:
//!
//! - a separator or `-- end --` with no open row is left as plain text and
//!   reported as a warning;
//! - rows still open at end of input are closed on one synthetic trailing
//!   line, innermost row first.

mod stack;

#[cfg(test)]
mod tests;

use lazy_static::lazy_static;
use regex::Regex;

use super::command::{GridCommand, LineCommands, RowArgs, RowColumns};
use crate::utils::error::GridWarning;

pub use stack::{RowFrame, RowStack};

lazy_static! {
    // -- row <args> --
    static ref ROW_OPEN: Regex = Regex::new(
        r"(?i)^\s*--\s*row(?:\s+(.*?))?\s*--\s*$"
    ).unwrap();

    // -- end --
    static ref ROW_CLOSE: Regex = Regex::new(
        r"(?i)^\s*--\s*end\s*--\s*$"
    ).unwrap();

    // --
    static ref COLUMN_SEPARATOR: Regex = Regex::new(r"^\s*--\s*$").unwrap();
}

/// A recognized marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// Row-open marker with its (trimmed, possibly empty) argument text
    RowOpen(&'a str),
    ColumnSeparator,
    RowClose,
}

/// Classify a single line as one of the marker forms
pub fn classify_line(line: &str) -> Option<Marker<'_>> {
    if COLUMN_SEPARATOR.is_match(line) {
        return Some(Marker::ColumnSeparator);
    }
    if ROW_CLOSE.is_match(line) {
        return Some(Marker::RowClose);
    }
    ROW_OPEN.captures(line).map(|caps| {
        let args = caps.get(1).map_or("", |m| m.as_str()).trim();
        Marker::RowOpen(args)
    })
}

/// Everything the scanner learned about a document
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Row-open line -> raw argument string
    pub row_args: RowArgs,
    /// Row-open line -> column-open lines (the row-open line comes first)
    pub row_columns: RowColumns,
    /// Commands emitted per line
    pub commands: LineCommands,
    /// Index of the synthetic line holding end-of-input closures, if any.
    /// Always one past the last document line.
    pub closure_line: Option<usize>,
    /// Lenient-recovery reports
    pub warnings: Vec<GridWarning>,
}

impl ScanResult {
    /// True when the document contains no grid markers at all
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Incremental scanner state.
///
/// Feed lines in order with [`MarkerScanner::visit`], then call
/// [`MarkerScanner::finish`].
#[derive(Debug, Default)]
pub struct MarkerScanner {
    stack: RowStack,
    result: ScanResult,
}

impl MarkerScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Visit the line at `index`
    pub fn visit(&mut self, index: usize, line: &str) {
        match classify_line(line) {
            Some(Marker::RowOpen(args)) => self.open_row(index, args),
            Some(Marker::ColumnSeparator) => self.separate_column(index),
            Some(Marker::RowClose) => self.close_row(index),
            None => {}
        }
    }

    fn open_row(&mut self, index: usize, args: &str) {
        self.stack.push(RowFrame::new(index, args));
        self.result.row_args.insert(index, args.to_string());
        self.result.row_columns.insert(index, vec![index]);
        self.result
            .commands
            .insert(index, vec![GridCommand::RowOpen, GridCommand::column_open()]);
    }

    fn separate_column(&mut self, index: usize) {
        let Some(top) = self.stack.top() else {
            self.result.warnings.push(
                GridWarning::new("column separator outside of any row")
                    .at_line(index)
                    .with_suggestion("left as plain text"),
            );
            return;
        };

        if let Some(columns) = self.result.row_columns.get_mut(&top.origin_line) {
            columns.push(index);
        }
        self.result.commands.insert(
            index,
            vec![GridCommand::ColumnClose, GridCommand::column_open()],
        );
    }

    fn close_row(&mut self, index: usize) {
        if self.stack.pop().is_none() {
            self.result.warnings.push(
                GridWarning::new("row-close marker without an open row")
                    .at_line(index)
                    .with_suggestion("left as plain text"),
            );
            return;
        }

        self.result
            .commands
            .insert(index, vec![GridCommand::ColumnClose, GridCommand::RowClose]);
    }

    /// Close any unterminated rows and return the scan result.
    ///
    /// `line_count` is the number of document lines visited; the synthetic
    /// closure line, when needed, gets that index.
    pub fn finish(mut self, line_count: usize) -> ScanResult {
        if self.stack.is_empty() {
            return self.result;
        }

        let mut closures = Vec::with_capacity(self.stack.depth() * 2);
        for frame in self.stack.drain_innermost_first() {
            closures.push(GridCommand::ColumnClose);
            closures.push(GridCommand::RowClose);
            self.result.warnings.push(
                GridWarning::new("row is never closed")
                    .at_line(frame.origin_line)
                    .with_suggestion("closed at end of document"),
            );
        }

        self.result.commands.insert(line_count, closures);
        self.result.closure_line = Some(line_count);
        self.result
    }
}

/// Scan a whole document in one left-to-right pass
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> ScanResult {
    let mut scanner = MarkerScanner::new();
    for (index, line) in lines.iter().enumerate() {
        scanner.visit(index, line.as_ref());
    }
    scanner.finish(lines.len())
}
