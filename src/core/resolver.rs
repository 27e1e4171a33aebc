//! Style Resolver
//!
//! Binds a class string to every column-open command of a scanned document.
//!
//! For each row, the raw argument text is split on commas and each argument
//! is run through the profile's alias rules. The Nth column of the row takes
//! the Nth resolved argument:
//!
//! ```text
//! -- row 4, , 3:1 --   =>  ["span4", "", "span3 offset1"]
//!
//! column 1 -> span4            (+ first-column class)
//! column 2 -> ""               (explicit empty argument)
//! column 3 -> span3 offset1
//! column 4 -> <default_col>    (no argument left; + last-column class)
//! ```
//!
//! Extra arguments beyond the column count are ignored.

use super::command::GridCommand;
use super::scanner::{RowFrame, ScanResult};
use crate::features::profiles::Profile;

/// Split raw row arguments on commas and collapse whitespace runs.
///
/// A row with no argument text yields an empty list; an empty slot between
/// two commas stays as an empty string.
pub fn split_row_args(raw: &str) -> Vec<String> {
    let args: Vec<String> = raw.split(',').map(collapse_whitespace).collect();
    if args.len() == 1 && args[0].is_empty() {
        return Vec::new();
    }
    args
}

fn collapse_whitespace(arg: &str) -> String {
    arg.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve a row's arguments to class strings with the profile's aliases.
///
/// Empty arguments are kept empty and never reach the alias rules.
pub fn resolve_row_styles(raw: &str, profile: &Profile) -> Vec<String> {
    split_row_args(raw)
        .into_iter()
        .map(|arg| {
            if arg.is_empty() {
                arg
            } else {
                profile.expand_alias(&arg)
            }
        })
        .collect()
}

/// Extra classes for the column at `index` of a row with `count` columns
fn edge_style(index: usize, count: usize, profile: &Profile) -> Option<String> {
    let mut classes: Vec<&str> = Vec::new();
    if index == 0 && !profile.first_col.is_empty() {
        classes.push(&profile.first_col);
    }
    if index + 1 == count && !profile.last_col.is_empty() && !classes.contains(&&*profile.last_col)
    {
        classes.push(&profile.last_col);
    }

    if classes.is_empty() {
        None
    } else {
        Some(classes.join(" "))
    }
}

/// Fill in `style` and `extra_style` on every column-open command.
///
/// Returns one frame per row, in document order, carrying the row's
/// resolved style list.
pub fn resolve_styles(scan: &mut ScanResult, profile: &Profile) -> Vec<RowFrame> {
    let mut frames = Vec::with_capacity(scan.row_columns.len());

    for (&row_line, columns) in &scan.row_columns {
        let raw = scan.row_args.get(&row_line).map_or("", String::as_str);
        let styles = resolve_row_styles(raw, profile);

        // Column N takes argument N; past the end, the profile default
        for (index, &line) in columns.iter().enumerate() {
            let column = scan
                .commands
                .get_mut(&line)
                .and_then(|cmds| cmds.iter_mut().find(|c| c.is_column_open()));

            if let Some(GridCommand::ColumnOpen { style, extra_style }) = column {
                *style = styles
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| profile.default_col.clone());
                *extra_style = edge_style(index, columns.len(), profile);
            }
        }

        let mut frame = RowFrame::new(row_line, raw);
        frame.resolved_styles = styles;
        frames.push(frame);
    }

    frames
}
