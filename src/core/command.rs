//! Grid command model shared by every pipeline stage

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::GridError;

/// A single structural instruction produced by the scanner.
///
/// `ColumnOpen` is the only variant carrying data. Its style is filled in by
/// the style resolver and left untouched afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCommand {
    RowOpen,
    RowClose,
    ColumnOpen {
        /// Resolved class token(s), possibly empty
        style: String,
        /// First/last column marking, if any
        extra_style: Option<String>,
    },
    ColumnClose,
}

impl GridCommand {
    /// An unstyled column-open command, as emitted by the scanner.
    pub fn column_open() -> Self {
        GridCommand::ColumnOpen {
            style: String::new(),
            extra_style: None,
        }
    }

    /// A column-open command with a resolved style.
    pub fn column(style: impl Into<String>, extra_style: Option<String>) -> Self {
        GridCommand::ColumnOpen {
            style: style.into(),
            extra_style,
        }
    }

    /// Name used in intermediate tags
    pub fn name(&self) -> &'static str {
        match self {
            GridCommand::RowOpen => "row",
            GridCommand::RowClose => "endrow",
            GridCommand::ColumnOpen { .. } => "col",
            GridCommand::ColumnClose => "endcol",
        }
    }

    pub fn is_column_open(&self) -> bool {
        matches!(self, GridCommand::ColumnOpen { .. })
    }
}

impl fmt::Display for GridCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridCommand::ColumnOpen { style, extra_style } => match extra_style {
                Some(extra) => write!(f, "col({}|{})", style, extra),
                None => write!(f, "col({})", style),
            },
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Parses the bare command names (`row`, `endrow`, `endcol`, `col`).
///
/// Styled column-open payloads are decoded by the codec; here `col` yields
/// an unstyled column.
impl FromStr for GridCommand {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(GridCommand::RowOpen),
            "endrow" => Ok(GridCommand::RowClose),
            "endcol" => Ok(GridCommand::ColumnClose),
            "col" => Ok(GridCommand::column_open()),
            other => Err(GridError::invalid_command(other)),
        }
    }
}

/// Commands per line index, in line order.
///
/// Within a line, vector order is left-to-right command order.
pub type LineCommands = BTreeMap<usize, Vec<GridCommand>>;

/// Row-open line -> raw argument string, in document order.
pub type RowArgs = IndexMap<usize, String>;

/// Row-open line -> column-open lines of that row, in document order.
pub type RowColumns = IndexMap<usize, Vec<usize>>;
