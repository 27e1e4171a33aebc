//! Error handling for mdgrid
//!
//! This module provides a unified error type and result type for profile
//! resolution and tag expansion, plus the non-fatal warning type used to
//! report lenient recovery from malformed marker sequences.

use std::fmt;

/// mdgrid error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A named profile (or profile base) is not registered
    UnknownProfile { name: String },
    /// An alias rule pattern failed to compile
    InvalidAliasPattern { pattern: String, message: String },
    /// An intermediate tag carried a command that does not exist
    InvalidCommand { command: String },
    /// A profile file could not be parsed
    ConfigError { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::UnknownProfile { name } => {
                write!(f, "Unknown profile: '{}'", name)
            }
            GridError::InvalidAliasPattern { pattern, message } => {
                write!(f, "Invalid alias pattern '{}': {}", pattern, message)
            }
            GridError::InvalidCommand { command } => {
                write!(f, "Invalid grid command: '{}'", command)
            }
            GridError::ConfigError { message } => {
                write!(f, "Config error: {}", message)
            }
            GridError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for GridError {}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for mdgrid operations
pub type GridResult<T> = Result<T, GridError>;

// Convenience constructors for errors
impl GridError {
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        GridError::UnknownProfile { name: name.into() }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        GridError::InvalidAliasPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn invalid_command(command: impl Into<String>) -> Self {
        GridError::InvalidCommand {
            command: command.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        GridError::ConfigError {
            message: message.into(),
        }
    }
}

/// Non-fatal issue found while scanning markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWarning {
    pub message: String,
    /// Zero-based line index in the scanned document
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl GridWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for GridWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lines are reported 1-indexed
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l + 1, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Converted document with optional warnings
#[derive(Debug, Clone)]
pub struct GridOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<GridWarning>,
}

impl GridOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<GridWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
