//! Command Codec
//!
//! Resolved commands have to survive the host's block-level rendering pass.
//! Each marker line is therefore replaced by one HTML comment carrying the
//! line's commands, which renderers pass through untouched:
//!
//! ```text
//! [RowOpen, ColumnOpen("span4", "first")]  <=>  <!--grid:row;col(span4|first)-->
//! [ColumnClose, RowClose]                  <=>  <!--grid:endcol;endrow-->
//! ```
//!
//! Inside `col(...)` the style and the optional extra style are separated by
//! `|`. Characters that would break the framing (`%`, `;`, `|`, `(`, `)`,
//! `<`, `>`, line breaks) are percent-escaped, so the payload can never
//! contain the comment terminator and any style string round-trips.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

use super::command::GridCommand;
use crate::utils::error::GridResult;

/// Opening framing of an intermediate tag
pub const TAG_OPEN: &str = "<!--grid:";
/// Closing framing of an intermediate tag
pub const TAG_CLOSE: &str = "-->";

const COMMAND_SEPARATOR: char = ';';
const EXTRA_SEPARATOR: char = '|';

lazy_static! {
    // A bare tag, or a tag a renderer wrapped into its own paragraph
    static ref TAG_PATTERN: Regex = Regex::new(
        r"<p>[ \t]*<!--grid:([^>]*)-->[ \t]*</p>|<!--grid:([^>]*)-->"
    ).unwrap();
}

/// One intermediate tag found in rendered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Byte range of the whole match, paragraph wrapper included
    pub span: Range<usize>,
    pub commands: Vec<GridCommand>,
}

// ============================================================================
// Serialization
// ============================================================================

/// Encode one line's commands as an intermediate tag
pub fn serialize(commands: &[GridCommand]) -> String {
    let payload: Vec<String> = commands.iter().map(encode_command).collect();
    format!(
        "{}{}{}",
        TAG_OPEN,
        payload.join(&COMMAND_SEPARATOR.to_string()),
        TAG_CLOSE
    )
}

fn encode_command(command: &GridCommand) -> String {
    match command {
        GridCommand::ColumnOpen { style, extra_style } => {
            let mut encoded = format!("col({}", escape(style));
            if let Some(extra) = extra_style {
                encoded.push(EXTRA_SEPARATOR);
                encoded.push_str(&escape(extra));
            }
            encoded.push(')');
            encoded
        }
        other => other.name().to_string(),
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' | ';' | '|' | '(' | ')' | '<' | '>' | '\n' | '\r' => {
                escaped.push_str(&format!("%{:02X}", c as u32));
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Parsing
// ============================================================================

/// Find and decode every intermediate tag in `text`, in order.
///
/// Fails with `InvalidCommand` when a tag names an unknown command.
pub fn parse(text: &str) -> GridResult<Vec<TagMatch>> {
    TAG_PATTERN
        .captures_iter(text)
        .map(|caps| -> GridResult<TagMatch> {
            // Group 0 always exists; one of the payload groups participates
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let payload = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            Ok(TagMatch {
                span: whole,
                commands: decode_payload(payload)?,
            })
        })
        .collect()
}

/// Decode the text between `<!--grid:` and `-->`
pub fn decode_payload(payload: &str) -> GridResult<Vec<GridCommand>> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }
    payload
        .split(COMMAND_SEPARATOR)
        .map(decode_command)
        .collect()
}

fn decode_command(encoded: &str) -> GridResult<GridCommand> {
    let Some(inner) = encoded
        .strip_prefix("col(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return encoded.parse();
    };

    Ok(match inner.split_once(EXTRA_SEPARATOR) {
        Some((style, extra)) => GridCommand::column(unescape(style), Some(unescape(extra))),
        None => GridCommand::column(unescape(inner), None),
    })
}

fn unescape(value: &str) -> String {
    let mut decoded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('%') {
        decoded.push_str(&rest[..pos]);
        let code = rest
            .get(pos + 1..pos + 3)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .filter(u8::is_ascii);

        match code {
            Some(byte) => {
                decoded.push(byte as char);
                rest = &rest[pos + 3..];
            }
            // Not one of ours; keep it literally
            None => {
                decoded.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}
