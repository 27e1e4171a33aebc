//! Template Expander
//!
//! Turns decoded grid commands into final markup using the active profile's
//! templates. Row and column-close commands emit their template verbatim;
//! column-open commands fill the `{value}` placeholder with the column's
//! classes.

use super::command::GridCommand;
use crate::data::profiles::STYLE_PLACEHOLDER;
use crate::features::profiles::Profile;

/// Space-joined column classes, skipping empty parts
pub fn column_classes(style: &str, extra_style: Option<&str>) -> String {
    [Some(style), extra_style]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Markup for a single command
pub fn expand_command(command: &GridCommand, profile: &Profile) -> String {
    match command {
        GridCommand::RowOpen => profile.row_open.clone(),
        GridCommand::RowClose => profile.row_close.clone(),
        GridCommand::ColumnClose => profile.col_close.clone(),
        GridCommand::ColumnOpen { style, extra_style } => profile
            .col_open
            .replace(STYLE_PLACEHOLDER, &column_classes(style, extra_style.as_deref())),
    }
}

/// Markup for one tag's commands, one fragment per line.
///
/// Commands whose template is empty contribute nothing.
pub fn expand(commands: &[GridCommand], profile: &Profile) -> String {
    commands
        .iter()
        .map(|command| expand_command(command, profile))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::GridCommand::{ColumnClose, RowClose, RowOpen};
    use crate::features::profiles::get_builtin;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_classes() {
        assert_eq!(column_classes("span4", Some("first")), "span4 first");
        assert_eq!(column_classes("span4", None), "span4");
        assert_eq!(column_classes("", Some("last")), "last");
        assert_eq!(column_classes("span2", Some("")), "span2");
        assert_eq!(column_classes("", None), "");
    }

    #[test]
    fn test_expand_row_open() {
        let profile = get_builtin("bootstrap").unwrap();
        let cmds = vec![RowOpen, GridCommand::column("span4", Some("first".into()))];

        assert_eq!(
            expand(&cmds, &profile),
            "<div class=\"row\">\n<div class=\"span4 first\">"
        );
    }

    #[test]
    fn test_expand_close() {
        let profile = get_builtin("foundation").unwrap();
        assert_eq!(expand(&[ColumnClose, RowClose], &profile), "</div>\n</div>");
    }

    #[test]
    fn test_blank_profile_expands_to_nothing() {
        let profile = Profile::blank();
        let cmds = vec![RowOpen, GridCommand::column("span4", None), ColumnClose, RowClose];
        assert_eq!(expand(&cmds, &profile), "");
    }

    #[test]
    fn test_template_without_placeholder() {
        let profile = Profile {
            col_open: "<td>".to_string(),
            ..Profile::blank()
        };
        assert_eq!(expand_command(&GridCommand::column("x", None), &profile), "<td>");
    }
}
