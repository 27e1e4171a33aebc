//! Scanner regression tests

use super::*;
use crate::core::command::GridCommand::{ColumnClose, RowClose, RowOpen};

fn col() -> GridCommand {
    GridCommand::column_open()
}

#[test]
fn test_classify_markers() {
    assert_eq!(classify_line("-- row 4, 4:1 --"), Some(Marker::RowOpen("4, 4:1")));
    assert_eq!(classify_line("--row span4--"), Some(Marker::RowOpen("span4")));
    assert_eq!(classify_line("  -- ROW --  "), Some(Marker::RowOpen("")));
    assert_eq!(classify_line("--row--"), Some(Marker::RowOpen("")));
    assert_eq!(classify_line("--"), Some(Marker::ColumnSeparator));
    assert_eq!(classify_line("   --\t"), Some(Marker::ColumnSeparator));
    assert_eq!(classify_line("-- end --"), Some(Marker::RowClose));
    assert_eq!(classify_line("--END--"), Some(Marker::RowClose));
}

#[test]
fn test_classify_plain_text() {
    assert_eq!(classify_line("text"), None);
    assert_eq!(classify_line("----"), None);
    assert_eq!(classify_line("-- rowing --"), None);
    assert_eq!(classify_line("-- end of story --"), None);
    assert_eq!(classify_line("a -- row --"), None);
    assert_eq!(classify_line(""), None);
}

#[test]
fn test_single_row() {
    let lines = ["-- row 4, 4:1, 3 --", "text", "--", "more", "-- end --"];
    let result = scan_lines(&lines);

    assert_eq!(result.row_args.get(&0).map(String::as_str), Some("4, 4:1, 3"));
    assert_eq!(result.row_columns.get(&0), Some(&vec![0, 2]));
    assert_eq!(result.commands.get(&0), Some(&vec![RowOpen, col()]));
    assert_eq!(result.commands.get(&2), Some(&vec![ColumnClose, col()]));
    assert_eq!(result.commands.get(&4), Some(&vec![ColumnClose, RowClose]));
    assert!(!result.commands.contains_key(&1));
    assert!(!result.commands.contains_key(&3));
    assert_eq!(result.closure_line, None);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_nested_rows_keep_columns_apart() {
    let lines = [
        "-- row 8, 4 --",
        "-- row 4, 4 --",
        "inner a",
        "--",
        "inner b",
        "-- end --",
        "--",
        "outer b",
        "-- end --",
    ];
    let result = scan_lines(&lines);

    assert_eq!(result.row_columns.get(&0), Some(&vec![0, 6]));
    assert_eq!(result.row_columns.get(&1), Some(&vec![1, 3]));
    assert_eq!(result.row_args.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_stray_closers_are_ignored() {
    let lines = ["--", "text", "-- end --"];
    let result = scan_lines(&lines);

    assert!(result.is_empty());
    assert!(result.row_args.is_empty());
    assert_eq!(result.closure_line, None);
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.warnings[0].line, Some(0));
    assert_eq!(result.warnings[1].line, Some(2));
}

#[test]
fn test_stray_closer_after_balanced_row() {
    let lines = ["-- row --", "a", "-- end --", "-- end --"];
    let result = scan_lines(&lines);

    assert_eq!(result.commands.len(), 2);
    assert!(!result.commands.contains_key(&3));
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_unterminated_rows_closed_innermost_first() {
    let lines = ["-- row 6 --", "a", "-- row 3 --", "b"];
    let result = scan_lines(&lines);

    assert_eq!(result.closure_line, Some(4));
    assert_eq!(
        result.commands.get(&4),
        Some(&vec![ColumnClose, RowClose, ColumnClose, RowClose])
    );

    // One warning per unterminated row, innermost first
    let lines_warned: Vec<_> = result.warnings.iter().map(|w| w.line).collect();
    assert_eq!(lines_warned, vec![Some(2), Some(0)]);
}

#[test]
fn test_empty_input() {
    let lines: [&str; 0] = [];
    let result = scan_lines(&lines);

    assert!(result.is_empty());
    assert_eq!(result.closure_line, None);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_incremental_depth() {
    let mut scanner = MarkerScanner::new();
    scanner.visit(0, "-- row --");
    scanner.visit(1, "-- row --");
    assert_eq!(scanner.depth(), 2);
    scanner.visit(2, "-- end --");
    assert_eq!(scanner.depth(), 1);
    scanner.visit(3, "--");
    assert_eq!(scanner.depth(), 1);

    let result = scanner.finish(4);
    assert_eq!(result.closure_line, Some(4));
    assert_eq!(result.row_columns.get(&0), Some(&vec![0, 3]));
}

#[test]
fn test_row_stack_drain_order() {
    let mut stack = RowStack::new();
    stack.push(RowFrame::new(0, "a"));
    stack.push(RowFrame::new(5, "b"));

    assert!(stack.top().unwrap().resolved_styles.is_empty());

    let drained = stack.drain_innermost_first();
    assert_eq!(drained[0].origin_line, 5);
    assert_eq!(drained[1].origin_line, 0);
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
}
