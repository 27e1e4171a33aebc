//! Built-in profile tables
//!
//! Each entry bundles the markup templates, column defaults and alias rules
//! for one CSS framework. The tables are plain static data; they are
//! compiled into [`Profile`](crate::profiles::Profile) values by the
//! profile registry.

/// Placeholder in `col_open` replaced by the resolved column classes
pub const STYLE_PLACEHOLDER: &str = "{value}";

/// Name of the profile used when no configuration is given
pub const DEFAULT_PROFILE: &str = "bootstrap";

/// Name of the all-empty profile
pub const BLANK_PROFILE: &str = "blank";

/// Static description of a built-in profile
#[derive(Debug, Clone, Copy)]
pub struct ProfileSpec {
    pub name: &'static str,
    pub row_open: &'static str,
    pub row_close: &'static str,
    pub col_open: &'static str,
    pub col_close: &'static str,
    pub default_col: &'static str,
    pub first_col: &'static str,
    pub last_col: &'static str,
    /// Ordered (pattern, replacement) pairs
    pub aliases: &'static [(&'static str, &'static str)],
}

pub static BLANK: ProfileSpec = ProfileSpec {
    name: BLANK_PROFILE,
    row_open: "",
    row_close: "",
    col_open: "",
    col_close: "",
    default_col: "",
    first_col: "",
    last_col: "",
    aliases: &[],
};

/// Twitter Bootstrap 2 fixed grid (`span*`/`offset*`)
pub static BOOTSTRAP: ProfileSpec = ProfileSpec {
    name: "bootstrap",
    row_open: r#"<div class="row">"#,
    row_close: "</div>",
    col_open: r#"<div class="{value}">"#,
    col_close: "</div>",
    default_col: "span1",
    first_col: "first",
    last_col: "last",
    aliases: &[
        (r"\b(\d+):(\d+)\b", "span${1} offset${2}"),
        (r"\b(\d+)\b", "span${1}"),
    ],
};

/// Bootstrap 3 medium-device grid
pub static BOOTSTRAP3: ProfileSpec = ProfileSpec {
    name: "bootstrap3",
    row_open: r#"<div class="row">"#,
    row_close: "</div>",
    col_open: r#"<div class="{value}">"#,
    col_close: "</div>",
    default_col: "col-md-1",
    first_col: "",
    last_col: "",
    aliases: &[
        (r"^(\d+):(\d+)$", "col-md-${1} col-md-offset-${2}"),
        (r"^(\d+)$", "col-md-${1}"),
    ],
};

/// ZURB Foundation large grid; the last column gets `end`
pub static FOUNDATION: ProfileSpec = ProfileSpec {
    name: "foundation",
    row_open: r#"<div class="row">"#,
    row_close: "</div>",
    col_open: r#"<div class="{value} columns">"#,
    col_close: "</div>",
    default_col: "large-12",
    first_col: "",
    last_col: "end",
    aliases: &[
        (r"^(\d+):(\d+)$", "large-${1} large-offset-${2}"),
        (r"^(\d+)$", "large-${1}"),
    ],
};

/// Skeleton 960 grid with spelled-out column counts
pub static SKELETON: ProfileSpec = ProfileSpec {
    name: "skeleton",
    row_open: r#"<div class="row">"#,
    row_close: "</div>",
    col_open: r#"<div class="{value} columns">"#,
    col_close: "</div>",
    default_col: "one",
    first_col: "alpha",
    last_col: "omega",
    aliases: &[
        (r"\b(\d+):(\d+)\b", "${1} offset-by-${2}"),
        (r"\b1\b", "one"),
        (r"\b2\b", "two"),
        (r"\b3\b", "three"),
        (r"\b4\b", "four"),
        (r"\b5\b", "five"),
        (r"\b6\b", "six"),
        (r"\b7\b", "seven"),
        (r"\b8\b", "eight"),
        (r"\b9\b", "nine"),
        (r"\b10\b", "ten"),
        (r"\b11\b", "eleven"),
        (r"\b12\b", "twelve"),
        (r"\b13\b", "thirteen"),
        (r"\b14\b", "fourteen"),
        (r"\b15\b", "fifteen"),
        (r"\b16\b", "sixteen"),
    ],
};

/// Every built-in profile, in listing order
pub static BUILTIN_PROFILES: &[&ProfileSpec] =
    &[&BLANK, &BOOTSTRAP, &BOOTSTRAP3, &FOUNDATION, &SKELETON];

/// Look up a built-in profile table by name (case-insensitive)
pub fn find_builtin(name: &str) -> Option<&'static ProfileSpec> {
    BUILTIN_PROFILES
        .iter()
        .copied()
        .find(|spec| spec.name.eq_ignore_ascii_case(name.trim()))
}
