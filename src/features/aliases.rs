//! Alias rules for shorthand style tokens
//!
//! A profile carries an ordered list of pattern/replacement rules. They are
//! applied strictly in sequence to the same token, each rule rewriting the
//! previous rule's output:
//!
//! ```text
//! "4:1"  --(\b(\d+):(\d+)\b -> span$1 offset$2)-->  "span4 offset1"
//!        --(\b(\d+)\b       -> span$1)----------->  "span4 offset1"
//! ```
//!
//! Patterns use `regex` syntax and every non-overlapping match is replaced.
//! Replacements accept `$1`/`${1}` group references; `\1` style references
//! are translated when the rule is compiled.
//!
//! ## Example
//!
//! ```rust
//! use mdgrid::aliases::{apply_aliases, AliasRule};
//!
//! let rules = vec![
//!     AliasRule::new(r"\b(\d+):(\d+)\b", r"span\1 offset\2").unwrap(),
//!     AliasRule::new(r"\b(\d+)\b", "span$1").unwrap(),
//! ];
//! assert_eq!(apply_aliases("4:1", &rules), "span4 offset1");
//! assert_eq!(apply_aliases("3", &rules), "span3");
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::utils::error::{GridError, GridResult};

lazy_static! {
    // Backslash group reference: \1, \12
    static ref BACKSLASH_GROUP: Regex = Regex::new(r"\\(\d+)").unwrap();
}

/// A compiled pattern/replacement pair
#[derive(Debug, Clone)]
pub struct AliasRule {
    pattern: Regex,
    replacement: String,
}

impl AliasRule {
    /// Compile a rule.
    ///
    /// Fails with `InvalidAliasPattern` when `pattern` is not a valid regex.
    pub fn new(pattern: &str, replacement: &str) -> GridResult<Self> {
        let compiled =
            Regex::new(pattern).map_err(|e| GridError::invalid_pattern(pattern, e.to_string()))?;

        Ok(AliasRule {
            pattern: compiled,
            replacement: translate_group_refs(replacement),
        })
    }

    /// Source text of the pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replacement in `regex` expansion syntax
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rewrite every match in `token`
    pub fn apply(&self, token: &str) -> String {
        self.pattern
            .replace_all(token, self.replacement.as_str())
            .into_owned()
    }
}

impl PartialEq for AliasRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern() && self.replacement == other.replacement
    }
}

impl Eq for AliasRule {}

/// Compile an ordered list of raw rules, failing on the first bad pattern
pub fn compile_rules<P, R>(raw: &[(P, R)]) -> GridResult<Vec<AliasRule>>
where
    P: AsRef<str>,
    R: AsRef<str>,
{
    raw.iter()
        .map(|(pattern, replacement)| AliasRule::new(pattern.as_ref(), replacement.as_ref()))
        .collect()
}

/// Run `token` through every rule in order
pub fn apply_aliases(token: &str, rules: &[AliasRule]) -> String {
    rules
        .iter()
        .fold(token.to_string(), |current, rule| rule.apply(&current))
}

/// `\1` -> `${1}`. Braces keep a following word character out of the
/// group name (`\1px` must not become `$1px`).
fn translate_group_refs(replacement: &str) -> String {
    BACKSLASH_GROUP
        .replace_all(replacement, |caps: &Captures| format!("${{{}}}", &caps[1]))
        .into_owned()
}
