//! Profile Registry
//!
//! A profile is the full set of markup conventions for one CSS framework:
//! row/column templates, the default column class, first/last column
//! markers and an ordered list of alias rules. Profiles are immutable once
//! built; alias patterns are compiled exactly once, when the profile is
//! constructed.
//!
//! Profiles come from two places:
//!
//! - built-in tables (see [`crate::data::profiles`]), looked up by name;
//! - a user [`ProfileConfig`], merged over a blank profile or over a named
//!   built-in base.
//!
//! ## Example
//!
//! ```rust
//! use mdgrid::profiles::{resolve_user_config, ProfileConfig, ProfileRegistry};
//!
//! let registry = ProfileRegistry::builtin().unwrap();
//! let config = ProfileConfig {
//!     profile: Some("bootstrap".to_string()),
//!     default_col: Some("span6".to_string()),
//!     ..Default::default()
//! };
//! let profile = resolve_user_config(Some(&config), &registry).unwrap();
//! assert_eq!(profile.default_col, "span6");
//! assert_eq!(profile.row_open, r#"<div class="row">"#);
//! ```

use indexmap::IndexMap;

use crate::data::profiles::{
    find_builtin, ProfileSpec, BLANK_PROFILE, BUILTIN_PROFILES, DEFAULT_PROFILE,
    STYLE_PLACEHOLDER,
};
use crate::features::aliases::{apply_aliases, compile_rules, AliasRule};
use crate::utils::error::{GridError, GridResult};

#[cfg(feature = "config")]
use serde::Deserialize;

/// Name given to profiles built from a config without a base
pub const CUSTOM_PROFILE: &str = "custom";

/// A compiled, immutable markup profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub row_open: String,
    pub row_close: String,
    /// Column-open template; `{value}` receives the column classes
    pub col_open: String,
    pub col_close: String,
    /// Class for columns the row arguments do not cover
    pub default_col: String,
    /// Extra class for the first column of each row
    pub first_col: String,
    /// Extra class for the last column of each row
    pub last_col: String,
    /// Compiled alias rules, applied in order
    pub aliases: Vec<AliasRule>,
}

impl Profile {
    /// Profile with every template empty and no aliases
    pub fn blank() -> Self {
        Profile {
            name: BLANK_PROFILE.to_string(),
            row_open: String::new(),
            row_close: String::new(),
            col_open: String::new(),
            col_close: String::new(),
            default_col: String::new(),
            first_col: String::new(),
            last_col: String::new(),
            aliases: Vec::new(),
        }
    }

    /// Compile a static profile table
    pub fn from_spec(spec: &ProfileSpec) -> GridResult<Self> {
        Ok(Profile {
            name: spec.name.to_string(),
            row_open: spec.row_open.to_string(),
            row_close: spec.row_close.to_string(),
            col_open: spec.col_open.to_string(),
            col_close: spec.col_close.to_string(),
            default_col: spec.default_col.to_string(),
            first_col: spec.first_col.to_string(),
            last_col: spec.last_col.to_string(),
            aliases: compile_rules(spec.aliases)?,
        })
    }

    /// Expand a shorthand style token with this profile's aliases
    pub fn expand_alias(&self, token: &str) -> String {
        apply_aliases(token, &self.aliases)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::blank()
    }
}

/// Look up and compile a built-in profile by name
pub fn get_builtin(name: &str) -> GridResult<Profile> {
    let spec = find_builtin(name).ok_or_else(|| GridError::unknown_profile(name))?;
    Profile::from_spec(spec)
}

// ============================================================================
// User configuration
// ============================================================================

/// Partial profile supplied by the user.
///
/// Every field is optional. `profile` names a registered base profile; the
/// remaining fields override the base one by one. `aliases` replaces the
/// base's alias list as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct ProfileConfig {
    pub profile: Option<String>,
    pub row_open: Option<String>,
    pub row_close: Option<String>,
    pub col_open: Option<String>,
    pub col_close: Option<String>,
    pub default_col: Option<String>,
    pub first_col: Option<String>,
    pub last_col: Option<String>,
    /// Ordered (pattern, replacement) pairs
    pub aliases: Option<Vec<(String, String)>>,
}

impl ProfileConfig {
    /// Config that only selects a base profile
    pub fn named(profile: impl Into<String>) -> Self {
        ProfileConfig {
            profile: Some(profile.into()),
            ..Default::default()
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == ProfileConfig::default()
    }

    /// Write the explicitly set fields over `profile`
    fn overlay_onto(&self, profile: &mut Profile) -> GridResult<()> {
        let fields = [
            (&self.row_open, &mut profile.row_open),
            (&self.row_close, &mut profile.row_close),
            (&self.col_open, &mut profile.col_open),
            (&self.col_close, &mut profile.col_close),
            (&self.default_col, &mut profile.default_col),
            (&self.first_col, &mut profile.first_col),
            (&self.last_col, &mut profile.last_col),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }

        if let Some(ref col_open) = self.col_open {
            let placeholders = col_open.matches(STYLE_PLACEHOLDER).count();
            if !col_open.is_empty() && placeholders != 1 {
                return Err(GridError::config(format!(
                    "col_open must contain exactly one '{}' placeholder, found {} in '{}'",
                    STYLE_PLACEHOLDER, placeholders, col_open
                )));
            }
        }

        if let Some(ref aliases) = self.aliases {
            profile.aliases = compile_rules(aliases)?;
        }
        Ok(())
    }
}

/// Build the active profile from an optional user config.
///
/// - no config (or an empty one): the registry's default profile;
/// - `profile` set: that registered profile is the base, `UnknownProfile`
///   otherwise; `custom` means no base unless registered;
/// - any other set field overrides the base (a blank profile when no base
///   is named);
/// - a non-empty `col_open` must hold exactly one `{value}` placeholder.
pub fn resolve_user_config(
    config: Option<&ProfileConfig>,
    registry: &ProfileRegistry,
) -> GridResult<Profile> {
    let Some(config) = config.filter(|c| !c.is_empty()) else {
        return registry.default_profile().cloned();
    };

    // "custom" names a base-less config unless a profile was registered
    // under that name
    let base = config
        .profile
        .as_deref()
        .filter(|name| !is_custom(name) || registry.contains(name));

    let mut profile = match base {
        Some(name) => registry.get(name)?.clone(),
        None => Profile {
            name: CUSTOM_PROFILE.to_string(),
            ..Profile::blank()
        },
    };
    config.overlay_onto(&mut profile)?;
    Ok(profile)
}

// ============================================================================
// Registry
// ============================================================================

/// Read-only set of named profiles, in registration order.
///
/// Build it once at startup, register any additional profiles, then share
/// it by reference. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, Profile>,
    default_name: String,
}

impl ProfileRegistry {
    /// Empty registry whose default is the standard default profile name
    pub fn new() -> Self {
        ProfileRegistry {
            profiles: IndexMap::new(),
            default_name: DEFAULT_PROFILE.to_string(),
        }
    }

    /// Registry holding every built-in profile
    pub fn builtin() -> GridResult<Self> {
        let mut registry = Self::new();
        for spec in BUILTIN_PROFILES {
            registry.register(Profile::from_spec(spec)?);
        }
        Ok(registry)
    }

    /// Add or replace a profile, returning the one it replaced
    pub fn register(&mut self, profile: Profile) -> Option<Profile> {
        self.profiles.insert(key(&profile.name), profile)
    }

    /// Build a profile from `config` against this registry and register it
    /// under `name`
    pub fn register_config(&mut self, name: &str, config: &ProfileConfig) -> GridResult<()> {
        let mut profile = resolve_user_config(Some(config), self)?;
        profile.name = name.to_string();
        self.register(profile);
        Ok(())
    }

    /// Fetch a profile, failing with `UnknownProfile`
    pub fn get(&self, name: &str) -> GridResult<&Profile> {
        self.profiles
            .get(&key(name))
            .ok_or_else(|| GridError::unknown_profile(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(&key(name))
    }

    /// Registered names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile used when no configuration is supplied
    pub fn default_profile(&self) -> GridResult<&Profile> {
        self.get(&self.default_name)
    }

    /// Change the default profile; it must already be registered
    pub fn set_default(&mut self, name: &str) -> GridResult<()> {
        if !self.contains(name) {
            return Err(GridError::unknown_profile(name));
        }
        self.default_name = key(name);
        Ok(())
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_custom(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(CUSTOM_PROFILE)
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::builtin().unwrap()
    }

    #[test]
    fn test_all_builtins_compile() {
        let registry = registry();
        assert_eq!(registry.len(), BUILTIN_PROFILES.len());
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["blank", "bootstrap", "bootstrap3", "foundation", "skeleton"]);
    }

    #[test]
    fn test_get_builtin() {
        let profile = get_builtin("bootstrap").unwrap();
        assert_eq!(profile.expand_alias("4:1"), "span4 offset1");
        assert_eq!(profile.expand_alias("3"), "span3");

        assert_eq!(
            get_builtin("tailwind").unwrap_err(),
            GridError::unknown_profile("tailwind")
        );
    }

    #[test]
    fn test_builtin_aliases() {
        let skeleton = get_builtin("skeleton").unwrap();
        assert_eq!(skeleton.expand_alias("4:1"), "four offset-by-one");
        assert_eq!(skeleton.expand_alias("16"), "sixteen");

        let bs3 = get_builtin("bootstrap3").unwrap();
        assert_eq!(bs3.expand_alias("4:2"), "col-md-4 col-md-offset-2");
        assert_eq!(bs3.expand_alias("col-xs-6"), "col-xs-6");

        let foundation = get_builtin("foundation").unwrap();
        assert_eq!(foundation.expand_alias("6"), "large-6");
    }

    #[test]
    fn test_no_config_uses_default() {
        let registry = registry();
        let profile = resolve_user_config(None, &registry).unwrap();
        assert_eq!(profile.name, DEFAULT_PROFILE);

        let empty = ProfileConfig::default();
        let profile = resolve_user_config(Some(&empty), &registry).unwrap();
        assert_eq!(profile.name, DEFAULT_PROFILE);
    }

    #[test]
    fn test_config_without_base_starts_blank() {
        let config = ProfileConfig {
            col_open: Some(r#"<section class="{value}">"#.to_string()),
            ..Default::default()
        };
        let profile = resolve_user_config(Some(&config), &registry()).unwrap();

        assert_eq!(profile.name, CUSTOM_PROFILE);
        assert_eq!(profile.col_open, r#"<section class="{value}">"#);
        assert_eq!(profile.row_open, "");
        assert!(profile.aliases.is_empty());
    }

    #[test]
    fn test_custom_base_name_starts_blank() {
        let config = ProfileConfig {
            profile: Some("custom".to_string()),
            row_open: Some(r#"<div class="row">"#.to_string()),
            row_close: Some("</div>".to_string()),
            col_open: Some(r#"<div class="{value} column">"#.to_string()),
            col_close: Some("</div>".to_string()),
            default_col: Some("span6".to_string()),
            first_col: Some(String::new()),
            last_col: Some(String::new()),
            aliases: Some(vec![(r"\b(\d+)\b".to_string(), r"span\1".to_string())]),
        };
        let profile = resolve_user_config(Some(&config), &registry()).unwrap();

        assert_eq!(profile.name, CUSTOM_PROFILE);
        assert_eq!(profile.col_open, r#"<div class="{value} column">"#);
        assert_eq!(profile.default_col, "span6");
        assert_eq!(profile.expand_alias("4"), "span4");

        // Only the fields given; nothing leaks in from the default profile
        let bare = ProfileConfig::named("Custom");
        let profile = resolve_user_config(Some(&bare), &registry()).unwrap();
        assert_eq!(profile.row_open, "");
        assert!(profile.aliases.is_empty());
    }

    #[test]
    fn test_registered_custom_profile_wins() {
        let mut registry = registry();
        let config = ProfileConfig {
            profile: Some("bootstrap".to_string()),
            default_col: Some("span3".to_string()),
            ..Default::default()
        };
        registry.register_config("custom", &config).unwrap();

        let named = ProfileConfig::named("custom");
        let profile = resolve_user_config(Some(&named), &registry).unwrap();
        assert_eq!(profile.default_col, "span3");
        assert_eq!(profile.row_open, r#"<div class="row">"#);
    }

    #[test]
    fn test_col_open_needs_one_placeholder() {
        for template in ["<div>", r#"<div class="{value} {value}">"#] {
            let config = ProfileConfig {
                col_open: Some(template.to_string()),
                ..Default::default()
            };
            let err = resolve_user_config(Some(&config), &registry()).unwrap_err();
            assert!(matches!(err, GridError::ConfigError { .. }), "{}", template);
        }

        // Empty template means no column markup at all
        let config = ProfileConfig {
            profile: Some("bootstrap".to_string()),
            col_open: Some(String::new()),
            ..Default::default()
        };
        assert!(resolve_user_config(Some(&config), &registry()).is_ok());
    }

    #[test]
    fn test_base_then_overrides() {
        let config = ProfileConfig {
            profile: Some("Skeleton".to_string()),
            last_col: Some("omega end".to_string()),
            ..Default::default()
        };
        let profile = resolve_user_config(Some(&config), &registry()).unwrap();

        assert_eq!(profile.name, "skeleton");
        assert_eq!(profile.first_col, "alpha");
        assert_eq!(profile.last_col, "omega end");
        assert_eq!(profile.expand_alias("2"), "two");
    }

    #[test]
    fn test_aliases_replace_base_list() {
        let config = ProfileConfig {
            profile: Some("bootstrap".to_string()),
            aliases: Some(vec![(r"^w(\d+)$".to_string(), r"wide-\1".to_string())]),
            ..Default::default()
        };
        let profile = resolve_user_config(Some(&config), &registry()).unwrap();

        assert_eq!(profile.aliases.len(), 1);
        assert_eq!(profile.expand_alias("w3"), "wide-3");
        assert_eq!(profile.expand_alias("4"), "4");
    }

    #[test]
    fn test_unknown_base() {
        let err = resolve_user_config(Some(&ProfileConfig::named("tailwind")), &registry())
            .unwrap_err();
        assert!(matches!(err, GridError::UnknownProfile { .. }));
    }

    #[test]
    fn test_bad_alias_in_config() {
        let config = ProfileConfig {
            aliases: Some(vec![("(".to_string(), "x".to_string())]),
            ..Default::default()
        };
        let err = resolve_user_config(Some(&config), &registry()).unwrap_err();
        assert!(matches!(err, GridError::InvalidAliasPattern { .. }));
    }

    #[test]
    fn test_register_and_default() {
        let mut registry = registry();
        let config = ProfileConfig {
            profile: Some("bootstrap".to_string()),
            default_col: Some("span12".to_string()),
            ..Default::default()
        };
        registry.register_config("Wide", &config).unwrap();

        assert!(registry.contains("wide"));
        assert_eq!(registry.get("WIDE").unwrap().default_col, "span12");

        registry.set_default("wide").unwrap();
        assert_eq!(registry.default_profile().unwrap().name, "Wide");
        assert!(registry.set_default("nope").is_err());
    }

    #[test]
    fn test_empty_registry_has_no_default() {
        let registry = ProfileRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.default_profile(),
            Err(GridError::UnknownProfile { .. })
        ));
    }
}
