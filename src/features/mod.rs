//! Feature modules
//!
//! - Alias rules rewriting row arguments into framework classes
//! - Compiled profiles, user configuration and the profile registry

pub mod aliases;
pub mod profiles;

pub use aliases::{apply_aliases, compile_rules, AliasRule};
pub use profiles::{
    get_builtin, resolve_user_config, Profile, ProfileConfig, ProfileRegistry, CUSTOM_PROFILE,
};
