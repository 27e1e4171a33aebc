//! Data layer - built-in profile tables

pub mod profiles;

pub use profiles::{
    find_builtin, ProfileSpec, BLANK_PROFILE, BUILTIN_PROFILES, DEFAULT_PROFILE,
    STYLE_PLACEHOLDER,
};
