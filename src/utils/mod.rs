//! Utility modules
//!
//! - Error, warning and output types
//! - Profile configuration files (feature `config`)

pub mod error;
#[cfg(feature = "config")]
pub mod files;

pub use error::{GridError, GridOutput, GridResult, GridWarning};

#[cfg(feature = "config")]
pub use files::{load_profile_config, parse_profile_config, ConfigFormat};
