//! Storage for configuration and file locations.

pub mod config;
pub mod paths;

pub use config::{
    Config, ENV_CONFIG, ENV_NO_COLOR, ENV_NO_COLOR_STD, ENV_PRETTY, ResolvedConfig,
};
pub use paths::AppPaths;
