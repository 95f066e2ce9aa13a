//! Application paths for config and credentials.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Name of the credentials file looked up in the home directory.
pub const EDGERC_FILE_NAME: &str = ".edgerc";

/// Application paths.
pub struct AppPaths {
    /// Configuration directory.
    pub config: PathBuf,
    /// Home directory, when one can be determined.
    pub home: Option<PathBuf>,
}

impl AppPaths {
    /// Create paths for the netlist application.
    #[must_use]
    pub fn new() -> Self {
        let home = BaseDirs::new().map(|d| d.home_dir().to_path_buf());

        let config = ProjectDirs::from("com", "akamai", "netlist").map_or_else(
            || {
                home.clone()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config/netlist")
            },
            |proj_dirs| proj_dirs.config_dir().to_path_buf(),
        );

        Self { config, home }
    }

    /// Path to the TOML settings file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.toml")
    }

    /// Path to the auto-discovered `.edgerc`.
    #[must_use]
    pub fn default_edgerc(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(EDGERC_FILE_NAME))
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
