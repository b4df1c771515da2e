//! Configuration management for seedling
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SEEDLING_` prefix)
//! 2. A file passed explicitly with `--config`
//! 3. `./seedling.toml`
//! 4. `~/.config/seedling/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # seedling.toml
//! templates_dir = "/opt/seedling/templates"
//! default_project_name = "my-project"
//! package_manager = "pnpm"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SeedlingError};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "seedling.toml";

/// Scaffolder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedlingConfig {
    /// Directory holding the `template-*` trees (discovered when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,

    /// Suggested project name when none is given
    pub default_project_name: String,

    /// Package manager used in the printed next steps
    pub package_manager: String,
}

impl Default for SeedlingConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            default_project_name: "vite-project".to_string(),
            package_manager: "npm".to_string(),
        }
    }
}

impl SeedlingConfig {
    /// Load configuration from the standard locations
    ///
    /// `explicit` is a file given on the command line; it must exist if set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - The explicit file does not exist
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. User config: ~/.config/seedling/config.toml
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        // 3. Local config: ./seedling.toml
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 2. Explicit file, required
        if let Some(path) = explicit {
            require_file(path)?;
            figment = figment.merge(Toml::file(path));
        }

        // 1. Environment variables
        figment = figment.merge(Env::prefixed("SEEDLING_"));

        let config: Self = figment.extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Get the XDG config path for seedling
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("seedling").join("config.toml"))
    }

    /// Install command and dev-server command for the configured package manager
    #[must_use]
    pub fn package_manager_commands(&self) -> (String, String) {
        let pm = self.package_manager.as_str();
        match pm {
            "yarn" => ("yarn".to_string(), "yarn dev".to_string()),
            _ => (format!("{pm} install"), format!("{pm} run dev")),
        }
    }
}

fn require_file(path: &Path) -> Result<()> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|e| SeedlingError::io("failed to read config", path, e))
}
