//! Harbor configuration via `seaway.toml`
//!
//! Configuration is passed explicitly into [`crate::Harbor::with_config`];
//! nothing is read from process-wide state. [`SeawayConfig::default_toml`]
//! documents every setting.

use seaway_core::{AdmissionMode, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed next to a simulation's data.
pub const CONFIG_FILE_NAME: &str = "seaway.toml";

/// Harbor configuration loaded from `seaway.toml`.
///
/// # Example
///
/// ```toml
/// # Check per-category container limits when loading (default: true)
/// enforce_category_limits = true
///
/// # Require a vessel to be docked at the port it unloads into (default: false)
/// strict_unload = false
/// ```
///
/// Unknown keys are rejected, so a misspelt setting fails loudly instead of
/// silently falling back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeawayConfig {
    /// Enforce heavy/refrigerated/liquid limits on load.
    #[serde(default = "default_true")]
    pub enforce_category_limits: bool,
    /// Reject unloading into a port the vessel is not docked at.
    #[serde(default)]
    pub strict_unload: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SeawayConfig {
    fn default() -> Self {
        Self {
            enforce_category_limits: true,
            strict_unload: false,
        }
    }
}

impl SeawayConfig {
    /// Admission mode implied by `enforce_category_limits`
    pub fn admission(&self) -> AdmissionMode {
        if self.enforce_category_limits {
            AdmissionMode::Strict
        } else {
            AdmissionMode::TotalsOnly
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Seaway harbor configuration
#
# Check per-category container limits (heavy, refrigerated, liquid) when
# loading. When false, only total weight and container count are checked.
enforce_category_limits = true

# Require a vessel to be docked at the port it unloads into.
strict_unload = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// names a setting that does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
