//! Configuration module for `degree-audit`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for plan TOML files
    #[serde(default)]
    pub plans_dir: String,
    /// Directory for audit CSV and report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override plans directory
    pub plans_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$DEGREE_AUDIT` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/degreeaudit`
    /// - macOS: `~/Library/Application Support/degreeaudit`
    /// - Windows: `%APPDATA%\degreeaudit`
    #[must_use]
    pub fn get_degreeaudit_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreeaudit")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration to ensure that newly added fields are
    /// populated with their default values. Only fields that are empty in the
    /// current config and non-empty in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.plans_dir.is_empty() && !defaults.paths.plans_dir.is_empty() {
            self.paths.plans_dir.clone_from(&defaults.paths.plans_dir);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values in the overrides struct will replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(plans_dir) = &overrides.plans_dir {
            self.paths.plans_dir.clone_from(plans_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_degreeaudit_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DEGREE_AUDIT` variable in a string
    ///
    /// Replaces occurrences of `$DEGREE_AUDIT` with the actual degreeaudit
    /// directory path, so configuration values can reference the config
    /// directory dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$DEGREE_AUDIT") {
            let audit_dir = Self::get_degreeaudit_dir();
            value.replace("$DEGREE_AUDIT", audit_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$DEGREE_AUDIT`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.plans_dir = Self::expand_variables(&config.paths.plans_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// Handles several scenarios:
    /// - If config file exists: loads from file, merges missing fields from defaults, saves updated config
    /// - If config file doesn't exist (first run): creates config directory if needed, loads defaults, saves to file
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file. The config directory will be created if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Remove the config file, resetting to defaults on next load
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `plans_dir`, `reports_dir`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" | "logging.level" => Some(self.logging.level.clone()),
            "file" | "logging.file" => Some(self.logging.file.clone()),
            "verbose" | "logging.verbose" => Some(self.logging.verbose.to_string()),
            "plans_dir" | "paths.plans_dir" => Some(self.paths.plans_dir.clone()),
            "reports_dir" | "paths.reports_dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error message for unknown keys or values that fail to parse
    /// (e.g. a non-boolean `verbose`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" | "logging.level" => {
                if crate::logger::Level::parse(value).is_none() {
                    return Err(format!(
                        "Invalid log level '{value}' (expected error|warn|info|debug)"
                    ));
                }
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" | "logging.file" => self.logging.file = Self::expand_variables(value),
            "verbose" | "logging.verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean '{value}' for verbose"))?;
            }
            "plans_dir" | "paths.plans_dir" => {
                self.paths.plans_dir = Self::expand_variables(value);
            }
            "reports_dir" | "paths.reports_dir" => {
                self.paths.reports_dir = Self::expand_variables(value);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error message for unknown keys.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        let default_value = defaults
            .get(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        self.set(key, &default_value)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "level = {}", self.logging.level)?;
        writeln!(f, "file = {}", self.logging.file)?;
        writeln!(f, "verbose = {}", self.logging.verbose)?;
        writeln!(f)?;
        writeln!(f, "[paths]")?;
        writeln!(f, "plans_dir = {}", self.paths.plans_dir)?;
        writeln!(f, "reports_dir = {}", self.paths.reports_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(!config.paths.plans_dir.is_empty());
        assert!(!config.paths.reports_dir.is_empty());
    }

    #[test]
    fn expand_replaces_variable() {
        let expanded = Config::expand_variables("$DEGREE_AUDIT/plans");
        assert!(!expanded.contains("$DEGREE_AUDIT"));
        assert!(expanded.ends_with("/plans"));
    }

    #[test]
    fn set_rejects_bad_level() {
        let mut config = Config::from_defaults();
        assert!(config.set("level", "loud").is_err());
        assert!(config.set("level", "info").is_ok());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn unset_restores_default() {
        let defaults = Config::from_defaults();
        let mut config = Config::from_defaults();
        config.set("reports_dir", "/tmp/elsewhere").expect("set");
        config.unset("reports_dir", &defaults).expect("unset");
        assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = Config::from_defaults();
        assert!(config.get("nope").is_none());
        assert!(config.set("nope", "x").is_err());
    }
}
