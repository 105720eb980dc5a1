use std::path::{Path, PathBuf};

use crate::error::{BoxChartError, Result};

use super::Config;
use super::validation::validate_version;

/// Result of loading a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// File the configuration came from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".boxchart.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for boxchart.
    ///
    /// - Windows: `%APPDATA%\boxchart`
    /// - macOS: `~/Library/Application Support/boxchart`
    /// - Linux: `~/.config/boxchart` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "boxchart")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.boxchart.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Parses TOML content and checks the version.
    ///
    /// # Errors
    /// Returns `TomlParse` for malformed TOML and `Config` for an unsupported version.
    pub fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.exists(&local_path)
        {
            return self.load_from_path(&local_path);
        }

        if let Some(user_path) = self.user_config_path()
            && self.fs.exists(&user_path)
        {
            return self.load_from_path(&user_path);
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| BoxChartError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse_config(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
