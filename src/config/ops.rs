use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "PROJECT_CONFIG";

/// Anything that can produce a configuration snapshot.
pub trait ConfigSource {
    /// Load the persisted configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn read_config(&self) -> Result<Config>;
}

/// A TOML config file on disk.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Location of `config.toml`.
    pub path: PathBuf,
}

impl ConfigFile {
    /// The config file at its default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn locate() -> Result<Self> {
        Ok(Self { path: Config::path()? })
    }
}

impl ConfigSource for ConfigFile {
    fn read_config(&self) -> Result<Config> {
        Config::load_from(&self.path)
    }
}

impl ConfigSource for Config {
    fn read_config(&self) -> Result<Config> {
        Ok(self.clone())
    }
}

impl Config {
    /// Default config path: `$PROJECT_CONFIG` or `~/.config/project/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("project").join("config.toml"))
    }

    /// Load from `path`. A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Path of the project directory file, resolved relative to `config_path`
    /// when not configured explicitly.
    #[must_use]
    pub fn directory_path(&self, config_path: &Path) -> PathBuf {
        if let Some(path) = &self.directory.path {
            return path.clone();
        }
        config_path
            .parent()
            .map_or_else(|| PathBuf::from("projects.toml"), |dir| dir.join("projects.toml"))
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or aliases.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "default_project" => Ok(self.default_project.clone().unwrap_or_default()),
            "directory.path" => Ok(self
                .directory
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => match key.strip_prefix("aliases.") {
                Some(alias) => self
                    .aliases
                    .get(alias)
                    .cloned()
                    .with_context(|| format!("No such alias: {alias}")),
                None => anyhow::bail!("Unknown config key: {key}"),
            },
        }
    }

    /// Set a config value by dot-separated key path. An empty value clears it.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or an empty alias name.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let value = (!value.is_empty()).then(|| value.to_string());
        match key {
            "default_project" => self.default_project = value,
            "directory.path" => self.directory.path = value.map(PathBuf::from),
            _ => match key.strip_prefix("aliases.") {
                Some("") => anyhow::bail!("Alias name must not be empty"),
                Some(alias) => {
                    if let Some(target) = value {
                        self.aliases.insert(alias.to_string(), target);
                    } else {
                        self.aliases.remove(alias);
                    }
                }
                None => anyhow::bail!("Unknown config key: {key}"),
            },
        }
        Ok(())
    }
}
