mod ops;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub use ops::{ConfigFile, ConfigSource};

/// Persisted client configuration: the default project and the alias table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project (or alias) targeted when no explicit project is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,
    /// Alias name to target project. A `BTreeMap` so iteration is key-sorted.
    pub aliases: BTreeMap<String, String>,
    /// Where the local project directory lives.
    pub directory: DirectoryConfig,
}

/// Location of the local project directory file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Path to `projects.toml`; defaults to a file next to `config.toml`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// The configured default, treating an empty string as unset.
    #[must_use]
    pub fn default_project(&self) -> Option<&str> {
        self.default_project.as_deref().filter(|p| !p.is_empty())
    }

    /// The project the default refers to, following one alias if the default
    /// is an alias name.
    #[must_use]
    pub fn resolved_default(&self) -> Option<&str> {
        let name = self.default_project()?;
        Some(self.aliases.get(name).map_or(name, String::as_str))
    }
}
