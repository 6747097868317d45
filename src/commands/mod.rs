pub mod config;
pub mod create;
pub mod list;
pub mod rm;
pub mod switch;


use anyhow::Result;
use std::path::PathBuf;

use project_resolver::{
    config::{ConfigFile, ConfigSource},
    directory::LocalDirectory,
    Config, ResolveError,
};

/// The config file, its contents, and the directory it points at.
pub struct Store {
    pub file: ConfigFile,
    pub config: Config,
    pub directory: LocalDirectory,
}

impl Store {
    pub fn open() -> Result<Self> {
        Self::open_at(ConfigFile::locate()?.path)
    }

    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let file = ConfigFile { path: path.into() };
        let config = file
            .read_config()
            .map_err(ResolveError::ConfigUnavailable)?;
        let directory = LocalDirectory::new(config.directory_path(&file.path));
        Ok(Self {
            file,
            config,
            directory,
        })
    }

    pub fn save(&self) -> Result<()> {
        self.config.save_to(&self.file.path)
    }
}
