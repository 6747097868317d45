use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// The authority on which projects exist.
pub trait ProjectDirectory {
    /// All known project identifiers, in directory order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list(&self) -> Result<Vec<String>>;

    /// Succeeds only if `name` is a known project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project does not exist or the directory is unreadable.
    fn check_exists(&self, name: &str) -> Result<()> {
        if self.list()?.iter().any(|p| p == name) {
            Ok(())
        } else {
            bail!("project \"{name}\" not found")
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct DirectoryFile {
    projects: Vec<String>,
}

/// A project directory kept in a local TOML file: `projects = ["a", "b"]`.
///
/// File order is directory order. A missing file is an empty directory.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    path: PathBuf,
}

impl LocalDirectory {
    /// A directory backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<DirectoryFile> {
        if !self.path.exists() {
            return Ok(DirectoryFile::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read projects from {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse projects at {}", self.path.display()))
    }

    fn write(&self, file: &DirectoryFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(file).context("Failed to serialize projects")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write projects to {}", self.path.display()))
    }

    /// Append a new project.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, already exists, or the file
    /// cannot be updated.
    pub fn create(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            bail!("project name must not be empty");
        }
        let mut file = self.read()?;
        if file.projects.iter().any(|p| p == name) {
            bail!("project \"{name}\" already exists");
        }
        file.projects.push(name.to_string());
        self.write(&file)
    }

    /// Remove an existing project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project does not exist or the file cannot be
    /// updated.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut file = self.read()?;
        let before = file.projects.len();
        file.projects.retain(|p| p != name);
        if file.projects.len() == before {
            bail!("project \"{name}\" not found");
        }
        self.write(&file)
    }
}

impl ProjectDirectory for LocalDirectory {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.read()?.projects)
    }
}
