use std::collections::BTreeMap;

use crate::config::Config;
use crate::directory::ProjectDirectory;

#[cfg(test)]
mod tests;

/// Why a live session could not be established.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Neither an explicit project nor a configured default was available.
    #[error("no project selected")]
    NoProject,
    /// The selected project could not be reached through the directory.
    #[error("project \"{project}\" is unavailable")]
    Unreachable {
        /// The project the session tried to bind to.
        project: String,
        /// The underlying directory failure.
        #[source]
        source: anyhow::Error,
    },
}

/// Options a session is established with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Explicitly requested project (`--project` / `$PROJECT`).
    pub project: Option<String>,
    /// Configured default, used when no explicit project is requested.
    pub default_project: Option<String>,
    /// Alias table used to resolve either of the above.
    pub aliases: BTreeMap<String, String>,
}

impl ConnectOptions {
    /// Options derived from a configuration snapshot.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            project: None,
            default_project: config.default_project().map(str::to_string),
            aliases: config.aliases.clone(),
        }
    }

    /// Request `project` explicitly; `None` and empty strings are ignored.
    #[must_use]
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project.filter(|p| !p.is_empty());
        self
    }

    /// The project a session should bind to, with one level of alias
    /// resolution applied.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        let name = self
            .project
            .as_deref()
            .or(self.default_project.as_deref())?;
        Some(self.aliases.get(name).map_or(name, String::as_str))
    }
}

/// A live connection bound to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    active_project: String,
}

impl Session {
    /// A session bound to `active_project`.
    #[must_use]
    pub fn new(active_project: impl Into<String>) -> Self {
        Self {
            active_project: active_project.into(),
        }
    }

    /// The project this session is currently bound to.
    #[must_use]
    pub fn active_project(&self) -> &str {
        &self.active_project
    }
}

/// Establishes live sessions.
pub trait Connector {
    /// Attempt to connect using `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when no session can be established.
    fn establish(&self, options: &ConnectOptions) -> Result<Session, SessionError>;
}

/// Connects by validating the selected project against a [`ProjectDirectory`].
pub struct DirectoryConnector<'a, D: ?Sized> {
    directory: &'a D,
}

impl<'a, D: ProjectDirectory + ?Sized> DirectoryConnector<'a, D> {
    /// A connector backed by `directory`.
    #[must_use]
    pub const fn new(directory: &'a D) -> Self {
        Self { directory }
    }
}

impl<D: ProjectDirectory + ?Sized> Connector for DirectoryConnector<'_, D> {
    fn establish(&self, options: &ConnectOptions) -> Result<Session, SessionError> {
        let project = options.target().ok_or(SessionError::NoProject)?;
        self.directory
            .check_exists(project)
            .map_err(|source| SessionError::Unreachable {
                project: project.to_string(),
                source,
            })?;
        Ok(Session::new(project))
    }
}
