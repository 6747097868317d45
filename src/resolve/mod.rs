use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::config::{Config, ConfigSource};
use crate::directory::ProjectDirectory;
use crate::session::{ConnectOptions, Connector};


/// One line of `project` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// Project identifier or alias name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Whether this record refers to the effective default project.
    #[serde(rename = "default", skip_serializing_if = "is_false")]
    pub is_default: bool,
    /// `alias to <target>` for aliases, empty for projects.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

impl DisplayRecord {
    fn project(name: &str, effective_default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            is_default: effective_default == Some(name),
            description: String::new(),
        }
    }

    fn alias(name: &str, target: &str, effective_default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            is_default: effective_default == Some(target),
            description: format!("alias to {target}"),
        }
    }
}

/// The failures that abort a resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The configuration could not be read.
    #[error(transparent)]
    ConfigUnavailable(anyhow::Error),
    /// A single requested project does not exist, or the directory could not
    /// be listed (`name` is `None`).
    #[error("{}", not_found_message(.name.as_deref()))]
    NotFoundOrUnavailable {
        /// The project that was looked up, if any.
        name: Option<String>,
        /// The directory failure.
        #[source]
        source: anyhow::Error,
    },
}

fn not_found_message(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("project \"{name}\" not found or unavailable"),
        None => "project directory unavailable".to_string(),
    }
}

/// Resolves display records against one configuration snapshot.
pub struct Resolver<'a, D: ?Sized, C: ?Sized> {
    config: Config,
    directory: &'a D,
    connector: &'a C,
    options: ConnectOptions,
}

impl<'a, D, C> Resolver<'a, D, C>
where
    D: ProjectDirectory + ?Sized,
    C: Connector + ?Sized,
{
    /// A resolver over an already loaded configuration.
    #[must_use]
    pub fn new(config: Config, directory: &'a D, connector: &'a C) -> Self {
        let options = ConnectOptions::from_config(&config);
        Self {
            config,
            directory,
            connector,
            options,
        }
    }

    /// Read the configuration from `source` and build a resolver over it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ConfigUnavailable`] if the configuration
    /// cannot be read.
    pub fn load<S: ConfigSource + ?Sized>(
        source: &S,
        directory: &'a D,
        connector: &'a C,
    ) -> Result<Self, ResolveError> {
        let config = source
            .read_config()
            .map_err(ResolveError::ConfigUnavailable)?;
        Ok(Self::new(config, directory, connector))
    }

    /// Request an explicit project for the live session.
    #[must_use]
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.options = self.options.with_project(project);
        self
    }

    /// Project identifiers to display, before aliases are merged in.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFoundOrUnavailable`] when a single name does
    /// not exist or the directory cannot be listed.
    pub fn candidates(&self, names: &[String]) -> Result<Vec<String>, ResolveError> {
        if let [name] = names {
            self.directory.check_exists(name).map_err(|source| {
                ResolveError::NotFoundOrUnavailable {
                    name: Some(name.clone()),
                    source,
                }
            })?;
            return Ok(vec![name.clone()]);
        }

        let projects = self
            .directory
            .list()
            .map_err(|source| ResolveError::NotFoundOrUnavailable { name: None, source })?;
        if names.is_empty() {
            return Ok(projects);
        }

        for name in names.iter().filter(|n| !projects.contains(n)) {
            debug!(project = %name, "ignoring unknown project");
        }
        Ok(projects
            .into_iter()
            .filter(|p| names.contains(p))
            .collect())
    }

    /// The project records are flagged against: the live session's active
    /// project if a session can be established, the configured default
    /// otherwise.
    #[must_use]
    pub fn effective_default(&self) -> Option<String> {
        let configured = self.config.default_project().map(str::to_string);
        match self.connector.establish(&self.options) {
            Ok(session) => Some(session.active_project().to_string()),
            Err(err) => {
                debug!(error = %err, "no live session, using configured default");
                configured
            }
        }
    }

    /// Resolve the full, ordered record list.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFoundOrUnavailable`] under the same
    /// conditions as [`Resolver::candidates`].
    pub fn resolve(&self, names: &[String]) -> Result<Vec<DisplayRecord>, ResolveError> {
        let candidates = self.candidates(names)?;
        trace!(count = candidates.len(), "resolved candidate projects");
        let effective_default = self.effective_default();
        Ok(merge(
            &candidates,
            &self.config.aliases,
            effective_default.as_deref(),
        ))
    }
}

/// Assemble project records followed by alias records in key order.
#[must_use]
pub fn merge(
    projects: &[String],
    aliases: &BTreeMap<String, String>,
    effective_default: Option<&str>,
) -> Vec<DisplayRecord> {
    projects
        .iter()
        .map(|p| DisplayRecord::project(p, effective_default))
        .chain(
            aliases
                .iter()
                .map(|(name, target)| DisplayRecord::alias(name, target, effective_default)),
        )
        .collect()
}

/// Read the configuration from `source` and resolve `names` against it.
///
/// # Errors
///
/// Returns [`ResolveError::ConfigUnavailable`] if the configuration cannot be
/// read, or [`ResolveError::NotFoundOrUnavailable`] if a single name does not
/// exist or the directory cannot be listed.
pub fn resolve<S, D, C>(
    source: &S,
    directory: &D,
    connector: &C,
    names: &[String],
) -> Result<Vec<DisplayRecord>, ResolveError>
where
    S: ConfigSource + ?Sized,
    D: ProjectDirectory + ?Sized,
    C: Connector + ?Sized,
{
    Resolver::load(source, directory, connector)?.resolve(names)
}
