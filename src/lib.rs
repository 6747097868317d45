//! Resolve, alias and switch the projects a client operates against.

/// Persisted default project and alias table.
pub mod config;
/// The authority on which projects exist.
pub mod directory;
/// Table, JSON and YAML rendering of display records.
pub mod output;
/// Merges the project directory, aliases and an optional live session into
/// ordered display records.
pub mod resolve;
/// Connection options and live sessions.
pub mod session;

pub use config::Config;
pub use resolve::{resolve, DisplayRecord, ResolveError, Resolver};
