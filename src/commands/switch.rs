use anyhow::{bail, Result};
use project_resolver::directory::ProjectDirectory;

use super::Store;

pub fn cmd_use(name: &str) -> Result<()> {
    use_project(&mut Store::open()?, name)
}

/// Make `name` (a project or an alias) the default project.
pub fn use_project(store: &mut Store, name: &str) -> Result<()> {
    if !store.config.aliases.contains_key(name) {
        if let Err(e) = store.directory.check_exists(name) {
            bail!("cannot use {name}: {e}");
        }
    }
    store.config.default_project = Some(name.to_string());
    store.save()?;
    eprintln!("Now using project {name}");
    Ok(())
}
