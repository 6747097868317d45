use anyhow::Result;

use super::Store;

pub fn cmd_rm(names: &[String]) -> Result<()> {
    remove_projects(&mut Store::open()?, names)
}

/// Remove `names` from the directory, clearing the default if it (or the
/// alias it names) pointed at a removed project.
pub fn remove_projects(store: &mut Store, names: &[String]) -> Result<()> {
    for name in names {
        if let Err(e) = store.directory.remove(name) {
            eprintln!("Warning: {e}");
            continue;
        }
        println!("{name}");
        if store.config.resolved_default() == Some(name.as_str()) {
            let previous = store.config.default_project.take().unwrap_or_default();
            store.save()?;
            eprintln!("Cleared default project (was {previous})");
        }
    }
    Ok(())
}
