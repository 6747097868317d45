use anyhow::Result;

use super::Store;

pub fn cmd_create(names: &[String]) -> Result<()> {
    create_projects(&Store::open()?, names)
}

pub fn create_projects(store: &Store, names: &[String]) -> Result<()> {
    for name in names {
        store.directory.create(name)?;
        println!("{name}");
    }
    Ok(())
}
