use anyhow::Result;
use clap::Subcommand;
use project_resolver::config::ConfigFile;

use super::Store;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set a configuration value (e.g. aliases.prod my-project)
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let store = Store::open()?;
            let pretty = toml::to_string_pretty(&store.config)?;
            print!("{pretty}");
        }
        ConfigAction::Path => {
            println!("{}", ConfigFile::locate()?.path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut store = Store::open()?;
            store.config.set_value(&key, &value)?;
            store.save()?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let store = Store::open()?;
            println!("{}", store.config.get_value(&key)?);
        }
    }
    Ok(())
}
