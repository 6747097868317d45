//! `project`: list, create, remove and switch projects.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    config::{cmd_config, ConfigAction},
    create::cmd_create,
    list::{cmd_list, ListArgs},
    rm::cmd_rm,
    switch::cmd_use,
};

const LOG_ENV: &str = "PROJECT_LOG";

#[derive(Parser)]
#[command(
    name = "project",
    about = "Manage projects",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    list: ListArgs,

    /// Project to connect to, overriding the configured default
    #[arg(long, global = true, env = "PROJECT")]
    project: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one or more projects to the directory
    Create {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Remove one or more projects from the directory
    #[command(alias = "delete")]
    Rm {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Set the default project (a project name or an alias)
    Use {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Manage project configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => cmd_list(&cli.list, cli.project)?,
        Some(Commands::Create { names }) => cmd_create(&names)?,
        Some(Commands::Rm { names }) => cmd_rm(&names)?,
        Some(Commands::Use { name }) => cmd_use(&name)?,
        Some(Commands::Config { action }) => cmd_config(action)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
