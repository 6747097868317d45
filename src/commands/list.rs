use anyhow::Result;
use clap::Args;
use project_resolver::{
    output::{render, OutputFormat},
    session::DirectoryConnector,
    Resolver,
};

use super::Store;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show these projects (aliases are always shown)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Output only names
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    pub output: OutputFormat,
}

pub fn cmd_list(args: &ListArgs, project: Option<String>) -> Result<()> {
    let store = Store::open()?;
    let connector = DirectoryConnector::new(&store.directory);
    let records = Resolver::new(store.config.clone(), &store.directory, &connector)
        .with_project(project)
        .resolve(&args.names)?;

    let stdout = std::io::stdout();
    render(&mut stdout.lock(), &records, args.output, args.quiet)
}
