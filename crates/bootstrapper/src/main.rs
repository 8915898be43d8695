#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod agent;
mod error;
mod generate;
mod guard;
mod output;
mod prelude;
mod required;
mod write;
mod writer;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Scaffold a minimal repository with an LLM agent and write it to disk"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(
        long,
        env = "BOOTSTRAPPER_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Generate a scaffold with the agent and write it to disk
    Generate(crate::generate::GenerateOptions),

    /// Write a previously saved agent result to disk
    Write(crate::write::WriteArgs),

    /// List the paths every scaffold must contain
    Required(crate::required::RequiredArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Generate(options) => crate::generate::run(options, app.global).await,
        SubCommands::Write(args) => crate::write::run(args, app.global).await,
        SubCommands::Required(args) => crate::required::run(args, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
