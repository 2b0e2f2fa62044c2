//! facetnav CLI library.
//!
//! Types and command handlers behind the `facetnav` binary. The binary
//! parses arguments, initializes tracing and calls [`run`].

pub mod cli;
pub mod commands;
pub mod config_file;
pub mod context;
pub mod error;
pub mod output;

use cli::{Cli, Commands};
use commands::parents::FanOut;
use context::Settings;
use error::{CliError, CliResult};
use facetnav_core::NodeId;

/// Dispatch a parsed [`Cli`] to the appropriate command handler.
pub fn run(cli: Cli) -> CliResult<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| CliError::Config(format!("cannot read working directory: {e}")))?;
    let config = config_file::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Children {
            node,
            include_start,
            sort_by_label,
            nav,
        } => {
            let settings = Settings::resolve(&nav, sort_by_label, &config)?;
            commands::children::run(node.map(NodeId), include_start, &settings)
        }

        Commands::Siblings { node, nav } => {
            let settings = Settings::resolve(&nav, false, &config)?;
            commands::siblings::run(NodeId(node), &settings)
        }

        Commands::Parents {
            node,
            fan_out,
            siblings_matching,
            nav,
        } => {
            let settings = Settings::resolve(&nav, false, &config)?;
            let fan_out = FanOut::from_flags(fan_out, siblings_matching);
            commands::parents::run(NodeId(node), &fan_out, &settings)
        }

        Commands::Info { nav } => {
            let settings = Settings::resolve(&nav, false, &config)?;
            commands::info::run(&settings)
        }
    }
}
