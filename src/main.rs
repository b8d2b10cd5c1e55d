mod config;
mod handlers;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use hoststate::Requirement;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hoststate", version, about = "Classify inventory host snapshots")]
struct Cli {
    /// Host snapshot JSON (`-` reads stdin)
    #[arg(long, short = 'f', global = true, env = config::SNAPSHOT_ENV)]
    snapshot: Option<PathBuf>,
    /// Log filter, e.g. "debug"
    #[arg(long, global = true, env = config::LOG_ENV)]
    log: Option<String>,
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// List every host with its state
    List {
        #[arg(long)]
        json: bool,
    },
    /// Explain each classification of a host
    Why {
        host: String,
        /// Require exact uuid or hostname (no prefix matching)
        #[arg(long)]
        strict: bool,
    },
    /// Exit non-zero unless the host meets every requirement
    Check {
        host: String,
        #[arg(long, short = 'r', value_enum, required = true)]
        require: Vec<Requirement>,
        /// Require exact uuid or hostname (no prefix matching)
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.snapshot, cli.log, cli.no_color);
    config.apply();
    logging::init(&config.log_filter, config.color)?;

    match cli.command {
        Commands::List { json } => handlers::list::handle(&config, json),
        Commands::Why { host, strict } => handlers::why::handle(&config, &host, strict),
        Commands::Check {
            host,
            require,
            strict,
        } => handlers::check::handle(&config, &host, &require, strict),
    }
}
