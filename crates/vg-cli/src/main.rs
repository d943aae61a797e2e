//! Command-line frontend for Voidgate.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use commands::play::{OracleKind, Options};

#[derive(Parser)]
#[command(
    name = "voidgate",
    about = "Voidgate: crash-land, choose, fight, and free three worlds",
    version
)]
struct Cli {
    /// JSON config file (seed, captain_name, max_weight, show_help_line)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overriding the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Captain's name, overriding the config
    #[arg(short, long)]
    name: Option<String>,

    /// Where combat multipliers come from
    #[arg(long, value_enum, default_value_t = OracleKind::Trivia)]
    oracle: OracleKind,

    /// Do not print the command list after each turn
    #[arg(long)]
    no_help_line: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = Options {
        config: cli.config,
        seed: cli.seed,
        name: cli.name,
        oracle: cli.oracle,
        help_line: !cli.no_help_line,
    };

    match commands::play::run(&options) {
        Ok(state) if commands::play::is_defeat(state) => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
