use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use colored::Colorize;

use vg_fiction::{GameConfig, GameSession, Reply, SessionState, help_line};
use vg_mechanics::{FixedOracle, Multiplier, Oracle, TriviaOracle};

/// Source of the combat multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OracleKind {
    /// Ask a trivia question before every strike.
    Trivia,
    /// Always ×1.5.
    Strong,
    /// Always ×0.5.
    Weak,
}

/// Command-line settings for a run.
pub struct Options {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub oracle: OracleKind,
    pub help_line: bool,
}

pub fn is_defeat(state: SessionState) -> bool {
    matches!(state, SessionState::Ended(ending) if ending.is_defeat())
}

fn load_config(options: &Options) -> Result<GameConfig, String> {
    let mut config = match &options.config {
        Some(path) => GameConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => GameConfig::default(),
    };
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(name) = &options.name {
        config = config.with_name(name.as_str());
    }
    if !options.help_line {
        config = config.with_help_line(false);
    }
    Ok(config)
}

/// Read a trivia answer from stdin. `None` once input is closed.
fn ask(prompt: &str) -> Option<String> {
    println!("{} {prompt}", "[Tactical AI]".cyan());
    print!("? ");
    io::stdout().flush().ok()?;
    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(0) | Err(_) => {
            tracing::debug!("answer source closed");
            None
        }
        Ok(_) => Some(answer.trim().to_string()),
    }
}

fn print_reply(reply: &Reply) {
    if reply.is_empty() {
        return;
    }
    println!("{}\n", reply.text());
    if let Some(ending) = reply.ending {
        let banner = format!("*** THE END: {ending} ***");
        if ending.is_defeat() {
            println!("{}\n", banner.red().bold());
        } else {
            println!("{}\n", banner.green().bold());
        }
    }
}

pub fn run(options: &Options) -> Result<SessionState, String> {
    let config = load_config(options)?;
    tracing::debug!(seed = config.seed, oracle = ?options.oracle, "starting session");
    let oracle: Box<dyn Oracle> = match options.oracle {
        OracleKind::Trivia => Box::new(TriviaOracle::new(config.seed, Box::new(ask))),
        OracleKind::Strong => Box::new(FixedOracle::new(Multiplier::Strong)),
        OracleKind::Weak => Box::new(FixedOracle::new(Multiplier::Weak)),
    };

    let mut session =
        GameSession::new(config, oracle).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {}", "VOIDGATE".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    print_reply(&session.start());

    let mut line = String::new();
    while session.is_running() {
        if session.config().show_help_line && session.pending().is_none() {
            println!("{}", help_line().dimmed());
        }
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        print_reply(&session.process(&line));
    }

    if session.is_running() {
        tracing::info!("input closed mid-run");
        println!("\nInput closed. Your log ends here, Captain.");
    }
    let status = session.status();
    tracing::debug!(?status, "session finished");
    Ok(status)
}
