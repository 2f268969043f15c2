use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calcpad::calculator::{CalculatorState, Mode, initial_state};
use calcpad::config::Config;
use calcpad::input::{resolve, tokenize};
use calcpad::render::{RenderOptions, render};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Keypad calculator with simple and scientific modes
#[derive(Parser)]
#[command(name = "calcpad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keys to press, e.g. `2 + 3 =` or `4 +/- sqrt`. Reads key lines from stdin when omitted.
    keys: Vec<String>,

    /// Keypad to start in (simple, scientific)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the history panel
    #[arg(long)]
    history: bool,

    /// Insert thousands separators into the display
    #[arg(long)]
    group: bool,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    config.show_history |= cli.history;
    config.group_digits |= cli.group;
    let options = RenderOptions::from(&config);

    let state = initial_state(config.mode);

    if cli.keys.is_empty() {
        let state = run_interactive(state, &options)?;
        if cli.json {
            print_json(&state)?;
        }
        return Ok(());
    }

    let script = cli.keys.join(" ");
    let mut state = state;
    for key in tokenize(&script) {
        let input = resolve(key, state.mode).with_context(|| format!("Cannot press {:?}", key))?;
        state = state.apply(input);
    }

    if cli.json {
        print_json(&state)?;
    } else {
        println!("{}", render(&state, &options));
    }

    Ok(())
}

/// Read one line of keys at a time and show the display after each line.
fn run_interactive(mut state: CalculatorState, options: &RenderOptions) -> Result<CalculatorState> {
    println!("{}", render(&state, options));

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        for key in tokenize(trimmed) {
            match resolve(key, state.mode) {
                Ok(input) => state = state.apply(input),
                Err(err) => warn!("{}", err),
            }
        }

        debug!(mode = %state.mode, waiting = state.waiting_for_second_operand, "line applied");
        println!("{}", render(&state, options));
    }

    Ok(state)
}

fn print_json(state: &CalculatorState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;
    println!("{}", json);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "calcpad=debug" } else { "calcpad=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
