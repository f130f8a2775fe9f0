//! udigit CLI - fold, map, and parse decimal digits from any Unicode script.
//!
//! Text arguments are processed one per output line. With no text arguments, `fold`
//! and `map` read standard input line by line instead.
//!
//! Logging goes to stderr and is filtered by `RUST_LOG` (default `warn`).

mod commands;

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::ParseOptions;
use udigit_config::UdigitConfig;

#[derive(Parser)]
#[command(name = "udigit", version)]
#[command(about = "Fold, map, and parse decimal digits from any Unicode script")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every decimal digit to ASCII 0-9
    Fold {
        /// Text to fold (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Rewrite every decimal digit into the decade of another script
    Map {
        /// Digit character or script name (e.g. "٣", "tamil", "Deva")
        #[arg(long)]
        to: Option<String>,
        /// Text to map (reads stdin lines when omitted)
        text: Vec<String>,
    },
    /// Show the digit value of each character
    Value {
        text: String,
    },
    /// Parse an integer written with digits from any script
    Parse {
        text: String,
        /// Numeric base, 2 through 36
        #[arg(long)]
        radix: Option<u32>,
        /// Bit width of the result: 0, 8, 16, 32, or 64
        #[arg(long)]
        bits: Option<u32>,
        /// Parse as an unsigned integer
        #[arg(long, conflicts_with = "signed")]
        unsigned: bool,
        /// Parse as a signed integer, overriding `unsigned = true` in the config
        #[arg(long)]
        signed: bool,
    },
    /// List every decimal digit decade and its script
    Decades,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    // A broken config file is logged by the loader; fall back to defaults.
    let config = UdigitConfig::load().ok().flatten().unwrap_or_default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Fold { text } => {
            tracing::debug!(args = text.len(), "fold");
            commands::fold(&text, stdin.lock(), &mut out)?;
        }
        Commands::Map { to, text } => {
            tracing::debug!(args = text.len(), "map");
            commands::map(to.as_deref(), &config, &text, stdin.lock(), &mut out)?;
        }
        Commands::Value { text } => commands::value(&text, &mut out)?,
        Commands::Parse {
            text,
            radix,
            bits,
            unsigned,
            signed,
        } => {
            let options = ParseOptions {
                radix,
                bits,
                unsigned: (unsigned || signed).then_some(unsigned),
            };
            commands::parse(&text, options, &config, &mut out)?;
        }
        Commands::Decades => commands::list_decades(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
