//! Chuck Norris Cipher Command Line Interface
//!
//! Usage:
//!   chucknorris                    # interactive session on stdin/stdout
//!   chucknorris encode <TEXT>      # one-shot encode
//!   chucknorris decode <LINE>      # one-shot decode
//!   chucknorris --version
//!   chucknorris --help

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chucknorris::{decode, encode, CipherError, Session};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Encode text as Chuck Norris unary run-length tokens, and back.
///
/// Without a subcommand, starts the interactive prompt:
/// type `encode`, `decode` or `exit`.
#[derive(Parser, Debug)]
#[command(name = "chucknorris")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log filter directive, overrides --verbose (e.g. "chucknorris=debug")
    #[arg(long, env = "CHUCKNORRIS_LOG", global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text (characters with codes 0-127)
    Encode {
        /// Text to encode
        text: String,
    },

    /// Validate and decode an encoded line
    Decode {
        /// Space-separated token stream, e.g. "0 0 00 0000 0 00"
        line: String,
    },
}

/// Install the stderr log subscriber.
fn init_tracing(verbose: u8, directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"))?,
        None => EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(stdin.lock(), stdout.lock())
                .run()
                .context("interactive session failed")?;
        }
        Some(Commands::Encode { text }) => {
            let encoded = encode(&text).map_err(CipherError::from)?;
            println!("{encoded}");
        }
        Some(Commands::Decode { line }) => {
            let decoded = decode(&line).map_err(CipherError::from)?;
            println!("{decoded}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.log.as_deref()) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
