//! Command-line interface for strictly_mastermind.

use crate::games::mastermind::InvalidGuessPolicy;
use clap::{Parser, Subcommand};

/// Strictly Mastermind - stateless Mastermind frame server
#[derive(Parser, Debug)]
#[command(name = "strictly_mastermind")]
#[command(about = "Mastermind frame server with client-carried game state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP frame server
    Http {
        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Resolve a single turn offline and print the next state
    Resolve {
        /// Raw guess, e.g. "rgby" or "r,g,b,y"
        #[arg(short, long)]
        input: String,

        /// State token from the previous turn
        #[arg(short, long)]
        state: Option<String>,

        /// Seed for the solution generator
        #[arg(long)]
        seed: Option<u64>,

        /// Handling of guesses that do not parse (reject or consume)
        #[arg(long, default_value = "reject")]
        policy: InvalidGuessPolicy,
    },

    /// Score a guess against a known solution
    Score {
        /// Guess, e.g. "y,b,g,r"
        #[arg(short, long)]
        guess: String,

        /// Solution, e.g. "r,g,b,y"
        #[arg(short, long)]
        solution: String,
    },
}
