//! Strictly Mastermind - Unified CLI
//!
//! Runs the frame server or resolves turns from the command line.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use strictly_mastermind::{
    Cli, Code, Command, InvalidGuessPolicy, ServerConfig, TurnResolver, score_guess,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { port, host, config } => run_http_server(host, port, config).await,
        Command::Resolve {
            input,
            state,
            seed,
            policy,
        } => run_resolve(input, state, seed, policy),
        Command::Score { guess, solution } => run_score(guess, solution),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the HTTP frame server
#[instrument]
async fn run_http_server(
    host: Option<String>,
    port: Option<u16>,
    config: Option<PathBuf>,
) -> Result<()> {
    init_tracing("info");

    let base = match config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    let config = base.with_env_overrides()?.with_bind(host, port);

    info!(
        public_url = %config.public_url(),
        policy = %config.invalid_guess(),
        "Starting Mastermind frame server"
    );
    strictly_mastermind::serve(config).await
}

/// Resolve one turn offline
fn run_resolve(
    input: String,
    state: Option<String>,
    seed: Option<u64>,
    policy: InvalidGuessPolicy,
) -> Result<()> {
    init_tracing("warn");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = TurnResolver::new(policy).resolve_turn(&input, state.as_deref(), &mut rng);

    println!("{}", outcome.message());
    for entry in outcome.state().guesses() {
        println!("  {}", entry);
    }
    println!("state: {}", outcome.state().to_json()?);
    println!("token: {}", outcome.state().to_token()?);
    Ok(())
}

/// Score a guess against a known solution
fn run_score(guess: String, solution: String) -> Result<()> {
    init_tracing("warn");

    let guess: Code = strictly_mastermind::parse_guess(&guess)?;
    let solution: Code = solution.parse()?;
    println!("{}", score_guess(&guess, &solution));
    Ok(())
}
