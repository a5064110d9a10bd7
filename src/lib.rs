//! Strictly Mastermind library - stateless Mastermind over frame requests
//!
//! Every turn is a pure transform of the state token the client carries
//! plus the player's guess. The server keeps no game storage.
//!
//! # Architecture
//!
//! - **Games**: Mastermind types, scoring rules and the turn resolver
//! - **Frame**: request envelope, verifier seam and HTML frame rendering
//! - **Server**: axum endpoint wiring verifier, resolver and renderer
//! - **Config**: TOML configuration with environment overrides
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_mastermind::{Code, Color, GameState, InvalidGuessPolicy, TurnResolver};
//!
//! let resolver = TurnResolver::new(InvalidGuessPolicy::Reject);
//! let mut rng = StdRng::seed_from_u64(7);
//! let solution = Code::new([Color::Red, Color::Green, Color::Blue, Color::Yellow]);
//!
//! let token = GameState::with_solution(solution).to_token()?;
//! let turn = resolver.resolve_turn("y,b,g,r", Some(&token), &mut rng);
//! assert_eq!(turn.state().guesses()[0], "🟡 🔵 🟢 🔴 - ⚪ ⚪ ⚪ ⚪");
//!
//! let token = turn.state().to_token()?;
//! let turn = resolver.resolve_turn("RGBY", Some(&token), &mut rng);
//! assert!(turn.is_won());
//! assert_eq!(turn.message(), "You won in 2 tries! 🔴🟢🔵🟡 🎉");
//! # Ok::<(), strictly_mastermind::StateError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod frame;
mod games;
mod server;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, PORT_ENV, PUBLIC_URL_ENV, SEED_ENV, ServerConfig};

// Crate-level exports - Frame protocol
pub use frame::{
    ButtonAction, CastId, EnvelopeVerifier, FrameButton, FrameMessage, FrameRenderer,
    FrameRequest, FrameResponse, FrameState, GUESS_PLACEHOLDER, TrustedData, UntrustedData,
    UntrustedVerifier, VerifyError,
};

// Crate-level exports - Server
pub use server::{AppState, FrameError, router, serve};

// Crate-level exports - Game types (mastermind)
pub use games::mastermind::{
    CODE_LENGTH, Code, Color, Feedback, GUESS_PROMPT, GameState, GuessError, INVALID_INPUT,
    InvalidGuessPolicy, Peg, StateError, TurnOutcome, TurnResolver, normalize_input, parse_guess,
    random_solution, score_guess,
};
