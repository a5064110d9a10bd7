//! Turn resolution.
//!
//! A turn is a pure transform of (prior state token, raw input) into the
//! next state and a display message. The only impurity is the random
//! draw of a new solution, and the caller supplies the generator.

use super::guess::parse_guess;
use super::rules::{INVALID_INPUT, random_solution, score_guess};
use super::state::GameState;
use super::types::Code;
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Display message for a turn that did not end the game.
pub const GUESS_PROMPT: &str = "Guess";

/// What to do with input that does not parse as a code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InvalidGuessPolicy {
    /// Leave the state untouched; no turn is consumed.
    #[default]
    Reject,
    /// Record an `invalid input` entry and consume a turn.
    Consume,
}

/// Result of resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TurnOutcome {
    /// The state to carry into the next request.
    state: GameState,
    /// Win message, invalid-input marker or the generic prompt.
    message: String,
}

impl TurnOutcome {
    /// True if this turn won the game.
    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }
}

/// Resolves turns according to an [`InvalidGuessPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnResolver {
    policy: InvalidGuessPolicy,
}

impl TurnResolver {
    /// Creates a resolver with the given invalid-guess policy.
    #[instrument]
    pub fn new(policy: InvalidGuessPolicy) -> Self {
        Self { policy }
    }

    /// Returns the invalid-guess policy.
    pub fn policy(&self) -> InvalidGuessPolicy {
        self.policy
    }

    /// Resolves one turn.
    ///
    /// `prior` is the token carried by the client. A missing or
    /// undecodable token starts a new game. `rng` is only drawn from when
    /// a new solution is needed.
    #[instrument(skip(self, prior, rng), fields(policy = %self.policy))]
    pub fn resolve_turn<R: Rng + ?Sized>(
        &self,
        raw_input: &str,
        prior: Option<&str>,
        rng: &mut R,
    ) -> TurnOutcome {
        let state = GameState::decode_or_default(prior);

        match parse_guess(raw_input) {
            Ok(guess) => Self::advance(state, guess, rng),
            Err(e) => {
                debug!(error = %e, "Guess did not parse");
                self.invalid(state, rng)
            }
        }
    }

    /// Applies a well-formed guess.
    ///
    /// Without a solution (first turn, or the previous game was won) a
    /// new game is drawn and the guess is scored against it as its
    /// first turn. Only a solution carried in the prior state can be won.
    fn advance<R: Rng + ?Sized>(state: GameState, guess: Code, rng: &mut R) -> TurnOutcome {
        let carried = state.solution().is_some();
        let (state, solution) = Self::in_progress(state, rng);

        let feedback = score_guess(&guess, &solution);
        if carried && guess == solution {
            return Self::win(state, feedback.to_string(), &guess);
        }

        TurnOutcome {
            state: state.recorded(feedback.to_string()),
            message: GUESS_PROMPT.to_string(),
        }
    }

    fn win(state: GameState, entry: String, guess: &Code) -> TurnOutcome {
        let state = state.won(entry);
        info!(tries = state.counter(), "Game won");
        let message = format!(
            "You won in {} tries! {} 🎉",
            state.counter(),
            guess.glyphs("")
        );
        TurnOutcome { state, message }
    }

    /// Handles a guess that did not parse, per policy.
    fn invalid<R: Rng + ?Sized>(&self, state: GameState, rng: &mut R) -> TurnOutcome {
        match self.policy {
            InvalidGuessPolicy::Reject => TurnOutcome {
                state,
                message: INVALID_INPUT.to_string(),
            },
            InvalidGuessPolicy::Consume => {
                let (state, _) = Self::in_progress(state, rng);
                TurnOutcome {
                    state: state.recorded(INVALID_INPUT.to_string()),
                    message: GUESS_PROMPT.to_string(),
                }
            }
        }
    }

    /// Returns the game in progress, drawing a new one if there is none.
    fn in_progress<R: Rng + ?Sized>(state: GameState, rng: &mut R) -> (GameState, Code) {
        match state.solution().copied() {
            Some(solution) => (state, solution),
            None => {
                let solution = random_solution(rng);
                debug!("Drew a new solution");
                (state.next_game(solution), solution)
            }
        }
    }
}
