mod guess;
mod resolver;
mod rules;
mod state;
mod types;

pub use guess::{GuessError, normalize_input, parse_guess};
pub use resolver::{InvalidGuessPolicy, TurnOutcome, TurnResolver, GUESS_PROMPT};
pub use rules::{Feedback, INVALID_INPUT, random_solution, score_guess};
pub use state::{GameState, StateError};
pub use types::{CODE_LENGTH, Code, Color, Peg};
