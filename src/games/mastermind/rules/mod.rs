//! Game rules for Mastermind.
//!
//! Pure functions for scoring guesses and drawing solutions. They take
//! no game state so the turn resolver can compose them freely.

pub mod score;
pub mod solution;

pub use score::{Feedback, INVALID_INPUT, score_guess};
pub use solution::random_solution;
