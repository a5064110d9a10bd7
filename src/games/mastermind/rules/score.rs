//! Peg scoring for a guess against a solution.

use super::super::{CODE_LENGTH, Code, Peg};
use tracing::instrument;

/// History entry recorded in place of feedback for an unparseable guess.
pub const INVALID_INPUT: &str = "invalid input";

/// Scored guess: the guess itself plus its pegs.
///
/// Pegs are ordered exact matches first, then present-elsewhere
/// matches, each group in guess position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Code,
    pegs: Vec<Peg>,
}

impl Feedback {
    /// Returns the scored guess.
    pub fn guess(&self) -> &Code {
        &self.guess
    }

    /// Returns the pegs in output order.
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    /// Number of right-color, right-position pegs.
    pub fn exact(&self) -> usize {
        self.pegs.iter().filter(|p| **p == Peg::Exact).count()
    }

    /// Number of right-color, wrong-position pegs.
    pub fn present(&self) -> usize {
        self.pegs.iter().filter(|p| **p == Peg::Present).count()
    }

    /// True when every position matched exactly.
    pub fn is_solved(&self) -> bool {
        self.exact() == CODE_LENGTH
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guess = self.guess.glyphs(" ");
        if self.pegs.is_empty() {
            return write!(f, "{} - None", guess);
        }
        let pegs: Vec<&str> = self.pegs.iter().map(|p| p.glyph()).collect();
        write!(f, "{} - {}", guess, pegs.join(" "))
    }
}

/// Scores `guess` against `solution`.
///
/// Two passes over per-position consumed flags. The first records exact
/// matches and consumes both sides. The second matches each remaining
/// guess position against the left-most unconsumed solution position of
/// the same color, so no position on either side is counted twice.
#[instrument]
pub fn score_guess(guess: &Code, solution: &Code) -> Feedback {
    let guess_colors = guess.colors();
    let solution_colors = solution.colors();
    let mut guess_used = [false; CODE_LENGTH];
    let mut solution_used = [false; CODE_LENGTH];
    let mut pegs = Vec::with_capacity(CODE_LENGTH);

    for i in 0..CODE_LENGTH {
        if guess_colors[i] == solution_colors[i] {
            pegs.push(Peg::Exact);
            guess_used[i] = true;
            solution_used[i] = true;
        }
    }

    for i in 0..CODE_LENGTH {
        if guess_used[i] {
            continue;
        }
        let hit = (0..CODE_LENGTH)
            .find(|&j| !solution_used[j] && solution_colors[j] == guess_colors[i]);
        if let Some(j) = hit {
            pegs.push(Peg::Present);
            guess_used[i] = true;
            solution_used[j] = true;
        }
    }

    Feedback {
        guess: *guess,
        pegs,
    }
}
