//! Player input parsing.
//!
//! Players type guesses freely ("RGBY", "r, g, b, y", "r.g.b.y"), so
//! raw input is normalized before it is split into color symbols.

use super::types::{CODE_LENGTH, Code, Color, Peg};
use std::str::FromStr;
use tracing::instrument;

/// Error produced when input does not describe a valid code.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Input did not yield exactly four symbols.
    #[display("Expected 4 colors, got {}", _0)]
    WrongLength(usize),

    /// A symbol is not in the color palette.
    #[display("Unknown color symbol {:?}", _0)]
    UnknownSymbol(String),

    /// A feedback peg symbol was used as a color.
    #[display("Feedback symbol {:?} cannot be guessed", _0)]
    FeedbackSymbol(String),
}

impl std::error::Error for GuessError {}

/// Normalizes raw player input.
///
/// Lower-cases, drops whitespace and dots, and separates exactly four
/// bare characters with commas (`rgby` becomes `r,g,b,y`).
#[instrument]
pub fn normalize_input(raw: &str) -> String {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    if cleaned.chars().count() == CODE_LENGTH {
        cleaned
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(",")
    } else {
        cleaned
    }
}

/// Parses raw player input into a code.
#[instrument]
pub fn parse_guess(raw: &str) -> Result<Code, GuessError> {
    normalize_input(raw).parse()
}

/// Parses a single symbol, rejecting peg symbols with a dedicated error.
fn parse_symbol(symbol: &str) -> Result<Color, GuessError> {
    Color::from_str(symbol).map_err(|_| {
        if Peg::from_str(symbol).is_ok() {
            GuessError::FeedbackSymbol(symbol.to_string())
        } else {
            GuessError::UnknownSymbol(symbol.to_string())
        }
    })
}

impl FromStr for Code {
    type Err = GuessError;

    /// Parses the comma-separated wire form (`r,g,b,y`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(GuessError::WrongLength(0));
        }

        let symbols: Vec<&str> = s.split(',').collect();
        if symbols.len() != CODE_LENGTH {
            return Err(GuessError::WrongLength(symbols.len()));
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, symbol) in colors.iter_mut().zip(symbols) {
            *slot = parse_symbol(symbol)?;
        }

        Ok(Code::new(colors))
    }
}
