//! Core domain types for Mastermind.

use serde::{Deserialize, Serialize};

/// Number of positions in a code.
pub const CODE_LENGTH: usize = 4;

/// A color from the solution palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString)]
pub enum Color {
    /// Red (`r`).
    #[serde(rename = "r")]
    #[strum(serialize = "r")]
    Red,
    /// Green (`g`).
    #[serde(rename = "g")]
    #[strum(serialize = "g")]
    Green,
    /// Blue (`b`).
    #[serde(rename = "b")]
    #[strum(serialize = "b")]
    Blue,
    /// Yellow (`y`).
    #[serde(rename = "y")]
    #[strum(serialize = "y")]
    Yellow,
    /// Orange (`o`).
    #[serde(rename = "o")]
    #[strum(serialize = "o")]
    Orange,
}

impl Color {
    /// All 5 solution colors.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
    ];

    /// Wire symbol for this color.
    pub fn symbol(self) -> &'static str {
        match self {
            Color::Red => "r",
            Color::Green => "g",
            Color::Blue => "b",
            Color::Yellow => "y",
            Color::Orange => "o",
        }
    }

    /// Display glyph for this color.
    pub fn glyph(self) -> &'static str {
        match self {
            Color::Red => "🔴",
            Color::Green => "🟢",
            Color::Blue => "🔵",
            Color::Yellow => "🟡",
            Color::Orange => "🟠",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A feedback peg.
///
/// Pegs share the display palette with colors but are never valid
/// player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString)]
pub enum Peg {
    /// Right color, right position (`bl`).
    #[serde(rename = "bl")]
    #[strum(serialize = "bl")]
    Exact,
    /// Right color, wrong position (`wh`).
    #[serde(rename = "wh")]
    #[strum(serialize = "wh")]
    Present,
}

impl Peg {
    /// Wire symbol for this peg.
    pub fn symbol(self) -> &'static str {
        match self {
            Peg::Exact => "bl",
            Peg::Present => "wh",
        }
    }

    /// Display glyph for this peg.
    pub fn glyph(self) -> &'static str {
        match self {
            Peg::Exact => "⚫",
            Peg::Present => "⚪",
        }
    }
}

/// An ordered sequence of exactly [`CODE_LENGTH`] colors.
///
/// Used for both hidden solutions and player guesses. The wire form
/// is the comma-joined symbols, e.g. `r,g,b,y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    colors: [Color; CODE_LENGTH],
}

impl Code {
    /// Creates a code from its colors.
    pub fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self { colors }
    }

    /// Returns the colors in position order.
    pub fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.colors
    }

    /// Renders the code as glyphs joined by `separator`.
    pub fn glyphs(&self, separator: &str) -> String {
        self.colors
            .iter()
            .map(|c| c.glyph())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Counts occurrences of `color` in the code.
    pub fn count(&self, color: Color) -> usize {
        self.colors.iter().filter(|c| **c == color).count()
    }
}

impl From<[Color; CODE_LENGTH]> for Code {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self::new(colors)
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbols: Vec<&str> = self.colors.iter().map(|c| c.symbol()).collect();
        write!(f, "{}", symbols.join(","))
    }
}
