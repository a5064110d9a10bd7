//! Client-carried game state and its token codec.
//!
//! The server stores nothing between turns. Each response embeds the
//! full state as a URI-encoded JSON token which the client posts back
//! with its next guess.

use super::types::Code;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete state of one game, in its wire shape.
///
/// JSON keys are `solution`, `guesses`, `counter` and `gameWon`. The
/// solution is the empty string when absent, `gameWon` is the string
/// `"true"` or `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(with = "solution_field", default)]
    solution: Option<Code>,
    #[serde(default)]
    guesses: Vec<String>,
    #[serde(default)]
    counter: u32,
    #[serde(with = "flag_field", default)]
    game_won: bool,
}

impl GameState {
    /// Creates the initial state: no solution, no guesses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-progress game with a known solution and no guesses.
    pub fn with_solution(solution: Code) -> Self {
        Self {
            solution: Some(solution),
            ..Self::default()
        }
    }

    /// Returns the hidden solution, if a game is in progress.
    pub fn solution(&self) -> Option<&Code> {
        self.solution.as_ref()
    }

    /// Returns the rendered feedback history.
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Returns the number of turns taken.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Returns true once the solution has been guessed.
    pub fn is_won(&self) -> bool {
        self.game_won
    }

    /// Starts a new game with `solution`, keeping the running counter.
    pub(super) fn next_game(self, solution: Code) -> Self {
        Self {
            solution: Some(solution),
            counter: self.counter,
            ..Self::default()
        }
    }

    /// Records a non-winning turn.
    pub(super) fn recorded(mut self, entry: String) -> Self {
        self.guesses.push(entry);
        self.counter = self.counter.saturating_add(1);
        self
    }

    /// Records the winning turn and clears the solution.
    pub(super) fn won(mut self, entry: String) -> Self {
        self.guesses.push(entry);
        self.counter = self.counter.saturating_add(1);
        self.solution = None;
        self.game_won = true;
        self
    }

    /// Serializes the state to JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the state to a URI-component-encoded token.
    #[instrument(skip(self))]
    pub fn to_token(&self) -> Result<String, StateError> {
        let json = self.to_json()?;
        Ok(urlencoding::encode(&json).into_owned())
    }

    /// Decodes a token produced by [`GameState::to_token`].
    #[instrument]
    pub fn from_token(token: &str) -> Result<Self, StateError> {
        let json = urlencoding::decode(token)?;
        let state: Self = serde_json::from_str(&json)?;
        debug!(counter = state.counter, won = state.game_won, "Decoded game state");
        Ok(state)
    }

    /// Decodes a token, falling back to the initial state.
    ///
    /// Missing, empty and undecodable tokens all start a new game. Decode
    /// failures are logged and otherwise swallowed.
    #[instrument]
    pub fn decode_or_default(token: Option<&str>) -> Self {
        match token.filter(|t| !t.is_empty()) {
            None => Self::new(),
            Some(token) => Self::from_token(token).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding undecodable game state");
                Self::new()
            }),
        }
    }
}

/// State token encode/decode error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("State error: {} at {}:{}", message, file, line)]
pub struct StateError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StateError {
    /// Creates a new state error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for StateError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for StateError {
    #[track_caller]
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::new(format!("Percent-decoding error: {}", err))
    }
}

/// `solution` as the code's wire form, `""` meaning none.
mod solution_field {
    use super::Code;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(solution: &Option<Code>, s: S) -> Result<S::Ok, S::Error> {
        match solution {
            Some(code) => s.serialize_str(&code.to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Code>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

/// `gameWon` as `"true"`/`"false"`; bare JSON booleans are accepted too.
mod flag_field {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    pub fn serialize<S: Serializer>(flag: &bool, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(if *flag { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        match Flag::deserialize(d)? {
            Flag::Bool(b) => Ok(b),
            Flag::Text(t) => match t.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "invalid gameWon flag: {other:?}"
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::Color::{Blue, Green, Red, Yellow};
    use super::*;

    #[test]
    fn test_initial_state_json() {
        let json = GameState::new().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"solution":"","guesses":[],"counter":0,"gameWon":"false"}"#
        );
    }

    #[test]
    fn test_token_is_uri_encoded() {
        let state = GameState::with_solution(Code::new([Red, Green, Blue, Yellow]));
        let token = state.to_token().unwrap();
        assert!(!token.contains('{'));
        assert!(!token.contains('"'));
        assert!(!token.contains(','));
        assert_eq!(GameState::from_token(&token).unwrap(), state);
    }

    #[test]
    fn test_decodes_source_shaped_json() {
        let raw = r#"{"solution":"r,g,b,y","guesses":["x"],"counter":1,"gameWon":"false"}"#;
        let state = GameState::from_token(&urlencoding::encode(raw)).unwrap();
        assert_eq!(state.solution().map(|c| c.to_string()).as_deref(), Some("r,g,b,y"));
        assert_eq!(state.guesses(), ["x".to_string()]);
        assert_eq!(state.counter(), 1);
        assert!(!state.is_won());
    }

    #[test]
    fn test_accepts_boolean_flag() {
        let raw = r#"{"solution":"","guesses":[],"counter":3,"gameWon":true}"#;
        let state = GameState::from_token(raw).unwrap();
        assert!(state.is_won());
    }

    #[test]
    fn test_decode_or_default_swallows_garbage() {
        assert_eq!(GameState::decode_or_default(None), GameState::new());
        assert_eq!(GameState::decode_or_default(Some("")), GameState::new());
        assert_eq!(GameState::decode_or_default(Some("%7Bnot json")), GameState::new());
        assert_eq!(GameState::decode_or_default(Some("%FF%FE")), GameState::new());
    }

    #[test]
    fn test_won_clears_solution() {
        let state = GameState::with_solution(Code::new([Red, Red, Red, Red]))
            .recorded("a".into())
            .won("b".into());
        assert!(state.solution().is_none());
        assert!(state.is_won());
        assert_eq!(state.counter(), 2);
        assert_eq!(state.counter() as usize, state.guesses().len());
    }

    #[test]
    fn test_next_game_keeps_counter() {
        let state = GameState::with_solution(Code::new([Red, Red, Red, Red]))
            .won("a".into())
            .next_game(Code::new([Blue, Blue, Blue, Blue]));
        assert_eq!(state.counter(), 1);
        assert!(state.guesses().is_empty());
        assert!(!state.is_won());
        assert_eq!(state.solution(), Some(&Code::new([Blue, Blue, Blue, Blue])));
    }
}
