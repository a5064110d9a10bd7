//! Tests for turn resolution across the state token boundary.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_mastermind::{
    Code, GUESS_PROMPT, GameState, INVALID_INPUT, InvalidGuessPolicy, TurnOutcome, TurnResolver,
    random_solution,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn token_for(solution: &str) -> String {
    let solution: Code = solution.parse().expect("valid code");
    GameState::with_solution(solution)
        .to_token()
        .expect("encodable state")
}

fn next(resolver: &TurnResolver, outcome: &TurnOutcome, input: &str, rng: &mut StdRng) -> TurnOutcome {
    let token = outcome.state().to_token().expect("encodable state");
    resolver.resolve_turn(input, Some(&token), rng)
}

#[test]
fn test_first_turn_draws_solution() {
    let resolver = TurnResolver::default();
    let outcome = resolver.resolve_turn("o,o,o,o", None, &mut rng());

    assert_eq!(outcome.state().counter(), 1);
    assert_eq!(outcome.state().guesses().len(), 1);
    assert!(!outcome.is_won());
    assert!(outcome.state().solution().is_some());
    assert_eq!(outcome.message(), GUESS_PROMPT);
}

#[test]
fn test_first_turn_never_wins() {
    let resolver = TurnResolver::default();
    let drawn = random_solution(&mut rng());

    let outcome = resolver.resolve_turn(&drawn.to_string(), None, &mut rng());

    assert!(!outcome.is_won());
    assert_eq!(outcome.state().solution(), Some(&drawn));
    assert_eq!(outcome.state().counter(), 1);
    assert_eq!(outcome.message(), GUESS_PROMPT);
    assert_eq!(
        outcome.state().guesses(),
        [format!("{} - ⚫ ⚫ ⚫ ⚫", drawn.glyphs(" "))]
    );

    let outcome = next(&resolver, &outcome, &drawn.to_string(), &mut rng());
    assert!(outcome.is_won());
    assert_eq!(outcome.state().counter(), 2);
}

#[test]
fn test_first_turn_is_deterministic_for_a_seed() {
    let resolver = TurnResolver::default();
    let a = resolver.resolve_turn("rgby", None, &mut rng());
    let b = resolver.resolve_turn("rgby", None, &mut rng());
    assert_eq!(a, b);
}

#[test]
fn test_undecodable_state_starts_new_game() {
    let resolver = TurnResolver::default();
    let fresh = resolver.resolve_turn("rgby", None, &mut rng());
    let garbage = resolver.resolve_turn("rgby", Some("%7B%22solution%22%3A"), &mut rng());
    assert_eq!(fresh, garbage);
}

#[test]
fn test_winning_guess() {
    let resolver = TurnResolver::default();
    let outcome = resolver.resolve_turn("rgby", Some(&token_for("r,g,b,y")), &mut rng());

    assert!(outcome.is_won());
    assert!(outcome.state().solution().is_none());
    assert_eq!(outcome.state().counter(), 1);
    assert_eq!(outcome.message(), "You won in 1 tries! 🔴🟢🔵🟡 🎉");
    assert_eq!(
        outcome.state().guesses(),
        ["🔴 🟢 🔵 🟡 - ⚫ ⚫ ⚫ ⚫".to_string()]
    );
}

#[test]
fn test_won_state_json_hides_solution() {
    let resolver = TurnResolver::default();
    let outcome = resolver.resolve_turn("r.g.b.y", Some(&token_for("r,g,b,y")), &mut rng());
    let json = outcome.state().to_json().unwrap();
    assert!(json.contains(r#""solution":"""#));
    assert!(json.contains(r#""gameWon":"true""#));
}

#[test]
fn test_counter_tracks_every_turn() {
    let resolver = TurnResolver::default();
    let mut rng = rng();
    let mut outcome = resolver.resolve_turn("o,o,o,o", Some(&token_for("r,g,b,y")), &mut rng);

    for (turn, guess) in ["y,b,g,r", "r,r,g,g", "b,b,b,b"].iter().enumerate() {
        outcome = next(&resolver, &outcome, guess, &mut rng);
        assert_eq!(outcome.state().counter() as usize, turn + 2);
        assert_eq!(outcome.state().guesses().len(), turn + 2);
        assert!(!outcome.is_won());
    }

    outcome = next(&resolver, &outcome, "RGBY", &mut rng);
    assert!(outcome.is_won());
    assert_eq!(outcome.state().counter(), 5);
    assert!(outcome.message().starts_with("You won in 5 tries!"));
}

#[test]
fn test_solution_survives_non_winning_turns() {
    let resolver = TurnResolver::default();
    let outcome = resolver.resolve_turn("y,b,g,r", Some(&token_for("r,g,b,y")), &mut rng());
    assert_eq!(
        outcome.state().solution().map(|c| c.to_string()).as_deref(),
        Some("r,g,b,y")
    );
    assert_eq!(outcome.state().guesses()[0], "🟡 🔵 🟢 🔴 - ⚪ ⚪ ⚪ ⚪");
}

#[test]
fn test_play_after_win_starts_new_game() {
    let resolver = TurnResolver::default();
    let mut rng = rng();
    let won = resolver.resolve_turn("rgby", Some(&token_for("r,g,b,y")), &mut rng);
    assert!(won.is_won());

    let again = next(&resolver, &won, "o,o,o,o", &mut rng);
    assert!(!again.is_won());
    assert!(again.state().solution().is_some());
    assert_eq!(again.state().counter(), won.state().counter() + 1);
    assert_eq!(again.state().guesses().len(), 1);
}

#[test]
fn test_reject_policy_keeps_state() {
    let resolver = TurnResolver::new(InvalidGuessPolicy::Reject);
    let token = token_for("r,g,b,y");
    let outcome = resolver.resolve_turn("rgb", Some(&token), &mut rng());

    assert_eq!(outcome.message(), INVALID_INPUT);
    assert_eq!(outcome.state(), &GameState::from_token(&token).unwrap());
    assert_eq!(outcome.state().counter(), 0);
}

#[test]
fn test_reject_policy_first_turn_draws_nothing() {
    let resolver = TurnResolver::new(InvalidGuessPolicy::Reject);
    let outcome = resolver.resolve_turn("bl,wh,r,g", None, &mut rng());
    assert_eq!(outcome.state(), &GameState::new());
}

#[test]
fn test_consume_policy_records_marker() {
    let resolver = TurnResolver::new(InvalidGuessPolicy::Consume);
    let outcome = resolver.resolve_turn("rgb", Some(&token_for("r,g,b,y")), &mut rng());

    assert_eq!(outcome.state().counter(), 1);
    assert_eq!(outcome.state().guesses(), [INVALID_INPUT.to_string()]);
    assert!(outcome.state().solution().is_some());
    assert!(!outcome.is_won());
}

#[test]
fn test_consume_policy_first_turn() {
    let resolver = TurnResolver::new(InvalidGuessPolicy::Consume);
    let outcome = resolver.resolve_turn("rgb", None, &mut rng());

    assert_eq!(outcome.state().counter(), 1);
    assert_eq!(outcome.state().guesses(), [INVALID_INPUT.to_string()]);
    assert!(outcome.state().solution().is_some());
}
