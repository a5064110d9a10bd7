//! Solution generation.

use super::super::{CODE_LENGTH, Code, Color};
use rand::Rng;
use tracing::instrument;

/// Draws a solution uniformly at random.
///
/// Each position is an independent draw from the 5-color palette, so
/// repeated colors are allowed.
#[instrument(skip(rng))]
pub fn random_solution<R: Rng + ?Sized>(rng: &mut R) -> Code {
    let mut colors = [Color::Red; CODE_LENGTH];
    for slot in colors.iter_mut() {
        *slot = Color::ALL[rng.gen_range(0..Color::ALL.len())];
    }
    Code::new(colors)
}
