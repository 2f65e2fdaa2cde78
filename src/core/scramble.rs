use crate::core::models::{Board, MoveDirection};
use crate::core::update::try_slide;
use rand::Rng;
use rand::seq::SliceRandom;

/// Applies up to `moves` uniformly random legal slides. Every intermediate
/// board is legal, so the result is always a reachable position.
pub fn scramble<R: Rng>(board: &Board, moves: usize, rng: &mut R) -> Board {
    let mut current = board.clone();
    for _ in 0..moves {
        let mut candidates = Vec::new();
        for index in 0..current.vehicles.len() {
            for direction in [MoveDirection::Forward, MoveDirection::Backward] {
                if let Some(next) = try_slide(&current, index, direction) {
                    candidates.push(next);
                }
            }
        }
        let Some(next) = candidates.choose(rng) else {
            break;
        };
        current = next.clone();
    }
    current
}
