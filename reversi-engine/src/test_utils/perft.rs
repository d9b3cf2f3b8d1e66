//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{GameEngine, GameError};

/// Count the positions `depth` plies from the opening on a `dimension` x
/// `dimension` board. Finished games count as leaves.
pub fn run_perft(dimension: usize, depth: u64) -> Result<u64, GameError> {
    let game = GameEngine::new(dimension, "dark", "light")?;
    Ok(leaves_below(&game, depth))
}

/// Count the leaves `depth` plies below `game`.
/// A turn skipped inside [`GameEngine::place`] counts as a ply of its own,
/// and a finished game is a leaf however much depth is left.
pub fn leaves_below(game: &GameEngine, depth: u64) -> u64 {
    // Leaf node for this depth, or the game is over.
    if depth == 0 || game.is_over() {
        return 1;
    }

    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|loc| {
            let mut child = game.clone();
            let placement = child.place(loc.row, loc.column).ok()?;
            let remaining = if placement.passed {
                depth - 2
            } else {
                depth - 1
            };
            Some(leaves_below(&child, remaining))
        })
        .sum()
}
