//! The bracket-run scan at the heart of Reversi.
//!
//! A placement at `origin` captures in a direction when, walking outward,
//! it meets one or more opponent disks followed immediately by a disk of the
//! mover's own color. Any other ending (the edge, an empty cell, or an own
//! disk with nothing in between) captures nothing in that direction.
//!
//! These functions take `origin` as a [`Location`] that already lies on the
//! board; range checks belong to [`crate::GameEngine`] and [`Board`].

use crate::{Board, Cell, Color, Direction, Location};
use arrayvec::ArrayVec;

/// The directions a placement captures in, with the length of each run.
pub type Captures = ArrayVec<[(Direction, usize); 8]>;

/// The disks flipped in one direction by a placement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Capture {
    pub direction: Direction,
    pub flipped: Vec<Location>,
}

/// Length of the bracketed run from `origin` in `direction` for a placement
/// by `color`, or 0 if the run is not bracketed.
pub fn run_length(board: &Board, origin: Location, direction: Direction, color: Color) -> usize {
    let own = Cell::from(color);
    let opponent = Cell::from(!color);

    let mut length = 0;
    for loc in origin.ray(direction, board.dimension()) {
        match board.get(loc) {
            cell if cell == opponent => length += 1,
            cell if cell == own => return length,
            _ => return 0,
        }
    }

    // Ran off the edge.
    0
}

/// Every direction in which a placement at `origin` by `color` brackets a run.
pub fn captures(board: &Board, origin: Location, color: Color) -> Captures {
    Direction::ALL
        .iter()
        .map(|&direction| (direction, run_length(board, origin, direction, color)))
        .filter(|&(_, length)| length > 0)
        .collect()
}

/// Returns whether `color` may place a disk at `origin`.
pub fn is_legal(board: &Board, origin: Location, color: Color) -> bool {
    board.get(origin).is_empty()
        && Direction::ALL
            .iter()
            .any(|&direction| run_length(board, origin, direction, color) > 0)
}

/// Every location where `color` may place a disk, in row-major order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Location> {
    board
        .locations()
        .filter(|&loc| is_legal(board, loc, color))
        .collect()
}

/// Returns whether `color` has at least one legal placement.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.locations().any(|loc| is_legal(board, loc, color))
}

/// Place a disk of `color` at `origin` and flip every bracketed run.
/// The caller must have checked that the placement is legal.
pub fn apply(board: &mut Board, origin: Location, color: Color) -> Vec<Capture> {
    let runs = captures(board, origin, color);
    let cell = Cell::from(color);
    let dimension = board.dimension();

    board.set(origin, cell);
    runs.into_iter()
        .map(|(direction, length)| {
            let flipped: Vec<Location> = origin.ray(direction, dimension).take(length).collect();
            for &loc in &flipped {
                board.set(loc, cell);
            }
            Capture { direction, flipped }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn board(s: &str) -> Board {
        Board::from_str(s).unwrap()
    }

    #[test]
    fn run_bracketed_by_own_disk() {
        let b = board(
            "#OO.
             ....
             ....
             ....",
        );
        let origin = Location::new(1, 4);
        assert_eq!(run_length(&b, origin, Direction::West, Color::Dark), 2);
        assert_eq!(run_length(&b, origin, Direction::West, Color::Light), 0);
    }

    #[test]
    fn run_reaching_edge_is_invalid() {
        let b = board(
            ".OOO
             ....
             ....
             ....",
        );
        assert_eq!(
            run_length(&b, Location::new(1, 1), Direction::East, Color::Dark),
            0
        );
    }

    #[test]
    fn run_reaching_empty_is_invalid() {
        let b = board(
            "#...
             ....
             ..O.
             ....",
        );
        let origin = Location::new(4, 4);
        assert_eq!(run_length(&b, origin, Direction::NorthWest, Color::Dark), 0);

        let b = board(
            "#...
             .O..
             ..O.
             ....",
        );
        assert_eq!(run_length(&b, origin, Direction::NorthWest, Color::Dark), 2);
    }

    #[test]
    fn adjacent_own_disk_captures_nothing() {
        let b = board(
            ".#O#
             ....
             ....
             ....",
        );
        assert_eq!(
            run_length(&b, Location::new(1, 1), Direction::East, Color::Dark),
            0
        );
    }

    #[test]
    fn opening_moves() {
        let b = Board::starting(8).unwrap();
        assert_eq!(
            legal_moves(&b, Color::Dark),
            vec![
                Location::new(3, 4),
                Location::new(4, 3),
                Location::new(5, 6),
                Location::new(6, 5),
            ]
        );
        assert_eq!(
            legal_moves(&b, Color::Light),
            vec![
                Location::new(3, 5),
                Location::new(4, 6),
                Location::new(5, 3),
                Location::new(6, 4),
            ]
        );
    }

    #[test]
    fn occupied_cell_is_never_legal() {
        let b = Board::starting(4).unwrap();
        assert!(!is_legal(&b, Location::new(2, 2), Color::Dark));
        assert!(!is_legal(&b, Location::new(2, 3), Color::Light));
    }

    #[test]
    fn apply_flips_every_bracketed_run() {
        let mut b = board(
            "#.#...
             .OO...
             #O.O#.
             ......
             ......
             ......",
        );
        let origin = Location::new(3, 3);
        let runs: Vec<_> = captures(&b, origin, Color::Dark).into_iter().collect();
        assert_eq!(
            runs,
            vec![
                (Direction::North, 1),
                (Direction::East, 1),
                (Direction::West, 1),
                (Direction::NorthWest, 1),
            ]
        );

        let flipped = apply(&mut b, origin, Color::Dark);
        assert_eq!(flipped.len(), 4);
        assert_eq!(
            b,
            board(
                "#.#...
                 .##...
                 #####.
                 ......
                 ......
                 ......",
            )
        );
    }

    #[test]
    fn apply_does_not_chain() {
        // Once (1, 2) flips, (2, 2) sits between two dark disks but stays light.
        let mut b = board(
            ".O#.
             .O..
             .#..
             ....",
        );
        let capture = apply(&mut b, Location::new(1, 1), Color::Dark);
        assert_eq!(
            capture,
            vec![Capture {
                direction: Direction::East,
                flipped: vec![Location::new(1, 2)],
            }]
        );
        assert_eq!(b.get(Location::new(2, 2)), Cell::Light);
    }
}
