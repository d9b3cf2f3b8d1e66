//! `reversi-engine` is a Reversi/Othello rules engine for engines and UIs.
//!
//! The package is layered the same way from the bottom up:
//!
//!  - [`Board`] stores cell occupancy for a square board of any even size
//!    (at least [`MIN_DIMENSION`]). It knows nothing about the rules.
//!  - [`capture`] contains the bracket-run scan that decides legality and
//!    which disks flip. These functions take a `&Board` and trust the caller
//!    to have checked coordinates.
//!  - [`GameEngine`] is the safe, high-level interface: it owns a board and
//!    both players, enforces every precondition, alternates turns (including
//!    silent passes) and detects the end of the game.
//!
//! ```
//! use reversi_engine::{Cell, GameEngine};
//!
//! let mut game = GameEngine::new(8, "A", "B").unwrap();
//! assert_eq!(game.current_player(), Some("A"));
//!
//! game.place(4, 3).unwrap();
//! assert_eq!(game.cell_at(4, 4).unwrap(), Cell::Dark);
//! assert_eq!((game.count_dark(), game.count_light()), (4, 1));
//! assert_eq!(game.current_player(), Some("B"));
//! ```

pub mod capture;
pub mod test_utils;

mod board;
mod config;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The smallest edge length a board may have.
pub const MIN_DIMENSION: usize = 4;

/// The edge length of a standard Othello board.
pub const DEFAULT_DIMENSION: usize = 8;
