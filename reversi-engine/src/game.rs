//! Implements game-level Reversi logic.
//!
//! [`GameEngine`] is the checked interface to the rules: it validates every
//! argument, applies captures through [`crate::capture`], and moves the game
//! through its turn states. For raw access without checks, use [`Board`] and
//! the functions in [`crate::capture`] directly.

use crate::capture::{self, Capture};
use crate::{Board, Cell, Color, GameConfig, GameError, Location, MoveRejection};
use std::fmt;
use tracing::{debug, instrument, trace};

/// Whose turn it is, or that the game has ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Turn {
    AwaitingMove(Color),
    Terminal,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// A record of one accepted placement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub color: Color,
    pub location: Location,
    /// The runs flipped, one entry per capturing direction.
    pub captures: Vec<Capture>,
    /// True when the opponent had no legal reply and `color` moves again.
    pub passed: bool,
    /// The turn state after the placement.
    pub turn: Turn,
}

impl Placement {
    /// Every location flipped by this placement.
    pub fn flipped(&self) -> impl Iterator<Item = Location> + '_ {
        self.captures
            .iter()
            .flat_map(|capture| capture.flipped.iter().copied())
    }
}

/// A game between two named players.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameEngine {
    board: Board,
    turn: Turn,
    dark_player: String,
    light_player: String,
}

/// Decide whose turn it is on `board` when `to_move` would normally play next.
/// A side without a legal placement is skipped; if neither side can place, or
/// no empty cell is left, the game is over.
fn resolve_turn(board: &Board, to_move: Color) -> Turn {
    if !board.has_empty_cell() {
        Turn::Terminal
    } else if capture::has_legal_move(board, to_move) {
        Turn::AwaitingMove(to_move)
    } else if capture::has_legal_move(board, !to_move) {
        Turn::AwaitingMove(!to_move)
    } else {
        Turn::Terminal
    }
}

impl GameEngine {
    /// Start a game on a `dimension` x `dimension` board with the four center disks.
    #[instrument(level = "debug", skip(dark_player, light_player))]
    pub fn new(
        dimension: usize,
        dark_player: impl Into<String>,
        light_player: impl Into<String>,
    ) -> Result<Self, GameError> {
        let board = Board::starting(dimension)?;
        Ok(Self {
            board,
            turn: Turn::AwaitingMove(Color::default()),
            dark_player: dark_player.into(),
            light_player: light_player.into(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Self::new(
            config.dimension,
            config.dark_player.as_str(),
            config.light_player.as_str(),
        )
    }

    /// Resume a game from an arbitrary position with `to_move` due to play.
    /// Passes and the end of the game are resolved immediately.
    pub fn from_position(
        board: Board,
        to_move: Color,
        dark_player: impl Into<String>,
        light_player: impl Into<String>,
    ) -> Self {
        let turn = resolve_turn(&board, to_move);
        Self {
            board,
            turn,
            dark_player: dark_player.into(),
            light_player: light_player.into(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dimension()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dimension()
    }

    /// Get the cell at a 1-indexed position.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.board.cell_at(row, column)
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The color due to play, or `None` once the game is over.
    pub fn current_color(&self) -> Option<Color> {
        match self.turn {
            Turn::AwaitingMove(color) => Some(color),
            Turn::Terminal => None,
        }
    }

    /// The name of the player due to play, or `None` once the game is over.
    pub fn current_player(&self) -> Option<&str> {
        self.current_color().map(|color| self.player(color))
    }

    /// The name of the player bound to `color`.
    pub fn player(&self, color: Color) -> &str {
        match color {
            Color::Dark => &self.dark_player,
            Color::Light => &self.light_player,
        }
    }

    /// Returns whether `color` has any legal placement on the current board.
    pub fn legal_move_exists(&self, color: Color) -> bool {
        capture::has_legal_move(&self.board, color)
    }

    /// Returns whether the player due to play may place at `(row, column)`.
    /// False when the game is over or the position is off the board.
    pub fn can_place(&self, row: usize, column: usize) -> bool {
        let loc = Location::new(row, column);
        match self.turn {
            Turn::AwaitingMove(color) => {
                self.board.contains(loc) && capture::is_legal(&self.board, loc, color)
            }
            Turn::Terminal => false,
        }
    }

    /// Every legal placement for the player due to play, in row-major order.
    pub fn legal_moves(&self) -> Vec<Location> {
        match self.turn {
            Turn::AwaitingMove(color) => capture::legal_moves(&self.board, color),
            Turn::Terminal => Vec::new(),
        }
    }

    /// Place a disk for the player due to play, flip every bracketed run and
    /// pass the turn. A rejected placement leaves the game untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, row: usize, column: usize) -> Result<Placement, GameError> {
        let color = self.check_placement(row, column).map_err(|err| {
            trace!(%err, "placement rejected");
            err
        })?;

        let location = Location::new(row, column);
        let captures = capture::apply(&mut self.board, location, color);
        self.turn = resolve_turn(&self.board, !color);
        let passed = self.turn == Turn::AwaitingMove(color);

        let placement = Placement {
            color,
            location,
            captures,
            passed,
            turn: self.turn,
        };
        debug!(
            %location,
            ?color,
            flipped = placement.flipped().count(),
            "placed disk"
        );
        if passed {
            let skipped = !color;
            debug!(?skipped, "no legal placement, turn passes back");
        }
        if self.turn == Turn::Terminal {
            debug!(
                dark = self.count_dark(),
                light = self.count_light(),
                "game over"
            );
        }

        Ok(placement)
    }

    fn check_placement(&self, row: usize, column: usize) -> Result<Color, GameError> {
        let loc = Location::new(row, column);
        if !self.board.contains(loc) {
            return Err(GameError::OutOfRange {
                row,
                column,
                dimension: self.dimension(),
            });
        }

        let illegal = |reason| GameError::IllegalMove {
            row,
            column,
            reason,
        };
        let color = self
            .current_color()
            .ok_or_else(|| illegal(MoveRejection::GameOver))?;
        if !self.board.get(loc).is_empty() {
            return Err(illegal(MoveRejection::Occupied));
        }
        if !capture::is_legal(&self.board, loc, color) {
            return Err(illegal(MoveRejection::NoCapture));
        }

        Ok(color)
    }

    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.board.count_color(color)
    }

    pub fn count_dark(&self) -> usize {
        self.count(Color::Dark)
    }

    pub fn count_light(&self) -> usize {
        self.count(Color::Light)
    }

    /// Returns whether no more placements are possible.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.turn == Turn::Terminal
    }

    /// The result of the game, or `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }

        let (dark, light) = (self.count_dark(), self.count_light());
        Some(if dark > light {
            Outcome::Winner(Color::Dark)
        } else if light > dark {
            Outcome::Winner(Color::Light)
        } else {
            Outcome::Draw
        })
    }

    /// Returns whether the game is over and one side has more disks.
    pub fn has_winner(&self) -> bool {
        matches!(self.outcome(), Some(Outcome::Winner(_)))
    }

    /// The name of the winning player, or `None` for a draw.
    pub fn winner(&self) -> Result<Option<&str>, GameError> {
        match self.outcome() {
            None => Err(GameError::GameNotOver),
            Some(Outcome::Draw) => Ok(None),
            Some(Outcome::Winner(color)) => Ok(Some(self.player(color))),
        }
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.outcome() {
            None => {
                if let Some(color) = self.current_color() {
                    write!(f, "{} ({}) to move", color, self.player(color))?;
                }
            }
            Some(Outcome::Winner(color)) => {
                write!(f, "Game over: {} ({}) wins", color, self.player(color))?
            }
            Some(Outcome::Draw) => f.write_str("Game over: draw")?,
        }
        write!(
            f,
            " [{} {}, {} {}]",
            Color::Dark,
            self.count_dark(),
            Color::Light,
            self.count_light()
        )
    }
}
