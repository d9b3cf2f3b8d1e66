//! Storage for the cells of a Reversi board.
//!
//! A [`Board`] is pure data: it holds one [`Cell`] per location and offers
//! checked reads and writes. It knows nothing about which moves are legal;
//! that lives in [`crate::capture`] and [`crate::GameEngine`].

use crate::{utils, GameError, Location, MIN_DIMENSION};
use derive_more::{Display, Error};
use itertools::iproduct;
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Color {
    Dark,
    Light,
}

impl Default for Color {
    /// Gets the starting color (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

/// The occupancy of a single location.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Cell::Dark,
            Color::Light => Cell::Light,
        }
    }
}

impl Cell {
    /// The color of the disk in this cell, if there is one.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Color::Dark),
            Cell::Light => Some(Color::Light),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => '#',
            Cell::Light => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '-' => Some(Cell::Empty),
            '#' | 'X' | 'x' => Some(Cell::Dark),
            'O' | 'o' => Some(Cell::Light),
            _ => None,
        }
    }
}

/// A square grid of cells with an even edge length of at least [`MIN_DIMENSION`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    dimension: usize,
    // Row-major.
    cells: Vec<Cell>,
}

/// Check that a board of this edge length can be built, returning its cell count.
pub(crate) fn check_dimension(dimension: usize) -> Result<usize, GameError> {
    match dimension.checked_mul(dimension) {
        Some(cells) if dimension >= MIN_DIMENSION && dimension % 2 == 0 => Ok(cells),
        _ => Err(GameError::InvalidDimension { dimension }),
    }
}

impl Board {
    /// Build an empty board.
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        let cells = check_dimension(dimension)?;
        Ok(Self {
            dimension,
            cells: vec![Cell::Empty; cells],
        })
    }

    /// Build a board with the four starting disks interleaved in the center:
    /// light on the northwest-southeast diagonal, dark on the other.
    pub fn starting(dimension: usize) -> Result<Self, GameError> {
        let mut board = Self::new(dimension)?;
        let mid = dimension / 2;
        board.set(Location::new(mid, mid), Cell::Light);
        board.set(Location::new(mid + 1, mid + 1), Cell::Light);
        board.set(Location::new(mid, mid + 1), Cell::Dark);
        board.set(Location::new(mid + 1, mid), Cell::Dark);
        Ok(board)
    }

    /// The number of rows, which is also the number of columns.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns whether `loc` lies on this board.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.is_within(self.dimension)
    }

    /// Get the cell at a 1-indexed position.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        let loc = self.checked(row, column)?;
        Ok(self.get(loc))
    }

    /// Overwrite the cell at a 1-indexed position. No rules are applied.
    pub fn set_cell_at(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), GameError> {
        let loc = self.checked(row, column)?;
        self.set(loc, cell);
        Ok(())
    }

    /// Count the disks of one color.
    pub fn count_color(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the cells with no disk.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    /// Every location on the board in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let dimension = self.dimension;
        iproduct!(1..=dimension, 1..=dimension).map(|(row, column)| Location::new(row, column))
    }

    /// Unchecked read. `loc` must lie on the board.
    #[inline]
    pub(crate) fn get(&self, loc: Location) -> Cell {
        self.cells[self.offset(loc)]
    }

    /// Unchecked write. `loc` must lie on the board.
    #[inline]
    pub(crate) fn set(&mut self, loc: Location, cell: Cell) {
        let offset = self.offset(loc);
        self.cells[offset] = cell;
    }

    #[inline]
    fn offset(&self, loc: Location) -> usize {
        (loc.row - 1) * self.dimension + (loc.column - 1)
    }

    fn checked(&self, row: usize, column: usize) -> Result<Location, GameError> {
        let loc = Location::new(row, column);
        if self.contains(loc) {
            Ok(loc)
        } else {
            Err(GameError::OutOfRange {
                row,
                column,
                dimension: self.dimension,
            })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.dimension,
            self.cells.iter().map(|cell| cell.symbol()),
            f,
        )
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "invalid board symbol {:?}", symbol)]
    InvalidSymbol { symbol: char },
    #[display(fmt = "{} cells do not form a valid square board", length)]
    InvalidLength { length: usize },
}

/// Parse a board from its cells in row-major order: `#` (or `X`) for dark,
/// `O` for light, `.` (or `-`) for empty. Whitespace is ignored, so a board
/// can be laid out one row per line.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| {
                Cell::from_symbol(symbol).ok_or(ParseBoardError::InvalidSymbol { symbol })
            })
            .collect::<Result<Vec<Cell>, ParseBoardError>>()?;

        let length = cells.len();
        let dimension = (1..=length)
            .take_while(|d| d * d <= length)
            .find(|d| d * d == length)
            .ok_or(ParseBoardError::InvalidLength { length })?;
        check_dimension(dimension).or(Err(ParseBoardError::InvalidLength { length }))?;

        Ok(Self { dimension, cells })
    }
}
