//! Code for working with [`Location`]s and [`Direction`]s on the board.

use crate::utils;
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};

/// A 1-indexed location on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

/// One of the eight compass directions a bracketed run can extend in.
/// North is toward row 1, west is toward column 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(row, column)` delta of one step in this direction.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns whether this location lies on a board with the given edge length.
    #[inline]
    pub fn is_within(self, dimension: usize) -> bool {
        (1..=dimension).contains(&self.row) && (1..=dimension).contains(&self.column)
    }

    /// The neighboring location one step in `direction`, or `None` past the edge.
    #[inline]
    pub fn step(self, direction: Direction, dimension: usize) -> Option<Self> {
        let (dr, dc) = direction.offset();
        let row = (self.row as isize + dr) as usize;
        let column = (self.column as isize + dc) as usize;
        let next = Self::new(row, column);
        if next.is_within(dimension) {
            Some(next)
        } else {
            None
        }
    }

    /// Walk from this location in `direction`, excluding the starting location,
    /// until the edge of the board.
    pub fn ray(self, direction: Direction, dimension: usize) -> impl Iterator<Item = Location> {
        std::iter::successors(self.step(direction, dimension), move |loc| {
            loc.step(direction, dimension)
        })
    }
}

/// Convert this [`Location`] into string notation ("D3").
/// Columns past the alphabet fall back to "(row, column)".
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match utils::column_letter(self.column) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation ("D3", "j10").
/// Whether the location fits a given board is checked when it is used.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let column = utils::letter_column(column_char).ok_or(ParseLocationError)?;

        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseLocationError);
        }
        let row: usize = row_str.parse().or(Err(ParseLocationError))?;
        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_step_inside() {
        let loc = Location::new(4, 4);
        assert_eq!(loc.step(Direction::North, 8), Some(Location::new(3, 4)));
        assert_eq!(loc.step(Direction::SouthEast, 8), Some(Location::new(5, 5)));
        assert_eq!(loc.step(Direction::SouthWest, 8), Some(Location::new(5, 3)));
    }

    #[test]
    fn location_step_off_edge() {
        assert_eq!(Location::new(1, 1).step(Direction::North, 8), None);
        assert_eq!(Location::new(1, 1).step(Direction::West, 8), None);
        assert_eq!(Location::new(1, 1).step(Direction::NorthWest, 8), None);
        assert_eq!(Location::new(4, 4).step(Direction::East, 4), None);
        assert_eq!(Location::new(4, 2).step(Direction::South, 4), None);
    }

    #[test]
    fn location_ray() {
        let ray: Vec<_> = Location::new(2, 2).ray(Direction::SouthEast, 4).collect();
        assert_eq!(ray, vec![Location::new(3, 3), Location::new(4, 4)]);
        assert_eq!(Location::new(1, 3).ray(Direction::North, 4).count(), 0);
    }

    #[test]
    fn location_is_within() {
        assert!(Location::new(1, 1).is_within(4));
        assert!(Location::new(4, 4).is_within(4));
        assert!(!Location::new(0, 1).is_within(4));
        assert!(!Location::new(5, 1).is_within(4));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location::new(1, 1)));
        assert_eq!(Location::from_str("h8"), Ok(Location::new(8, 8)));
        assert_eq!(Location::from_str("D7"), Ok(Location::new(7, 4)));
        assert_eq!(Location::from_str("J10"), Ok(Location::new(10, 10)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A-1"), Err(ParseLocationError));
        assert_eq!(Location::from_str("5A"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(8, 8).to_string(), "H8");
        assert_eq!(Location::new(1, 1).to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::new(3, 27).to_string(), "(3, 27)");
    }
}
