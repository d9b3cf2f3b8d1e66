//! Miscellaneous project utilities.

use std::fmt::{self, Formatter};
use std::iter::Iterator;

const COLUMN_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The letter naming a 1-indexed column, if the alphabet reaches that far.
pub fn column_letter(column: usize) -> Option<char> {
    column
        .checked_sub(1)
        .and_then(|index| COLUMN_LETTERS.chars().nth(index))
}

/// The 1-indexed column named by an uppercase letter.
pub fn letter_column(letter: char) -> Option<usize> {
    COLUMN_LETTERS.find(letter).map(|index| index + 1)
}

/// Format `dimension * dimension` characters into a labelled grid.
/// `piece_iter` must yield exactly that many items, in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    dimension: usize,
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    let label_width = dimension.to_string().len();

    write!(f, "{:width$}", "", width = label_width)?;
    for column in 1..=dimension {
        match column_letter(column) {
            Some(letter) => write!(f, " {}", letter)?,
            None => write!(f, " {}", column % 10)?,
        }
    }

    for row in 1..=dimension {
        write!(f, "\n{:>width$}", row, width = label_width)?;
        for _ in 0..dimension {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(1), Some('A'));
        assert_eq!(column_letter(26), Some('Z'));
        assert_eq!(column_letter(0), None);
        assert_eq!(column_letter(27), None);
        assert_eq!(letter_column('A'), Some(1));
        assert_eq!(letter_column('H'), Some(8));
        assert_eq!(letter_column('a'), None);
    }
}
