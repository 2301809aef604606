//! Board coordinates in algebraic form (column letter + row number)

use std::fmt;

use shakmaty::{File, Rank, Square};

use crate::error::{Error, Result};

/// Maps a column letter to its zero-based index.
pub fn column_index(letter: char) -> Result<u32> {
    File::from_char(letter)
        .map(|file| file as u32)
        .ok_or(Error::InvalidColumn(letter))
}

pub fn is_valid_row(row: u32) -> bool {
    (1..=8).contains(&row)
}

/// A validated square, row 1..8 and column a..h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate(Square);

impl Coordinate {
    pub fn new(row: u32, column: char) -> Result<Self> {
        let file = column_index(column)?;
        if !is_valid_row(row) {
            return Err(Error::InvalidRow(row));
        }
        Ok(Self(Square::from_coords(File::new(file), Rank::new(row - 1))))
    }

    pub fn row(self) -> u32 {
        self.0.rank() as u32 + 1
    }

    pub fn column(self) -> char {
        self.0.file().char()
    }

    pub fn column_index(self) -> u32 {
        self.0.file() as u32
    }

    /// Grid position as (row index, column index), row 8 at index 0.
    pub fn board_index(self) -> (usize, usize) {
        ((8 - self.row()) as usize, self.column_index() as usize)
    }

    /// Signed (row, column) offset from `self` to `target`.
    pub fn delta_to(self, target: Coordinate) -> (i32, i32) {
        (
            target.row() as i32 - self.row() as i32,
            target.column_index() as i32 - self.column_index() as i32,
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}
