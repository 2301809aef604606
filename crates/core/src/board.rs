//! 8x8 grid of optional occupants
//!
//! The board does no validation of its own. Emptiness and piece caps are
//! checked by [`crate::placement::Setup`] before anything is placed.

use std::fmt;

use crate::coords::Coordinate;
use crate::pieces::Occupant;

/// Printed for an empty cell.
pub const EMPTY_CELL: char = '.';

#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: [[Option<Occupant>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `occupant` at `position`, replacing whatever was there.
    pub fn place(&mut self, occupant: Occupant, position: Coordinate) {
        let (row, col) = position.board_index();
        self.cells[row][col] = Some(occupant);
    }

    pub fn get(&self, position: Coordinate) -> Option<&Occupant> {
        let (row, col) = position.board_index();
        self.cells[row][col].as_ref()
    }

    pub fn is_empty_at(&self, position: Coordinate) -> bool {
        self.get(position).is_none()
    }

    /// Occupants from row 8 down to row 1, columns a to h.
    pub fn occupants(&self) -> impl Iterator<Item = &Occupant> {
        self.cells.iter().flatten().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupants().count()
    }

    /// One line per row, row 8 first.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(8 * 9);
        for row in &self.cells {
            for cell in row {
                out.push(cell.map_or(EMPTY_CELL, |occupant| occupant.symbol()));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
