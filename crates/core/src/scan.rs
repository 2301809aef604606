//! Attack scan over a finished board

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::coords::Coordinate;
use crate::pieces::Piece;

/// Pieces whose pattern covers `target`, from row 8 down to row 1 and
/// column a to h within each row. The marker is never included.
pub fn attackers(board: &Board, target: Coordinate) -> Vec<Piece> {
    board
        .occupants()
        .filter_map(|occupant| occupant.as_piece())
        .filter(|piece| piece.can_attack(target))
        .inspect(|piece| debug!(attacker = %piece, target_square = %target, "attack found"))
        .copied()
        .collect()
}

/// Outcome of a session: the target and who attacks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub target: Coordinate,
    pub attackers: Vec<Piece>,
}

impl AttackReport {
    pub fn new(board: &Board, target: Coordinate) -> Self {
        Self {
            target,
            attackers: attackers(board, target),
        }
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.attackers.iter().map(Piece::identifier).collect()
    }

    pub fn is_attacked(&self) -> bool {
        !self.attackers.is_empty()
    }
}

impl fmt::Display for AttackReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.attackers {
            writeln!(f, "{}", piece)?;
        }
        Ok(())
    }
}
