//! Placement state machine
//!
//! Accepts specifications one at a time until the target marker is placed.

use shakmaty::Role;
use tracing::{debug, info, warn};

use super::counts::PieceCounts;
use super::parser::{parse_specification, Specification};
use crate::board::Board;
use crate::coords::Coordinate;
use crate::error::{Error, Result};
use crate::pieces::{Kind, Marker, Occupant, Piece};

/// Result of an accepted specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A piece went on the board; keep reading.
    Placed(Piece),
    /// The marker went on the board; setup is done.
    Target(Coordinate),
}

#[derive(Debug, Clone, Default)]
pub struct Setup {
    board: Board,
    counts: PieceCounts,
    target: Option<Coordinate>,
}

impl Setup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn counts(&self) -> &PieceCounts {
        &self.counts
    }

    pub fn target(&self) -> Option<Coordinate> {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.target.is_some()
    }

    /// Parses and applies one line of input.
    ///
    /// On error nothing changes, so the caller can simply ask again.
    pub fn submit(&mut self, input: &str) -> Result<Placement> {
        let outcome = parse_specification(input).and_then(|spec| self.apply(spec));
        if let Err(e) = &outcome {
            warn!(input = input.trim(), error = %e, "specification rejected");
        }
        outcome
    }

    /// Validates and applies an already parsed specification.
    pub fn apply(&mut self, spec: Specification) -> Result<Placement> {
        self.validate(spec)?;

        match spec.kind {
            Kind::Piece(role) => Ok(Placement::Placed(self.place_piece(role, spec.position))),
            Kind::Marker => {
                self.board
                    .place(Occupant::Marker(Marker { position: spec.position }), spec.position);
                self.target = Some(spec.position);
                info!(target_square = %spec.position, "target placed");
                Ok(Placement::Target(spec.position))
            }
        }
    }

    /// Checks a specification against the current board without changing it.
    pub fn validate(&self, spec: Specification) -> Result<()> {
        if self.is_done() {
            return Err(Error::SetupComplete);
        }
        if !self.board.is_empty_at(spec.position) {
            return Err(Error::CellOccupied(spec.position));
        }
        if let Kind::Piece(role) = spec.kind {
            self.counts.check(role)?;
        }
        Ok(())
    }

    fn place_piece(&mut self, role: Role, position: Coordinate) -> Piece {
        let piece = Piece::new(role, position);
        self.board.place(Occupant::Piece(piece), position);
        self.counts.increment(role);
        debug!(piece = %piece, count = self.counts.get(role), "piece placed");
        piece
    }
}
