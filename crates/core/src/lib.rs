//! Chess Attack Simulator Core Library
//!
//! Models a single board with a handful of pieces and one target square,
//! and reports which pieces could attack the target if nothing stood in
//! the way.

pub mod board;
pub mod coords;
pub mod error;
pub mod pieces;
pub mod placement;
pub mod scan;
pub mod session;

pub use board::Board;
pub use coords::{column_index, is_valid_row, Coordinate};
pub use error::{Error, Result};
pub use pieces::{Kind, Marker, Occupant, Piece};
pub use placement::{Placement, Setup};
pub use scan::{attackers, AttackReport};
pub use session::Session;
