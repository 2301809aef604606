//! Piece placement: parsing, per-role caps and the setup state machine

mod counts;
mod parser;
mod setup;

pub use counts::PieceCounts;
pub use parser::{normalize_column, normalize_symbol, parse_specification, Specification};
pub use setup::{Placement, Setup};
