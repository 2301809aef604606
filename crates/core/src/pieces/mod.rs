//! Piece model and attack geometry

mod attacks;
mod types;

pub use attacks::can_attack;
pub use types::*;
