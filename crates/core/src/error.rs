//! Error types for chess-attack-sim-core

use shakmaty::Role;
use thiserror::Error;

use crate::coords::Coordinate;
use crate::pieces::limit_noun;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed piece specification: {0:?}")]
    MalformedSpecification(String),

    #[error("unrecognized piece type '{0}'")]
    UnrecognizedKind(char),

    #[error("column '{0}' is outside a-h")]
    InvalidColumn(char),

    #[error("row {0} is outside 1-8")]
    InvalidRow(u32),

    #[error("{0} is already occupied")]
    CellOccupied(Coordinate),

    #[error(
        "You have reached the maximum limit. There can only be {cap} {} on the board at any given time",
        limit_noun(*.role)
    )]
    CountCapExceeded { role: Role, cap: u8 },

    #[error("the target has already been placed")]
    SetupComplete,

    #[error("input ended before a target was placed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the session can continue after this error by reprompting.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::MalformedSpecification(_)
                | Error::UnrecognizedKind(_)
                | Error::InvalidColumn(_)
                | Error::InvalidRow(_)
                | Error::CellOccupied(_)
                | Error::CountCapExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_message_names_limit() {
        let err = Error::CountCapExceeded { role: Role::Pawn, cap: 8 };
        assert_eq!(
            err.to_string(),
            "You have reached the maximum limit. There can only be 8 pawns on the board at any given time"
        );
    }

    #[test]
    fn test_rejections_are_recoverable() {
        assert!(Error::UnrecognizedKind('Z').is_rejection());
        assert!(Error::InvalidRow(9).is_rejection());
        assert!(!Error::InputClosed.is_rejection());
        assert!(!Error::SetupComplete.is_rejection());
    }
}
