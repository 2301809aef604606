//! Piece kinds, placed pieces and the target marker

use std::fmt;

use shakmaty::Role;

use crate::coords::Coordinate;

/// Symbol used for the target marker.
pub const MARKER_SYMBOL: char = 'X';

/// Anything that can be named in a specification: one of the six roles or the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Piece(Role),
    Marker,
}

impl Kind {
    /// Accepts upper-case symbols only; callers normalize first.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if symbol == MARKER_SYMBOL {
            return Some(Kind::Marker);
        }
        if !symbol.is_ascii_uppercase() {
            return None;
        }
        Role::from_char(symbol).map(Kind::Piece)
    }

    pub fn symbol(self) -> char {
        match self {
            Kind::Piece(role) => role.upper_char(),
            Kind::Marker => MARKER_SYMBOL,
        }
    }
}

/// How many pieces of a role may be on the board at once.
pub fn cap(role: Role) -> u8 {
    match role {
        Role::King | Role::Queen => 1,
        Role::Bishop | Role::Rook | Role::Knight => 2,
        Role::Pawn => 8,
    }
}

/// Noun used when reporting that a role's cap has been reached.
pub fn limit_noun(role: Role) -> &'static str {
    match role {
        Role::King | Role::Queen => "king or queen",
        Role::Bishop | Role::Rook | Role::Knight => "bishops, rooks, or knights",
        Role::Pawn => "pawns",
    }
}

/// A placed piece. Never moves once on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub role: Role,
    pub position: Coordinate,
}

impl Piece {
    pub fn new(role: Role, position: Coordinate) -> Self {
        Self { role, position }
    }

    pub fn symbol(&self) -> char {
        self.role.upper_char()
    }

    /// Symbol, column and row, e.g. "Qb2".
    pub fn identifier(&self) -> String {
        format!("{}{}", self.symbol(), self.position)
    }

    pub fn can_attack(&self, target: Coordinate) -> bool {
        super::can_attack(self.role, self.position, target)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// The target square. Not a piece and never attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub position: Coordinate,
}

/// What a board cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Piece(Piece),
    Marker(Marker),
}

impl Occupant {
    pub fn kind(&self) -> Kind {
        match self {
            Occupant::Piece(piece) => Kind::Piece(piece.role),
            Occupant::Marker(_) => Kind::Marker,
        }
    }

    pub fn symbol(&self) -> char {
        self.kind().symbol()
    }

    pub fn position(&self) -> Coordinate {
        match self {
            Occupant::Piece(piece) => piece.position,
            Occupant::Marker(marker) => marker.position,
        }
    }

    pub fn as_piece(&self) -> Option<&Piece> {
        match self {
            Occupant::Piece(piece) => Some(piece),
            Occupant::Marker(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_symbols() {
        assert_eq!(Kind::from_symbol('Q'), Some(Kind::Piece(Role::Queen)));
        assert_eq!(Kind::from_symbol('N'), Some(Kind::Piece(Role::Knight)));
        assert_eq!(Kind::from_symbol('X'), Some(Kind::Marker));
        assert_eq!(Kind::from_symbol('q'), None);
        assert_eq!(Kind::from_symbol('Z'), None);
        assert_eq!(Kind::Piece(Role::Pawn).symbol(), 'P');
    }

    #[test]
    fn test_caps() {
        assert_eq!(cap(Role::King), 1);
        assert_eq!(cap(Role::Queen), 1);
        assert_eq!(cap(Role::Rook), 2);
        assert_eq!(cap(Role::Bishop), 2);
        assert_eq!(cap(Role::Knight), 2);
        assert_eq!(cap(Role::Pawn), 8);
    }

    #[test]
    fn test_identifier() {
        let queen = Piece::new(Role::Queen, Coordinate::new(2, 'b').unwrap());
        assert_eq!(queen.identifier(), "Qb2");
        assert_eq!(queen.to_string(), "Qb2");
    }

    #[test]
    fn test_marker_occupant() {
        let target = Coordinate::new(3, 'c').unwrap();
        let occupant = Occupant::Marker(Marker { position: target });
        assert_eq!(occupant.symbol(), 'X');
        assert_eq!(occupant.position(), target);
        assert!(occupant.as_piece().is_none());
    }
}
