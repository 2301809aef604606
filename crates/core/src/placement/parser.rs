//! Parser for piece specifications such as "Qb2" or "xe5"

use crate::coords::Coordinate;
use crate::error::{Error, Result};
use crate::pieces::Kind;

/// A parsed and range-checked specification. Occupancy and caps are not
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specification {
    pub kind: Kind,
    pub position: Coordinate,
}

/// Kind symbols are matched in upper case.
pub fn normalize_symbol(symbol: char) -> char {
    symbol.to_ascii_uppercase()
}

/// Column letters are matched in lower case.
pub fn normalize_column(column: char) -> char {
    column.to_ascii_lowercase()
}

/// Parses `<kind><column><row>`, ignoring surrounding whitespace.
pub fn parse_specification(input: &str) -> Result<Specification> {
    let trimmed = input.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    let &[symbol, column, row] = chars.as_slice() else {
        return Err(Error::MalformedSpecification(trimmed.to_string()));
    };

    let row = row
        .to_digit(10)
        .ok_or_else(|| Error::MalformedSpecification(trimmed.to_string()))?;

    let symbol = normalize_symbol(symbol);
    let kind = Kind::from_symbol(symbol).ok_or(Error::UnrecognizedKind(symbol))?;
    let position = Coordinate::new(row, normalize_column(column))?;

    Ok(Specification { kind, position })
}
