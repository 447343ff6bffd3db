//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between cell ids (e.g., "A1", "B12")
//! and zero-indexed row/column coordinates. The id grammar is one uppercase
//! row letter followed by a 1-based column index with no leading zero:
//! `[A-Z][1-9][0-9]*`. Single-letter rows cap a sheet at 26 rows.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn cell_id_re() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Z])(?<number>[1-9][0-9]*)$")
            .expect("cell id regex must compile")
    })
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell id (e.g., "A1", "B12").
    /// Returns None for anything outside the id grammar: lowercase letters,
    /// multi-letter rows, and zero-leading column numbers are all rejected.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(id: &str) -> Option<CellRef> {
        Self::parse_id(id)
    }

    fn parse_id(id: &str) -> Option<CellRef> {
        let caps = cell_id_re().captures(id)?;
        let letter = caps["letter"].bytes().next()?;
        let row = (letter - b'A') as usize;
        let col = caps["number"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(row, col))
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_id(s).ok_or_else(|| format!("Invalid cell id: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_roundtrip() {
        for id in ["A1", "B12", "Z999"] {
            let cell = CellRef::from_str(id).unwrap();
            assert_eq!(cell.to_string(), id);
        }
        assert_eq!(CellRef::from_str("C3"), Some(CellRef::new(2, 2)));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for id in ["", "A", "1A", "A0", "A01", "a1", "AA1", "A1 ", "A-1"] {
            assert_eq!(CellRef::from_str(id), None, "{:?} should not parse", id);
        }
    }
}
