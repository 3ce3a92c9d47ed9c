use std::fmt;
use std::str::FromStr;
use crate::error::CoordinateParseError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }

    /// None when the shifted position is not representable
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Coordinate> {
        Some(Coordinate {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

/// Encodes as `row-col`, the identity each cell carries on the presentation side
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| CoordinateParseError::MissingSeparator(s.to_string()))?;
        let parse_part = |part: &str| -> Result<i32, CoordinateParseError> {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(CoordinateParseError::InvalidNumber(part.to_string()));
            }
            part.parse::<i32>()
                .map_err(|_| CoordinateParseError::InvalidNumber(part.to_string()))
        };
        Ok(Coordinate {
            row: parse_part(row)?,
            col: parse_part(col)?,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Toggle(Coordinate),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(crate::core::Grid, GameChangeType),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    Toggled { affected: usize },
    Won,
}
