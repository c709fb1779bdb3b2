use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::CELLS;
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Token(String),
    TileCount(usize),
    OutOfRange(i64),
    Duplicate(u8),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Token(ref token) => write!(f, "Not a number: {}", token),
            ParserErr::TileCount(cnt) => write!(f, "Expected {} numbers, got {}", CELLS, cnt),
            ParserErr::OutOfRange(value) => {
                write!(f, "Number out of range (0-{}): {}", CELLS - 1, value)
            }
            ParserErr::Duplicate(value) => write!(f, "Number used more than once: {}", value),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Grid {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses nine whitespace separated numbers, row-major, 0 is the blank.
///
/// Newlines count as whitespace so both `0 5 7 1 4 3 6 8 2` and the same
/// numbers written as three rows are accepted.
pub(crate) fn parse(input: &str) -> Result<Grid, ParserErr> {
    let mut values = Vec::new();
    for token in input.split_whitespace() {
        let value: i64 = token
            .parse()
            .map_err(|_| ParserErr::Token(token.to_owned()))?;
        values.push(value);
    }

    if values.len() != CELLS {
        return Err(ParserErr::TileCount(values.len()));
    }

    let mut tiles = Vec::with_capacity(CELLS);
    for value in values {
        if value < 0 || value >= CELLS as i64 {
            return Err(ParserErr::OutOfRange(value));
        }
        tiles.push(value as u8);
    }

    Grid::from_tiles(&tiles)
}
