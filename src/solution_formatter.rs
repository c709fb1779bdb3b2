use std::fmt::{self, Debug, Display, Formatter};

use crate::grid::Grid;
use crate::grid_formatter::GridFormatter;
use crate::moves::Moves;

pub const SEPARATOR: &str = "---------------";

/// Every step of a solution, numbered from 0 (the initial grid).
pub struct SolutionFormatter<'a> {
    initial: Grid,
    moves: &'a Moves,
    color: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial: Grid, moves: &'a Moves, color: bool) -> Self {
        Self {
            initial,
            moves,
            color,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let path = match self.moves.replay(self.initial) {
            Some(path) => path,
            None => {
                return writeln!(f, "Moves {} can't be played from {}", self.moves, self.initial)
            }
        };

        for (i, grid) in path.iter().enumerate() {
            writeln!(f, "Step {}:", i)?;
            write!(f, "{}", GridFormatter::new(grid, self.color))?;
            writeln!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
