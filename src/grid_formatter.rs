use std::fmt::{self, Debug, Display, Formatter};

use colored::Colorize;

use crate::data::{Pos, SIZE};
use crate::grid::Grid;

/// Renders a grid as three rows, optionally highlighting the blank.
pub struct GridFormatter<'a> {
    grid: &'a Grid,
    color: bool,
}

impl<'a> GridFormatter<'a> {
    pub fn new(grid: &'a Grid, color: bool) -> Self {
        Self { grid, color }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if c > 0 {
                    write!(f, " ")?;
                }
                let pos = Pos::new(r, c);
                let cell = format!("{:2}", self.grid[pos]);
                if self.color && pos == self.grid.blank() {
                    write!(f, "{}", cell.green())?;
                } else {
                    write!(f, "{}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for GridFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl Debug for GridFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
