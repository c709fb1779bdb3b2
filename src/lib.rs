// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod grid;
pub mod grid_formatter;
pub mod moves;
pub mod parser;
pub mod prompt;
pub mod solution_formatter;
pub mod solver;

mod fs;

use std::error::Error;

use crate::config::Config;
use crate::grid::Grid;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadGrid {
    fn load_grid(&self) -> Result<Grid, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: &Config, print_status: bool) -> Result<SolverOk, SolverErr>;
}

/// Shortest sequence of grids from `initial` to the goal, both included.
///
/// `None` if the goal can't be reached (odd permutation).
pub fn solve(initial: &Grid) -> Option<Vec<Grid>> {
    initial
        .solve(&Config::default(), false)
        .ok()
        .and_then(|solution| solution.path)
}
