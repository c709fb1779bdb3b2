use std::error::Error;
use std::fs;

use log::debug;

use crate::grid::Grid;
use crate::LoadGrid;

impl LoadGrid for str {
    fn load_grid(&self) -> Result<Grid, Box<dyn Error>> {
        debug!("Loading {}", self);
        let contents = fs::read_to_string(self)?;
        Ok(contents.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::grid::GOAL;

    #[test]
    fn loading_puzzles() {
        assert_eq!("puzzles/00-solved.txt".load_grid().unwrap(), GOAL);
        assert_eq!(
            "puzzles/02-example.txt".load_grid().unwrap().tiles(),
            &[0, 5, 7, 1, 4, 3, 6, 8, 2]
        );
    }

    #[test]
    fn loading_missing() {
        assert!("puzzles/does-not-exist.txt".load_grid().is_err());
    }
}
