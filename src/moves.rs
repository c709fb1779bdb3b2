use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::grid::Grid;

/// Directions the blank moved in, one per step of a solution.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    /// `None` if two consecutive grids are not exactly one move apart.
    pub fn from_path(path: &[Grid]) -> Option<Self> {
        let mut moves = Moves::default();
        for pair in path.windows(2) {
            moves.add(pair[0].dir_to(&pair[1])?);
        }
        Some(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    /// Grids visited when playing the moves from `initial`, including `initial`.
    pub fn replay(&self, initial: Grid) -> Option<Vec<Grid>> {
        let mut grids = vec![initial];
        let mut cur = initial;
        for &dir in self {
            cur = cur.slide(dir)?;
            grids.push(cur);
        }
        Some(grids)
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
