use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::data::{Dir, Pos, CELLS, DIRECTIONS, SIZE};
use crate::parser::ParserErr;

/// One configuration of the board, row-major with 0 as the blank.
///
/// Can only be created from a permutation of 0..=8 so the blank always exists
/// and is unique. Successors are new grids, a grid is never modified in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: [u8; CELLS],
    blank: Pos,
}

pub const GOAL: Grid = Grid {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    blank: Pos { r: 2, c: 2 },
};

impl Grid {
    /// Validates that `tiles` is a permutation of 0..=8.
    pub fn from_tiles(tiles: &[u8]) -> Result<Grid, ParserErr> {
        if tiles.len() != CELLS {
            return Err(ParserErr::TileCount(tiles.len()));
        }

        let mut seen = [false; CELLS];
        let mut grid_tiles = [0; CELLS];
        // nine distinct values below nine always include 0, so this is always overwritten
        let mut blank = GOAL.blank;
        for (i, &tile) in tiles.iter().enumerate() {
            let value = usize::from(tile);
            if value >= CELLS {
                return Err(ParserErr::OutOfRange(i64::from(tile)));
            }
            if seen[value] {
                return Err(ParserErr::Duplicate(tile));
            }
            seen[value] = true;
            grid_tiles[i] = tile;
            if tile == 0 {
                blank = Pos::from_index(i);
            }
        }

        Ok(Grid {
            tiles: grid_tiles,
            blank,
        })
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL.tiles
    }

    /// Sum of Manhattan distances of all tiles except the blank from their goal positions.
    pub fn manhattan(&self) -> u16 {
        let mut dist = 0;
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            dist += Pos::from_index(i).dist(goal_pos(tile));
        }
        dist
    }

    /// Moves the blank one cell, `None` if that would leave the board.
    pub fn slide(&self, dir: Dir) -> Option<Grid> {
        let new_blank = self.blank.step(dir)?;
        let mut tiles = self.tiles;
        tiles.swap(self.blank.index(), new_blank.index());
        Some(Grid {
            tiles,
            blank: new_blank,
        })
    }

    /// All grids one move away, in the order of `DIRECTIONS`.
    pub fn neighbors(&self) -> Vec<(Dir, Grid)> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.slide(dir).map(|grid| (dir, grid)))
            .collect()
    }

    /// Direction the blank moved to get from `self` to `next`, if they're one move apart.
    pub fn dir_to(&self, next: &Grid) -> Option<Dir> {
        self.neighbors()
            .into_iter()
            .find(|(_, grid)| grid == next)
            .map(|(dir, _)| dir)
    }

    /// On a board with odd width only even permutations (ignoring the blank) are reachable.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.tiles.iter().cloned().filter(|&t| t != 0).collect();
        let mut inversions = 0;
        for (i, &a) in tiles.iter().enumerate() {
            inversions += tiles[i + 1..].iter().filter(|&&b| b < a).count();
        }
        inversions % 2 == 0
    }
}

fn goal_pos(tile: u8) -> Pos {
    let i = tile - 1;
    Pos::new(i / SIZE, i % SIZE)
}

impl Index<Pos> for Grid {
    type Output = u8;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.tiles[pos.index()]
    }
}

impl Display for Grid {
    /// Same format as the input - nine numbers separated by spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}
