use std::fmt::{self, Display, Formatter};

/// Width and height of the board.
pub const SIZE: u8 = 3;
pub(crate) const CELLS: usize = (SIZE as usize) * (SIZE as usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub(crate) fn new(r: u8, c: u8) -> Pos {
        assert!(r < SIZE && c < SIZE);
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize) -> Pos {
        let size = usize::from(SIZE);
        Pos::new((index / size) as u8, (index % size) as u8)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.r) * usize::from(SIZE) + usize::from(self.c)
    }

    pub fn dist(self, other: Pos) -> u16 {
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let dc = (i16::from(self.c) - i16::from(other.c)).abs();
        (dr + dc) as u16
    }

    /// Neighbor in `dir` or `None` if it would be off the board.
    pub(crate) fn step(self, dir: Dir) -> Option<Pos> {
        // signed so we can check the lower bound
        let (dr, dc) = dir.offset();
        let r = i16::from(self.r) + dr;
        let c = i16::from(self.c) + dc;
        if r < 0 || c < 0 || r >= i16::from(SIZE) || c >= i16::from(SIZE) {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Expansion order - only affects tie-breaking, keep it fixed so traces are reproducible.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    fn offset(self) -> (i16, i16) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}
