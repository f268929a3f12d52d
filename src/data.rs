use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Rows and columns of the grid
pub(crate) const SIZE: usize = 3;
pub(crate) const CELLS: usize = SIZE * SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Pos {
    pub(crate) r: i8,
    pub(crate) c: i8,
}

impl Pos {
    pub(crate) fn new(r: i8, c: i8) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize) -> Pos {
        debug_assert!(index < CELLS);
        Pos::new((index / SIZE) as i8, (index % SIZE) as i8)
    }

    /// `None` when the position is outside the grid
    pub(crate) fn index(self) -> Option<usize> {
        let size = SIZE as i8;
        if self.r < 0 || self.c < 0 || self.r >= size || self.c >= size {
            None
        } else {
            Some(self.r as usize * SIZE + self.c as usize)
        }
    }

    pub(crate) fn dist(self, other: Pos) -> u16 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u16
    }

    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        DIRECTIONS.iter().cloned().find(|&dir| self + dir == other)
    }
}

/// Direction the blank moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which successors are generated - decides ties among equal cost children.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

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

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        match dir {
            Dir::Up => Pos::new(self.r - 1, self.c),
            Dir::Down => Pos::new(self.r + 1, self.c),
            Dir::Left => Pos::new(self.r, self.c - 1),
            Dir::Right => Pos::new(self.r, self.c + 1),
        }
    }
}
