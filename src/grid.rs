use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use crate::data::{Dir, Pos, CELLS, SIZE};
use crate::parser::{self, ParserErr};

/// 3x3 board, row-major. Holds each of 0-8 exactly once, 0 is the blank.
///
/// The only way to create one is through validation so the invariant always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [u8; CELLS],
}

impl Grid {
    pub fn new(cells: [u8; CELLS]) -> Result<Grid, ParserErr> {
        let mut seen = [false; CELLS];
        for &value in &cells {
            let index = usize::from(value);
            if index >= CELLS {
                return Err(ParserErr::OutOfRange(i32::from(value)));
            }
            if seen[index] {
                return Err(ParserErr::Duplicate(value));
            }
            seen[index] = true;
        }
        Ok(Grid { cells })
    }

    /// `1 2 3 / 4 5 6 / 7 8 0` - the usual goal
    pub fn ordered() -> Grid {
        Grid {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub(crate) fn blank(&self) -> Pos {
        self.pos_of(0)
    }

    pub(crate) fn pos_of(&self, value: u8) -> Pos {
        let index = self
            .cells
            .iter()
            .position(|&v| v == value)
            .expect("grid holds every value exactly once");
        Pos::from_index(index)
    }

    /// Swaps the blank with its neighbor in `dir`, `None` if that would leave the grid.
    pub(crate) fn slide(&self, dir: Dir) -> Option<Grid> {
        let blank = self.blank();
        let target = (blank + dir).index()?;
        let mut cells = self.cells;
        cells.swap(blank.index()?, target);
        Some(Grid { cells })
    }

    /// Pairs of tiles (blank excluded) that appear in reverse order when read row-major.
    pub(crate) fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().cloned().filter(|&v| v != 0).collect();
        let mut cnt = 0;
        for (i, a) in tiles.iter().enumerate() {
            cnt += tiles[i + 1..].iter().filter(|&b| b < a).count();
        }
        cnt
    }
}

impl Index<Pos> for Grid {
    type Output = u8;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.index().expect("position inside the grid")]
    }
}

impl FromStr for Grid {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_grid(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            let row: Vec<_> = row.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
