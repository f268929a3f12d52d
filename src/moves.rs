use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::grid::Grid;

/// One slide, named by the direction the blank travels
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) dir: Dir,
}

impl Move {
    pub(crate) fn new(dir: Dir) -> Self {
        Move { dir }
    }

    pub fn dir(self) -> Dir {
        self.dir
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    #[cfg(test)]
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    /// Consecutive grids must differ by exactly one slide.
    pub(crate) fn from_path(path: &[Grid]) -> Self {
        let mut moves = Moves::default();
        for pair in path.windows(2) {
            let (old, new) = (pair[0].blank(), pair[1].blank());
            let dir = old
                .dir_to(new)
                .expect("consecutive grids must be one slide apart");
            debug_assert_eq!(pair[0].slide(dir), Some(pair[1]));
            moves.add(Move::new(dir));
        }
        moves
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
