use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::fs;
use std::str::FromStr;

use crate::grid::Grid;
use crate::parser::{self, ParserErr};
use crate::solution_formatter::SolutionFormatter;
use crate::LoadPuzzle;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub start: Grid,
    pub goal: Grid,
}

impl Puzzle {
    pub fn new(start: Grid, goal: Grid) -> Self {
        Puzzle { start, goal }
    }

    /// Slides never change inversion parity on an odd width grid,
    /// so only start and goal with equal parity are connected.
    pub fn solvable(&self) -> bool {
        self.start.inversions() % 2 == self.goal.inversions() % 2
    }

    pub fn format_solution<'a>(&self, path: &'a [Grid]) -> SolutionFormatter<'a> {
        SolutionFormatter::new(path)
    }
}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_puzzle(s)
    }
}

impl LoadPuzzle for str {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        Ok(text.parse()?)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.start)?;
        write!(f, "{}", self.goal)
    }
}

impl Debug for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
