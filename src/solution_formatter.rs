use std::fmt::{self, Debug, Display, Formatter};

use crate::grid::Grid;

/// Every grid of a solution from start to goal, separated by empty lines
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    path: &'a [Grid],
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(path: &'a [Grid]) -> Self {
        Self { path }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for grid in self.path {
            writeln!(f, "{}", grid)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dir;

    #[test]
    fn formatting_solution() {
        let start = Grid::ordered().slide(Dir::Left).unwrap();
        let path = [start, Grid::ordered()];
        let expected = r"
1 2 3
4 5 6
7 0 8

1 2 3
4 5 6
7 8 0

"
        .trim_start_matches('\n');
        assert_eq!(SolutionFormatter::new(&path).to_string(), expected);
        assert_eq!(SolutionFormatter::new(&[]).to_string(), "");
    }
}
