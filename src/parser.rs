use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::CELLS;
use crate::grid::Grid;
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    NotANumber(String),
    /// Found, expected
    WrongCount(usize, usize),
    OutOfRange(i32),
    Duplicate(u8),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::NotANumber(ref token) => write!(f, "Not a number: {}", token),
            ParserErr::WrongCount(found, expected) => write!(
                f,
                "Wrong number of values: {} (expected {})",
                found, expected
            ),
            ParserErr::OutOfRange(value) => {
                write!(f, "Value out of range: {} (must be 0-{})", value, CELLS - 1)
            }
            ParserErr::Duplicate(value) => write!(f, "Value appears more than once: {}", value),
        }
    }
}

impl Error for ParserErr {}

pub(crate) fn parse_grid(text: &str) -> Result<Grid, ParserErr> {
    let values = parse_values(text)?;
    if values.len() != CELLS {
        return Err(ParserErr::WrongCount(values.len(), CELLS));
    }
    grid_from_values(&values)
}

/// Start grid followed by goal grid, both row-major
pub(crate) fn parse_puzzle(text: &str) -> Result<Puzzle, ParserErr> {
    let values = parse_values(text)?;
    if values.len() != 2 * CELLS {
        return Err(ParserErr::WrongCount(values.len(), 2 * CELLS));
    }
    let start = grid_from_values(&values[..CELLS])?;
    let goal = grid_from_values(&values[CELLS..])?;
    Ok(Puzzle::new(start, goal))
}

/// Whitespace separated integers. A token of exactly 9 digits is a whole grid written compactly.
fn parse_values(text: &str) -> Result<Vec<i32>, ParserErr> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        if token.len() == CELLS && token.chars().all(|c| c.is_ascii_digit()) {
            values.extend(token.bytes().map(|b| i32::from(b - b'0')));
        } else {
            let value = token
                .parse()
                .map_err(|_| ParserErr::NotANumber(token.to_owned()))?;
            values.push(value);
        }
    }
    Ok(values)
}

fn grid_from_values(values: &[i32]) -> Result<Grid, ParserErr> {
    let mut cells = [0; CELLS];
    for (cell, &value) in cells.iter_mut().zip(values) {
        if value < 0 || value >= CELLS as i32 {
            return Err(ParserErr::OutOfRange(value));
        }
        *cell = value as u8;
    }
    Grid::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_grids() {
        let expected = Grid::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();

        let rows = r"
1 2 3
4 0 6
7 5 8
";
        assert_eq!(parse_grid(rows).unwrap(), expected);
        assert_eq!(parse_grid("1 2 3 4 0 6 7 5 8").unwrap(), expected);
        assert_eq!(parse_grid("  1\t2 3\n\n4 0 6 7 5 8  ").unwrap(), expected);
        assert_eq!(parse_grid("123406758").unwrap(), expected);
    }

    #[test]
    fn parsing_puzzles() {
        let text = r"
1 2 3
4 0 6
7 5 8

1 2 3
4 5 6
7 8 0
";
        let puzzle = parse_puzzle(text).unwrap();
        assert_eq!(puzzle.start, parse_grid("123406758").unwrap());
        assert_eq!(puzzle.goal, Grid::ordered());

        assert_eq!(parse_puzzle("123406758 123456780").unwrap(), puzzle);
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            parse_grid("1 2 3 4 x 6 7 5 8").unwrap_err(),
            ParserErr::NotANumber("x".to_owned())
        );
        assert_eq!(
            parse_grid("1 2 3 4 0 6 7 5").unwrap_err(),
            ParserErr::WrongCount(8, 9)
        );
        assert_eq!(parse_grid("").unwrap_err(), ParserErr::WrongCount(0, 9));
        assert_eq!(
            parse_grid("1 2 3 4 0 6 7 5 -8").unwrap_err(),
            ParserErr::OutOfRange(-8)
        );
        assert_eq!(
            parse_grid("1 2 3 4 0 6 7 5 12").unwrap_err(),
            ParserErr::OutOfRange(12)
        );
        assert_eq!(
            parse_grid("1 2 3 4 0 6 7 5 5").unwrap_err(),
            ParserErr::Duplicate(5)
        );
        assert_eq!(
            parse_puzzle("123406758").unwrap_err(),
            ParserErr::WrongCount(9, 18)
        );
        assert_eq!(
            parse_puzzle("123406758 123456788").unwrap_err(),
            ParserErr::Duplicate(8)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::WrongCount(8, 9).to_string(),
            "Wrong number of values: 8 (expected 9)"
        );
        assert_eq!(
            parse_puzzle("1 2 3 4 0 6 7 5 8 1 2 3").unwrap_err().to_string(),
            "Wrong number of values: 12 (expected 18)"
        );
        assert_eq!(
            ParserErr::OutOfRange(9).to_string(),
            "Value out of range: 9 (must be 0-8)"
        );
    }
}
