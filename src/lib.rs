// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod grid;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;

mod data;

use std::error::Error;

use crate::config::{Dedup, Heuristic};
use crate::puzzle::Puzzle;
use crate::solver::SolverOk;

pub use crate::data::Dir;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

pub trait Solve {
    /// Runs to completion - either finds a shortest path or exhausts every reachable state.
    fn solve(&self, heuristic: Heuristic, dedup: Dedup, print_status: bool) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use separator::Separatable;

    use crate::config::Heuristic::{self, Manhattan, MisplacedTiles};

    use super::*;

    #[test]
    fn test_puzzles() {
        const SLOW_IN_DEBUG: i32 = 1;
        const OK: i32 = 0;

        #[cfg(debug_assertions)]
        const MAX_DIFFICULTY: i32 = 0;

        #[cfg(not(debug_assertions))]
        const MAX_DIFFICULTY: i32 = 1;

        let puzzles = [
            (MisplacedTiles, "00-solved.txt", OK),
            (MisplacedTiles, "01-one-step.txt", OK),
            (MisplacedTiles, "02-two-steps.txt", OK),
            (MisplacedTiles, "03-custom-goal.txt", OK),
            (MisplacedTiles, "04-six-steps.txt", OK),
            (MisplacedTiles, "05-fourteen-steps.txt", OK),
            (MisplacedTiles, "06-twenty-two-steps.txt", OK),
            (MisplacedTiles, "07-hardest.txt", SLOW_IN_DEBUG),
            (MisplacedTiles, "no-solution-swapped.txt", SLOW_IN_DEBUG),
            (Manhattan, "00-solved.txt", OK),
            (Manhattan, "01-one-step.txt", OK),
            (Manhattan, "02-two-steps.txt", OK),
            (Manhattan, "03-custom-goal.txt", OK),
            (Manhattan, "04-six-steps.txt", OK),
            (Manhattan, "05-fourteen-steps.txt", OK),
            (Manhattan, "06-twenty-two-steps.txt", OK),
            (Manhattan, "07-hardest.txt", OK),
            (Manhattan, "no-solution-swapped.txt", SLOW_IN_DEBUG),
        ];

        let puzzles: Vec<_> = puzzles
            .iter()
            .filter(|&&(_, _, difficulty)| difficulty <= MAX_DIFFICULTY)
            .collect();
        let succeeded = puzzles
            .iter()
            .filter(|&(heuristic, puzzle_name, _)| test_puzzle(*heuristic, puzzle_name))
            .count();
        assert_eq!(succeeded, puzzles.len());
    }

    fn test_puzzle(heuristic: Heuristic, puzzle_name: &str) -> bool {
        use std::fmt::Write;
        use std::time::Instant;

        let heuristic_name = heuristic.to_string();
        let puzzle_path = format!("puzzles/{}", puzzle_name);
        let result_dir = format!("solutions/{}", heuristic_name);
        let result_file = format!("{}/{}", result_dir, puzzle_name);

        println!("Solving {} using {}", puzzle_path, heuristic_name);
        let started = Instant::now();

        let puzzle = puzzle_path.load_puzzle().unwrap();
        let solution = puzzle.solve(heuristic, Dedup::Closed, false);

        // innacurate, only useful to quickly see which puzzles are difficult
        println!(
            "Solved {} using {} in approximately {} ms",
            puzzle_path,
            heuristic_name,
            (started.elapsed().as_millis() as u64).separated_string(),
        );

        let mut out = String::new();
        match solution.moves() {
            None => writeln!(out, "No solution").unwrap(),
            Some(moves) => {
                writeln!(out, "{}", moves).unwrap();
                writeln!(out, "Steps: {}", moves.len()).unwrap();
            }
        }
        write!(out, "{}", solution.stats).unwrap();
        if let Some(ref path) = solution.path {
            writeln!(out).unwrap();
            write!(out, "{}", puzzle.format_solution(path)).unwrap();
        }

        if !Path::new(&result_dir).exists() {
            fs::create_dir_all(&result_dir).unwrap();
        }

        if !Path::new(&result_file).exists() {
            fs::write(&result_file, &out).unwrap();
            print!("Solution:\n{}", out);
            println!("         >>> SAVED NEW SOLUTION <<<");
        }

        let expected = fs::read_to_string(&result_file).unwrap();
        if out != expected {
            print!("Expected:\n{}", expected);
            print!("Got:\n{}", out);
            println!("         >>> DIFFERENT <<<\n\n");
            false
        } else {
            true
        }
    }
}
