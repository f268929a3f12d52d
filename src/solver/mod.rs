pub(crate) mod a_star;
mod heuristics;

use std::fmt::{self, Debug, Formatter};

use fnv::{FnvHashMap, FnvHashSet};
use log::{debug, info, trace};
use typed_arena::Arena;

use crate::config::{Dedup, Heuristic};
use crate::data::DIRECTIONS;
use crate::grid::Grid;
use crate::moves::Moves;
use crate::puzzle::Puzzle;
use crate::Solve;

use self::a_star::{Fringe, SearchNode};
use self::heuristics::Evaluator;

pub use self::a_star::Stats;

pub struct SolverOk {
    /// From start to goal inclusive, `None` if the goal can't be reached
    pub path: Option<Vec<Grid>>,
    pub stats: Stats,
    pub heuristic: Heuristic,
    pub dedup: Dedup,
}

impl SolverOk {
    fn new(path: Option<Vec<Grid>>, stats: Stats, heuristic: Heuristic, dedup: Dedup) -> Self {
        Self {
            path,
            stats,
            heuristic,
            dedup,
        }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path.as_ref().map(|path| Moves::from_path(path))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "{}: {}", self.heuristic, path.len() - 1)?,
        }
        writeln!(f, "dedup: {}", self.dedup)?;
        write!(f, "{}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, heuristic: Heuristic, dedup: Dedup, print_status: bool) -> SolverOk {
        search(self, heuristic, dedup, print_status)
    }
}

fn search(puzzle: &Puzzle, heuristic: Heuristic, dedup: Dedup, print_status: bool) -> SolverOk {
    debug!("Search called: {} with {} dedup", heuristic, dedup);
    if !puzzle.solvable() {
        info!("Start and goal have different parity, expecting to exhaust all reachable states");
    }

    let evaluator = Evaluator::new(heuristic, puzzle.goal);
    let mut stats = Stats::new();

    // every node stays put until the search returns, children point at their parents
    let nodes = Arena::new();
    let mut fringe = Fringe::new();
    let mut closed = FnvHashSet::default();
    // lowest known dist of each state waiting in the fringe, only used with ClosedAndFringe
    let mut fringe_dists = FnvHashMap::default();

    let start = nodes.alloc(SearchNode::new(
        puzzle.start,
        None,
        0,
        evaluator.estimate(&puzzle.start),
    ));
    fringe.push(start);

    while let Some(cur_node) = fringe.pop() {
        if closed.contains(&cur_node.grid) {
            stats.add_duplicate(cur_node);
            continue;
        }

        if cur_node.grid == puzzle.goal {
            debug!("Solved, backtracking path");
            debug_assert_eq!(stats.nodes_expanded() as usize, closed.len());
            let path = backtrack_path(cur_node);
            return SolverOk::new(Some(path), stats, heuristic, dedup);
        }

        closed.insert(cur_node.grid);
        fringe_dists.remove(&cur_node.grid);
        if stats.add_expanded(cur_node) && print_status {
            println!("Expanded new depth: {}", cur_node.dist);
            print!("{}", stats);
        }
        trace!("Expanding (g {}, f {}):\n{}", cur_node.dist, cur_node.cost, cur_node.grid);

        let dist = cur_node.dist + 1;
        for grid in expand(&cur_node.grid) {
            stats.add_generated(dist);
            if closed.contains(&grid) {
                continue;
            }
            if dedup == Dedup::ClosedAndFringe {
                let known = fringe_dists.get(&grid).cloned();
                if known.map_or(false, |known| known <= dist) {
                    continue;
                }
                fringe_dists.insert(grid, dist);
            }

            let h = evaluator.estimate(&grid);
            fringe.push(nodes.alloc(SearchNode::new(grid, Some(cur_node), dist, h)));
        }
    }

    debug!("Fringe exhausted after {} expansions", closed.len());
    SolverOk::new(None, stats, heuristic, dedup)
}

/// All grids one slide away, in the order of `DIRECTIONS`
pub(crate) fn expand(grid: &Grid) -> impl Iterator<Item = Grid> {
    let grid = *grid;
    DIRECTIONS.iter().filter_map(move |&dir| grid.slide(dir))
}

fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<Grid> {
    let mut ret = Vec::with_capacity(usize::from(final_node.dist) + 1);
    let mut node = final_node;
    loop {
        ret.push(node.grid);
        match node.prev {
            Some(prev) => node = prev,
            None => {
                ret.reverse();
                return ret;
            }
        }
    }
}
