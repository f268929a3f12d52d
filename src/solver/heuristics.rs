use crate::config::Heuristic;
use crate::data::{Pos, CELLS};
use crate::grid::Grid;

/// Estimates the remaining number of slides to a fixed goal.
#[derive(Debug, Clone)]
pub(crate) struct Evaluator {
    heuristic: Heuristic,
    count_blank: bool,
    goal: Grid,
    // goal position of each value
    goal_positions: [Pos; CELLS],
}

impl Evaluator {
    pub(crate) fn new(heuristic: Heuristic, goal: Grid) -> Self {
        let mut goal_positions = [Pos::new(0, 0); CELLS];
        for (value, pos) in goal_positions.iter_mut().enumerate() {
            *pos = goal.pos_of(value as u8);
        }
        Self {
            heuristic,
            count_blank: heuristic.counts_blank(),
            goal,
            goal_positions,
        }
    }

    pub(crate) fn estimate(&self, grid: &Grid) -> u16 {
        match self.heuristic {
            Heuristic::MisplacedTiles | Heuristic::MisplacedTilesWithBlank => {
                self.misplaced_tiles(grid)
            }
            Heuristic::Manhattan | Heuristic::ManhattanWithBlank => self.manhattan(grid),
        }
    }

    fn misplaced_tiles(&self, grid: &Grid) -> u16 {
        grid.cells()
            .iter()
            .zip(self.goal.cells())
            .filter(|&(&value, &goal)| (self.count_blank || value != 0) && value != goal)
            .count() as u16
    }

    fn manhattan(&self, grid: &Grid) -> u16 {
        let mut dist_sum = 0;
        for (index, &value) in grid.cells().iter().enumerate() {
            if value == 0 && !self.count_blank {
                continue;
            }
            dist_sum += Pos::from_index(index).dist(self.goal_positions[usize::from(value)]);
        }
        dist_sum
    }
}
