use std::fmt::{self, Display, Formatter};

/// Remaining cost estimate used to order the fringe.
///
/// The variants that skip the blank are admissible and consistent for sliding tiles
/// so the first path found is a shortest one.
/// The `WithBlank` variants also score the blank like a tile. They can overestimate by one
/// and then the path found is not guaranteed to be shortest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Number of tiles (blank excluded) not on their goal cell
    MisplacedTiles,
    /// Sum of grid distances of each tile (blank excluded) from its goal cell
    Manhattan,
    /// Number of cells whose value differs from the goal, blank included
    MisplacedTilesWithBlank,
    /// Sum of grid distances of every value from its goal cell, blank included
    ManhattanWithBlank,
}

impl Heuristic {
    /// Same estimate but scoring the blank too
    pub fn with_blank(self) -> Self {
        match self {
            Heuristic::MisplacedTiles => Heuristic::MisplacedTilesWithBlank,
            Heuristic::Manhattan => Heuristic::ManhattanWithBlank,
            other => other,
        }
    }

    pub fn counts_blank(self) -> bool {
        match self {
            Heuristic::MisplacedTilesWithBlank | Heuristic::ManhattanWithBlank => true,
            Heuristic::MisplacedTiles | Heuristic::Manhattan => false,
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::MisplacedTiles
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::MisplacedTiles => write!(f, "misplaced-tiles"),
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::MisplacedTilesWithBlank => write!(f, "misplaced-tiles-with-blank"),
            Heuristic::ManhattanWithBlank => write!(f, "manhattan-with-blank"),
        }
    }
}

/// Which already known states a freshly generated successor is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dedup {
    /// Only drop successors that were already expanded.
    /// The same state may wait in the fringe several times.
    Closed,
    /// Also drop successors already waiting in the fringe with an equal or lower path cost.
    /// Can pick a different path among equally short ones.
    ClosedAndFringe,
}

impl Default for Dedup {
    fn default() -> Self {
        Dedup::Closed
    }
}

impl Display for Dedup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dedup::Closed => write!(f, "closed"),
            Dedup::ClosedAndFringe => write!(f, "closed-and-fringe"),
        }
    }
}
