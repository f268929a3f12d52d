use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::grid::Grid;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    generated: Vec<u32>,
    expanded: Vec<u32>,
    duplicates: Vec<u32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Every successor produced, including those dropped right away
    pub fn nodes_generated(&self) -> u32 {
        self.generated.iter().sum()
    }

    /// Equals the size of the closed set
    pub fn nodes_expanded(&self) -> u32 {
        self.expanded.iter().sum()
    }

    /// Fringe entries discarded because their state got expanded through another node first
    pub fn duplicates(&self) -> u32 {
        self.duplicates.iter().sum()
    }

    pub(crate) fn add_generated(&mut self, depth: u16) -> bool {
        Self::add(&mut self.generated, depth)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.expanded, node.dist)
    }

    pub(crate) fn add_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicates, node.dist)
    }

    /// Returns true when this is the first count at `depth`
    fn add(counts: &mut Vec<u32>, depth: u16) -> bool {
        let mut ret = false;
        let depth = usize::from(depth);

        // while because duplicates can skip depths
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    pub fn depth_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Generated"),
            Cell::new("Expanded"),
            Cell::new("Duplicates"),
        ]));

        let depths = self
            .generated
            .len()
            .max(self.expanded.len())
            .max(self.duplicates.len());
        for depth in 0..depths {
            let cnt = |counts: &Vec<u32>| counts.get(depth).cloned().unwrap_or(0);
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&cnt(&self.generated).separated_string()),
                Cell::new(&cnt(&self.expanded).separated_string()),
                Cell::new(&cnt(&self.duplicates).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "generated by depth: {:?}", self.generated)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicates)?;
        writeln!(f, "total generated: {}", self.nodes_generated().separated_string())?;
        writeln!(f, "total expanded: {}", self.nodes_expanded().separated_string())?;
        writeln!(f, "total duplicates: {}", self.duplicates().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes generated: {}", self.nodes_generated().separated_string())?;
        writeln!(f, "Nodes expanded: {}", self.nodes_expanded().separated_string())
    }
}

/// Never moves once allocated so children can point at it.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) grid: Grid,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    /// g - slides from start
    pub(crate) dist: u16,
    /// f = g + h
    pub(crate) cost: u16,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(grid: Grid, prev: Option<&'a SearchNode<'a>>, dist: u16, h: u16) -> Self {
        let cost = dist.checked_add(h).expect("path cost overflow");
        Self {
            grid,
            prev,
            dist,
            cost,
        }
    }

    #[cfg(test)]
    pub(crate) fn h(&self) -> u16 {
        self.cost - self.dist
    }
}

#[derive(Debug)]
struct Entry<'a> {
    cost: u16,
    seq: usize,
    node: &'a SearchNode<'a>,
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Entry<'_> {}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.seq).cmp(&(other.cost, other.seq))
    }
}

/// Open set. Pops the lowest total cost, the earliest pushed node among equal costs.
///
/// Nodes are never removed from the middle, callers skip entries whose state is already closed.
#[derive(Debug)]
pub(crate) struct Fringe<'a> {
    heap: BinaryHeap<Reverse<Entry<'a>>>,
    pushed: usize,
}

impl<'a> Fringe<'a> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub(crate) fn push(&mut self, node: &'a SearchNode<'a>) {
        self.heap.push(Reverse(Entry {
            cost: node.cost,
            seq: self.pushed,
            node,
        }));
        self.pushed += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
