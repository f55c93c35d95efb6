//! Randomized Kruskal selection and extra cycle edges.

use std::mem;

use super::edges::Edge;
use crate::rng::RandomSource;

/// Union-find over cell indices with path halving and union by size.
pub(super) struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    pub(super) fn new(count: usize) -> Self {
        Self { parent: (0..count).collect(), size: vec![1; count] }
    }

    pub(super) fn find(&mut self, mut item: usize) -> usize {
        while self.parent[item] != item {
            self.parent[item] = self.parent[self.parent[item]];
            item = self.parent[item];
        }
        item
    }

    /// Merges the two sets; returns false when they were already one.
    pub(super) fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }
}

#[derive(Debug, Default)]
pub(super) struct Selection {
    pub(super) confirmed: Vec<Edge>,
    /// Edges that would have closed a cycle, in the order they were rejected.
    pub(super) leftover: Vec<Edge>,
}

/// Draws candidates in random order and keeps each one that joins two components.
pub(super) fn select_spanning_tree(
    cell_count: usize,
    mut candidates: Vec<Edge>,
    rng: &mut dyn RandomSource,
) -> Selection {
    let mut sets = DisjointSets::new(cell_count);
    let mut selection = Selection::default();
    while !candidates.is_empty() {
        let edge = candidates.remove(rng.next_in(0, candidates.len()));
        if sets.union(edge.a, edge.b) {
            selection.confirmed.push(edge);
        } else {
            selection.leftover.push(edge);
        }
    }
    selection
}

/// Moves up to `interconnectivity` random leftovers into the confirmed set.
pub(super) fn add_cycle_edges(
    selection: &mut Selection,
    interconnectivity: usize,
    rng: &mut dyn RandomSource,
) {
    for _ in 0..interconnectivity.min(selection.leftover.len()) {
        let edge = selection.leftover.remove(rng.next_in(0, selection.leftover.len()));
        selection.confirmed.push(edge);
    }
}
