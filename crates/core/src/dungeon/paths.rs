//! Path queries over the location graph.
//! Exhaustive enumeration is exponential on dense graphs; endpoint selection relies on the
//! depth-bounded search instead and tests use enumeration to cross-check it.

use std::collections::{BTreeSet, VecDeque};

use super::*;

impl Dungeon {
    /// Every simple path from `from` to `to`, each listed as the locations it visits.
    /// Neighbors are explored in direction order so the output is deterministic.
    pub fn simple_paths(&self, from: LocationId, to: LocationId) -> Vec<Vec<LocationId>> {
        let mut paths = Vec::new();
        let mut path = vec![from];
        let mut on_path = BTreeSet::from([from]);
        self.walk_simple_paths(to, &mut path, &mut on_path, &mut paths);
        paths
    }

    fn walk_simple_paths(
        &self,
        to: LocationId,
        path: &mut Vec<LocationId>,
        on_path: &mut BTreeSet<LocationId>,
        paths: &mut Vec<Vec<LocationId>>,
    ) {
        let Some(&current) = path.last() else {
            return;
        };
        if current == to {
            paths.push(path.clone());
            return;
        }
        for &next in self.adjacency(current).values() {
            if on_path.insert(next) {
                path.push(next);
                self.walk_simple_paths(to, path, on_path, paths);
                path.pop();
                on_path.remove(&next);
            }
        }
    }

    /// Whether some simple path from `from` to `to` visits fewer than `limit` locations.
    pub fn has_path_shorter_than(&self, from: LocationId, to: LocationId, limit: usize) -> bool {
        let mut on_path = BTreeSet::from([from]);
        self.search_short_path(from, to, 1, limit, &mut on_path)
    }

    fn search_short_path(
        &self,
        current: LocationId,
        to: LocationId,
        visited: usize,
        limit: usize,
        on_path: &mut BTreeSet<LocationId>,
    ) -> bool {
        if current == to {
            return visited < limit;
        }
        if visited + 1 >= limit {
            return false;
        }
        for &next in self.adjacency(current).values() {
            if on_path.insert(next) {
                let found = self.search_short_path(next, to, visited + 1, limit, on_path);
                on_path.remove(&next);
                if found {
                    return true;
                }
            }
        }
        false
    }

    /// Fewest locations on any path between the two, endpoints included.
    pub fn shortest_path_len(&self, from: LocationId, to: LocationId) -> Option<usize> {
        let mut seen = BTreeSet::from([from]);
        let mut queue = VecDeque::from([(from, 1)]);
        while let Some((current, len)) = queue.pop_front() {
            if current == to {
                return Some(len);
            }
            for &next in self.adjacency(current).values() {
                if seen.insert(next) {
                    queue.push_back((next, len + 1));
                }
            }
        }
        None
    }

    pub fn is_connected(&self) -> bool {
        let Some(first) = self.locations.first() else {
            return true;
        };
        let mut seen = BTreeSet::from([first.id]);
        let mut queue = VecDeque::from([first.id]);
        while let Some(current) = queue.pop_front() {
            for &next in self.adjacency(current).values() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len() == self.locations.len()
    }
}
