//! Candidate edge enumeration over the vertex grid.

use std::collections::BTreeSet;

/// Undirected link between two linear cell indices (`row * cols + col`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) a: usize,
    pub(crate) b: usize,
}

/// Every grid-adjacent pair, row-major: a cell's south link precedes its east link.
/// Wrapping appends row wrap links then column wrap links. Self-loops and pairs already
/// present (narrow grids where a wrap link doubles a plain one) are dropped.
pub(super) fn candidate_edges(rows: usize, cols: usize, wrapping: bool) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut seen = BTreeSet::new();
    let mut push = |a: usize, b: usize| {
        if a != b && seen.insert((a.min(b), a.max(b))) {
            edges.push(Edge { a, b });
        }
    };

    for row in 0..rows {
        for col in 0..cols {
            let cell = row * cols + col;
            if row + 1 < rows {
                push(cell, cell + cols);
            }
            if col + 1 < cols {
                push(cell, cell + 1);
            }
        }
    }

    if wrapping {
        for row in 0..rows {
            push(row * cols + cols - 1, row * cols);
        }
        for col in 0..cols {
            push((rows - 1) * cols + col, col);
        }
    }

    edges
}
