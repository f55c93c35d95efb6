//! Degree classification and compass directions for the selected edges.

use super::edges::Edge;
use crate::state::{Location, LocationKind};
use crate::types::{Direction, LocationId, Pos};

/// Turns confirmed edges into located, classified cells with symmetric neighbor tables.
///
/// Panics if a cell ends up with a degree no generated graph can have; that is a defect in
/// edge selection, not a recoverable condition.
pub(crate) fn build_locations(
    rows: usize,
    cols: usize,
    wrapping: bool,
    edges: &[Edge],
) -> Vec<Location> {
    let cell_count = rows * cols;
    let mut degree = vec![0_usize; cell_count];
    for edge in edges {
        degree[edge.a] += 1;
        degree[edge.b] += 1;
    }

    let mut locations: Vec<Location> = (0..cell_count)
        .map(|cell| {
            let kind = match degree[cell] {
                2 => LocationKind::Passage,
                1 | 3 | 4 => LocationKind::empty_cave(),
                0 if cell_count == 1 => LocationKind::empty_cave(),
                other => panic!("cell {cell} has impossible degree {other}"),
            };
            let pos = Pos { row: cell / cols, col: cell % cols };
            Location::new(LocationId(cell), pos, kind)
        })
        .collect();

    for edge in edges {
        let forward = direction_between(rows, cols, wrapping, edge.a, edge.b);
        let backward = direction_between(rows, cols, wrapping, edge.b, edge.a);
        debug_assert_eq!(forward.opposite(), backward);
        link(&mut locations[edge.a], forward, edge.b);
        link(&mut locations[edge.b], backward, edge.a);
    }

    locations
}

fn link(location: &mut Location, direction: Direction, to: usize) {
    if let Err(error) = location.add_neighbor(direction, LocationId(to)) {
        panic!("inconsistent edge set: {error}");
    }
}

/// Compass direction of `to` as seen from `from`. A wrap link points off the edge it
/// crosses: from column 0 the last column lies WEST, from the last row row 0 lies SOUTH.
pub(crate) fn direction_between(
    rows: usize,
    cols: usize,
    wrapping: bool,
    from: usize,
    to: usize,
) -> Direction {
    let (from_row, from_col) = (from / cols, from % cols);
    let (to_row, to_col) = (to / cols, to % cols);

    if from_col == to_col {
        if to_row + 1 == from_row {
            return Direction::North;
        }
        if from_row + 1 == to_row {
            return Direction::South;
        }
    }
    if from_row == to_row {
        if to_col + 1 == from_col {
            return Direction::West;
        }
        if from_col + 1 == to_col {
            return Direction::East;
        }
    }
    if wrapping {
        if from_row == to_row {
            if from_col == 0 && to_col + 1 == cols {
                return Direction::West;
            }
            if from_col + 1 == cols && to_col == 0 {
                return Direction::East;
            }
        }
        if from_col == to_col {
            if from_row == 0 && to_row + 1 == rows {
                return Direction::North;
            }
            if from_row + 1 == rows && to_row == 0 {
                return Direction::South;
            }
        }
    }
    panic!("cells {from} and {to} are not adjacent on a {rows}x{cols} grid");
}
