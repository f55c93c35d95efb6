//! Procedural dungeon generation split into coherent submodules.

mod content;
mod edges;
mod endpoints;
mod generator;
mod spanning;
mod topology;

use crate::config::DungeonConfig;
use crate::dungeon::Dungeon;
use crate::error::ConfigError;
use crate::rng::RandomSource;

pub use endpoints::{MAX_ENDPOINT_DRAWS, MIN_PATH_LOCATIONS};
pub use generator::MapGenerator;

pub fn generate_dungeon(
    config: &DungeonConfig,
    rng: &mut dyn RandomSource,
) -> Result<Dungeon, ConfigError> {
    MapGenerator::new(config.clone())?.generate(rng)
}

/// Builds a bare dungeon from explicit edges given as linear cell indices.
/// Used for hand-made fixtures; no treasure, arrows or monsters are placed.
#[cfg(test)]
pub(crate) fn assemble(
    rows: usize,
    cols: usize,
    wrapping: bool,
    links: &[(usize, usize)],
) -> Dungeon {
    let links: Vec<edges::Edge> = links.iter().map(|&(a, b)| edges::Edge { a, b }).collect();
    let locations = topology::build_locations(rows, cols, wrapping, &links);
    Dungeon::from_locations(rows, cols, wrapping, locations)
}
