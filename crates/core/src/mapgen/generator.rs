//! High-level dungeon generation orchestration that composes topology and content.

use super::content::{distribute_arrows, distribute_treasure};
use super::edges::candidate_edges;
use super::spanning::{add_cycle_edges, select_spanning_tree};
use super::topology::build_locations;
use crate::config::DungeonConfig;
use crate::dungeon::Dungeon;
use crate::error::ConfigError;
use crate::rng::RandomSource;
use crate::types::LocationId;

pub struct MapGenerator {
    config: DungeonConfig,
}

impl MapGenerator {
    pub fn new(config: DungeonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Builds the graph, stocks it and creates the monsters. Start, end and monster seats
    /// are chosen later by [`Dungeon::assign_start_and_end`].
    ///
    /// Fails when the drawn graph leaves fewer than two caves or not enough caves to seat
    /// every monster away from the start.
    pub fn generate(&self, rng: &mut dyn RandomSource) -> Result<Dungeon, ConfigError> {
        let DungeonConfig { rows, cols, wrapping, interconnectivity, spread_percent, difficulty } =
            self.config;

        let candidates = candidate_edges(rows, cols, wrapping);
        let mut selection = select_spanning_tree(rows * cols, candidates, rng);
        add_cycle_edges(&mut selection, interconnectivity, rng);
        let mut locations = build_locations(rows, cols, wrapping, &selection.confirmed);

        let caves: Vec<LocationId> =
            locations.iter().filter(|location| location.is_cave()).map(|l| l.id).collect();
        if caves.len() < 2 {
            return Err(ConfigError::TooFewCaves { found: caves.len() });
        }
        let capacity = caves.len() - 1;
        if difficulty > capacity {
            return Err(ConfigError::TooManyMonsters { requested: difficulty, capacity });
        }

        distribute_treasure(&mut locations, &caves, spread_percent, rng);
        distribute_arrows(&mut locations, rows, cols, spread_percent, rng);

        let mut dungeon = Dungeon::from_locations(rows, cols, wrapping, locations);
        dungeon.spawn_monsters(difficulty);
        Ok(dungeon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, SeededSource};

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = DungeonConfig { rows: 0, ..DungeonConfig::default() };
        assert!(matches!(MapGenerator::new(config), Err(ConfigError::Dimensions { .. })));
    }

    #[test]
    fn same_seed_same_dungeon() {
        let generator = MapGenerator::new(DungeonConfig {
            rows: 7,
            cols: 6,
            wrapping: true,
            interconnectivity: 5,
            ..DungeonConfig::default()
        })
        .expect("valid");
        let first = generator.generate(&mut SeededSource::new(41)).expect("generate");
        let second = generator.generate(&mut SeededSource::new(41)).expect("generate");
        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.monster_count(), 2);
        assert!(first.monsters().all(|monster| !monster.is_resident()));
    }

    #[test]
    fn all_passage_ring_has_too_few_caves() {
        // With every draw at index 0 the 2x2 grid keeps (0,2), (0,1), (1,3) and the one
        // extra edge closes the ring: four passages.
        let generator = MapGenerator::new(DungeonConfig {
            rows: 2,
            cols: 2,
            interconnectivity: 1,
            ..DungeonConfig::default()
        })
        .expect("valid");
        assert_eq!(
            generator.generate(&mut ScriptedSource::new(vec![0])).map(|_| ()),
            Err(ConfigError::TooFewCaves { found: 0 })
        );
    }

    #[test]
    fn monsters_beyond_cave_capacity_are_rejected() {
        // A 1x4 line always has exactly two caves: room for the guard only.
        let config = DungeonConfig { rows: 1, cols: 4, difficulty: 2, ..DungeonConfig::default() };
        let generator = MapGenerator::new(config).expect("valid");
        assert_eq!(
            generator.generate(&mut SeededSource::new(9)).map(|_| ()),
            Err(ConfigError::TooManyMonsters { requested: 2, capacity: 1 })
        );
    }
}
