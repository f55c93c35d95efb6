use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub rows: usize,
    pub cols: usize,
    /// Extra cycle-forming edges added on top of the spanning tree.
    pub interconnectivity: usize,
    pub wrapping: bool,
    /// Percentage of caves that receive treasure and of cells that receive arrows.
    pub spread_percent: f64,
    /// Number of monsters; one always guards the end cave.
    pub difficulty: usize,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            interconnectivity: 2,
            wrapping: false,
            spread_percent: 20.0,
            difficulty: 2,
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(ConfigError::Dimensions { rows: self.rows, cols: self.cols });
        }
        if !self.spread_percent.is_finite() || !(0.0..=100.0).contains(&self.spread_percent) {
            return Err(ConfigError::Spread(self.spread_percent));
        }
        if self.difficulty < 1 {
            return Err(ConfigError::NoMonsters);
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub players: u8,
    pub dungeon: DungeonConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { players: 1, dungeon: DungeonConfig::default() }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=2).contains(&self.players) {
            return Err(ConfigError::PlayerCount(self.players));
        }
        self.dungeon.validate()
    }
}
