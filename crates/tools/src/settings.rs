//! Command-line overrides layered over an optional TOML config.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dungeon_core::GameConfig;

use crate::files::load_config;

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML file with a game config; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub players: Option<u8>,
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long)]
    pub cols: Option<usize>,
    /// Extra links added on top of the spanning tree
    #[arg(long)]
    pub interconnectivity: Option<usize>,
    #[arg(long)]
    pub wrapping: Option<bool>,
    /// Percent of caves with treasure and of cells with arrows
    #[arg(long)]
    pub spread: Option<f64>,
    /// Monster count
    #[arg(long)]
    pub difficulty: Option<usize>,
}

impl ConfigArgs {
    /// Loads the config file (or the defaults) and applies every flag that was given.
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut GameConfig) {
        let dungeon = &mut config.dungeon;
        if let Some(players) = self.players {
            config.players = players;
        }
        if let Some(rows) = self.rows {
            dungeon.rows = rows;
        }
        if let Some(cols) = self.cols {
            dungeon.cols = cols;
        }
        if let Some(interconnectivity) = self.interconnectivity {
            dungeon.interconnectivity = interconnectivity;
        }
        if let Some(wrapping) = self.wrapping {
            dungeon.wrapping = wrapping;
        }
        if let Some(spread) = self.spread {
            dungeon.spread_percent = spread;
        }
        if let Some(difficulty) = self.difficulty {
            dungeon.difficulty = difficulty;
        }
    }
}
