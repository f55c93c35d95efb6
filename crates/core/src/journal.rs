use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::{Direction, Treasure};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Move { direction: Direction },
    Shoot { direction: Direction, distance: u32 },
    PickupArrows,
    PickupTreasure { kinds: Vec<Treasure> },
}

/// A seeded game plus the actions to play on it, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionJournal {
    pub format_version: u16,
    pub seed: u64,
    #[serde(default)]
    pub config: GameConfig,
    pub actions: Vec<Action>,
}

impl ActionJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: 1, seed, config, actions: Vec::new() }
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }
}
