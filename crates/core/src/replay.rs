use thiserror::Error;

use crate::config::GameConfig;
use crate::error::{ActionError, ConfigError};
use crate::game::Game;
use crate::journal::{Action, ActionJournal};
use crate::types::{GameOutcome, PlayerId, PlayerSlot};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("game setup failed: {0}")]
    Setup(#[from] ActionError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedAction {
    pub index: usize,
    pub error: ActionError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub outcome: Option<GameOutcome>,
    pub snapshot_hash: u64,
    pub applied: usize,
    pub rejected: Vec<RejectedAction>,
}

/// Plays `actions` on a freshly seeded game with players `1..=n` registered and started.
/// Rejected actions are recorded and skipped; actions after game over are rejected too.
pub fn replay(
    config: &GameConfig,
    seed: u64,
    actions: &[Action],
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::seeded(config.clone(), seed)?;
    let slots = [PlayerSlot::One, PlayerSlot::Two];
    for (number, &slot) in (1..=u32::from(config.players)).zip(slots.iter()) {
        game.register_player(slot, PlayerId(number))?;
    }
    game.start()?;

    let mut applied = 0;
    let mut rejected = Vec::new();
    for (index, action) in actions.iter().enumerate() {
        match game.apply(action) {
            Ok(_) => applied += 1,
            Err(error) => rejected.push(RejectedAction { index, error }),
        }
    }

    Ok(ReplayResult {
        outcome: game.outcome(),
        snapshot_hash: game.snapshot_hash(),
        applied,
        rejected,
    })
}

pub fn replay_journal(journal: &ActionJournal) -> Result<ReplayResult, ReplayError> {
    replay(&journal.config, journal.seed, &journal.actions)
}
