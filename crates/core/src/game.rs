use std::collections::BTreeSet;

use crate::config::GameConfig;
use crate::dungeon::Dungeon;
use crate::error::{ActionError, ConfigError};
use crate::mapgen::MapGenerator;
use crate::rng::{RandomSource, SeededSource};
use crate::state::Player;
use crate::types::*;

mod actions;
mod archery;
mod combat;
mod describe;
mod hash;
mod turns;

pub use actions::ActionOutcome;
pub use archery::{Trajectory, trace_arrow};

#[cfg(test)]
mod test_support;

pub struct Game {
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    dungeon: Dungeon,
    /// Registered players in slot order.
    players: Vec<Player>,
    turn: usize,
    visited: BTreeSet<LocationId>,
    phase: Phase,
    log: Vec<LogEvent>,
}

impl Game {
    /// Validates `config` and generates the dungeon right away, so cave capacity problems
    /// surface here rather than at [`Game::start`].
    pub fn new(config: GameConfig, mut rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        let dungeon = MapGenerator::new(config.dungeon.clone())?.generate(rng.as_mut())?;
        Ok(Self::with_dungeon(config, dungeon, rng))
    }

    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(SeededSource::new(seed)))
    }

    pub(crate) fn with_dungeon(
        config: GameConfig,
        dungeon: Dungeon,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            rng,
            dungeon,
            players: Vec::new(),
            turn: 0,
            visited: BTreeSet::new(),
            phase: Phase::NotStarted,
            log: Vec::new(),
        }
    }

    pub fn register_player(&mut self, slot: PlayerSlot, id: PlayerId) -> Result<(), ActionError> {
        match self.phase {
            Phase::NotStarted | Phase::AwaitingPlayers => {}
            Phase::InProgress => return Err(ActionError::AlreadyStarted),
            Phase::GameOver(_) => return Err(ActionError::GameOver),
        }
        if slot == PlayerSlot::Two && self.config.players < 2 {
            return Err(ActionError::PlayerLimit);
        }
        if slot.index() < self.players.len() {
            return Err(ActionError::SlotTaken(slot));
        }
        if slot.index() > self.players.len() {
            return Err(ActionError::PlayerOneFirst);
        }
        if self.players.iter().any(|player| player.id == id) {
            return Err(ActionError::DuplicatePlayer(id));
        }

        self.players.push(Player::new(id));
        self.phase = Phase::AwaitingPlayers;
        self.log.push(LogEvent::PlayerRegistered { player: id, slot });
        Ok(())
    }

    /// Chooses start and end if the dungeon has none yet, seats the monsters and puts every
    /// player on the start cave.
    pub fn start(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::NotStarted | Phase::AwaitingPlayers => {}
            Phase::InProgress => return Err(ActionError::AlreadyStarted),
            Phase::GameOver(_) => return Err(ActionError::GameOver),
        }
        if self.players.len() < usize::from(self.config.players) {
            return Err(ActionError::PlayersMissing);
        }

        let (start, end) = self.dungeon.assign_start_and_end(self.rng.as_mut())?;
        for player in &mut self.players {
            self.dungeon.relocate(player.id, None, start);
            player.set_location(start);
        }
        self.visited.insert(start);
        self.turn = 0;
        self.phase = Phase::InProgress;
        self.log.push(LogEvent::GameStarted { start, end });
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver(GameOutcome::Won { winner }) => Some(winner),
            _ => None,
        }
    }

    /// Whose move it is; `None` until the game starts.
    pub fn turn(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::InProgress | Phase::GameOver(_) => self.players.get(self.turn).map(|p| p.id),
            Phase::NotStarted | Phase::AwaitingPlayers => None,
        }
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.turn().and_then(|id| self.player(id))
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn visited(&self) -> &BTreeSet<LocationId> {
        &self.visited
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Index of the turn owner, if the game accepts actions from a living player.
    fn acting_index(&self) -> Result<usize, ActionError> {
        match self.phase {
            Phase::NotStarted | Phase::AwaitingPlayers => return Err(ActionError::NotStarted),
            Phase::GameOver(_) => return Err(ActionError::GameOver),
            Phase::InProgress => {}
        }
        let player = &self.players[self.turn];
        if !player.is_alive() {
            return Err(ActionError::PlayerDead(player.id));
        }
        Ok(self.turn)
    }

    /// Location of a started player. Players are seated at start, so this only fails for
    /// an index that never was.
    fn location_of(&self, index: usize) -> Result<LocationId, ActionError> {
        self.players[index].location().ok_or(ActionError::NotStarted)
    }
}
