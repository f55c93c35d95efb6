//! Player actions: movement, pickups and scripted action dispatch.
//! This module exists to keep each action's validation next to its mutation.
//! It does not own arrow flight, combat odds or turn rotation.

use super::*;
use crate::journal::Action;
use crate::state::TreasureBag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveReport),
    Shot(ShotReport),
    ArrowsCollected(u32),
    TreasureCollected(TreasureBag),
}

impl Game {
    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome, ActionError> {
        match action {
            Action::Move { direction } => self.move_player(*direction).map(ActionOutcome::Moved),
            Action::Shoot { direction, distance } => {
                self.shoot_arrow(*direction, *distance).map(ActionOutcome::Shot)
            }
            Action::PickupArrows => self.pickup_arrows().map(ActionOutcome::ArrowsCollected),
            Action::PickupTreasure { kinds } => {
                self.pickup_treasure(kinds).map(ActionOutcome::TreasureCollected)
            }
        }
    }

    /// Walks the turn owner through the exit in `direction`, then resolves any monster
    /// there, checks for the end of the game and passes the turn.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveReport, ActionError> {
        let index = self.acting_index()?;
        let from = self.location_of(index)?;
        let to = self.dungeon.neighbor(from, direction).ok_or(ActionError::NoExit(direction))?;

        let player = self.players[index].id;
        self.dungeon.relocate(player, Some(from), to);
        self.players[index].set_location(to);
        self.visited.insert(to);
        self.log.push(LogEvent::PlayerMoved { player, from, to });

        let encounter = self.resolve_encounter(index, to);
        self.conclude_turn();
        Ok(MoveReport { player, from, to, encounter })
    }

    /// Moves every arrow lying here into the turn owner's quiver. Does not pass the turn.
    pub fn pickup_arrows(&mut self) -> Result<u32, ActionError> {
        let index = self.acting_index()?;
        let at = self.location_of(index)?;
        let count = self.dungeon.location_mut(at).take_arrows()?;

        let player = &mut self.players[index];
        player.add_arrows(count);
        self.log.push(LogEvent::ArrowsCollected { player: player.id, count });
        Ok(count)
    }

    /// Collects the requested kinds from the current cave. Returns what was actually taken,
    /// which is empty when only other kinds are present. Does not pass the turn.
    pub fn pickup_treasure(&mut self, kinds: &[Treasure]) -> Result<TreasureBag, ActionError> {
        let index = self.acting_index()?;
        let at = self.location_of(index)?;
        let haul = self.dungeon.location_mut(at).take_treasure(kinds)?;

        let player = &mut self.players[index];
        player.stash(&haul);
        for (&treasure, &count) in &haul {
            self.log.push(LogEvent::TreasureCollected { player: player.id, treasure, count });
        }
        Ok(haul)
    }
}
