//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from game rules.
//! It does not own replay execution.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        let (phase, outcome_player) = match self.phase {
            Phase::NotStarted => (0, 0),
            Phase::AwaitingPlayers => (1, 0),
            Phase::InProgress => (2, 0),
            Phase::GameOver(GameOutcome::Won { winner }) => (3, winner.0),
            Phase::GameOver(GameOutcome::Lost { reached_end }) => (4, u32::from(reached_end)),
            Phase::GameOver(GameOutcome::Stuck) => (5, 0),
        };
        hasher.write_u8(phase);
        hasher.write_u32(outcome_player);
        hasher.write_usize(self.turn);

        for player in &self.players {
            hasher.write_u32(player.id.0);
            hasher.write_u8(u8::from(player.is_alive()));
            hasher.write_u32(player.arrows());
            hasher.write_usize(player.location().map_or(usize::MAX, LocationId::index));
            for &count in player.treasure().values() {
                hasher.write_u32(count);
            }
        }

        for location in &self.visited {
            hasher.write_usize(location.index());
        }

        for location in self.dungeon.locations() {
            hasher.write_u32(location.arrows());
            if let Some(bag) = location.treasure() {
                for &count in bag.values() {
                    hasher.write_u32(count);
                }
            }
        }

        for monster in self.dungeon.monsters() {
            hasher.write_i32(monster.health());
            let at = self.dungeon.monster_location(monster.id);
            hasher.write_usize(at.map_or(usize::MAX, LocationId::index));
        }
        hasher.finish()
    }
}
