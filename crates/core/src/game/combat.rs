//! Monster encounters triggered by entering a cave.

use super::*;

impl Game {
    /// A healthy monster always kills; a wounded one kills unless a coin flip lets the
    /// player slip past.
    pub(super) fn resolve_encounter(&mut self, index: usize, at: LocationId) -> Encounter {
        let Some(monster) = self.dungeon.live_monster_at(at) else {
            return Encounter::Quiet;
        };
        let (monster, state) = (monster.id, monster.health_state());
        let player = self.players[index].id;

        let escaped = state == HealthState::Wounded && self.rng.next_in(0, 2) == 0;
        if escaped {
            self.log.push(LogEvent::PlayerEscaped { player, monster, at });
            return Encounter::Escaped { monster };
        }

        self.players[index].kill();
        self.log.push(LogEvent::PlayerKilled { player, monster, at });
        Encounter::Killed { monster }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;
    use crate::rng::SeededSource;

    #[test]
    fn wounded_monsters_let_about_half_of_the_players_through() {
        let trials = 400;
        let mut escapes = 0;
        for seed in 0..trials {
            let mut game = Fixture::solo(5, 9).with_monsters(&[9, 6]).build(cave_row());
            game.rng = Box::new(SeededSource::new(seed));
            game.shoot_arrow(Direction::East, 1).expect("wound the neighbor");
            let report = game.move_player(Direction::East).expect("walk in");
            if matches!(report.encounter, Encounter::Escaped { .. }) {
                escapes += 1;
            }
        }
        assert!((150..=250).contains(&escapes), "{escapes} escapes in {trials} trials");
    }
}
