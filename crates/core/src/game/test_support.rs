//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating hand-built dungeons across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::config::DungeonConfig;
use crate::mapgen::assemble;
use crate::rng::{ScriptedSource, SeededSource};
use crate::state::TreasureBag;

/// ```text
/// C0 - P1   C2
///      |    |
/// C3 - C4 - P5
/// ```
pub(crate) fn bent_gallery() -> Dungeon {
    assemble(2, 3, false, &[(0, 1), (1, 4), (3, 4), (4, 5), (2, 5)])
}

/// Middle row of caves 5..=9 joined east-west, each with a dead-end cave above and below.
pub(crate) fn cave_row() -> Dungeon {
    let mut links = Vec::new();
    for col in 0..5 {
        links.push((col, 5 + col));
        links.push((5 + col, 10 + col));
    }
    for col in 5..9 {
        links.push((col, col + 1));
    }
    assemble(3, 5, false, &links)
}

/// Wrapped 3x3 grid whose middle row 3 - 4 - 5 closes into a ring through the wrap link.
/// Every cell is a cave: the ring caves have degree four, the rest are dead ends.
pub(crate) fn cave_ring() -> Dungeon {
    let links = [(3, 4), (4, 5), (5, 3), (0, 3), (3, 6), (1, 4), (4, 7), (2, 5), (5, 8)];
    assemble(3, 3, true, &links)
}

/// An unstarted game on [`cave_row`] with two monsters waiting to be seated.
pub(crate) fn unstarted(players: u8, seed: u64) -> Game {
    let mut dungeon = cave_row();
    dungeon.spawn_monsters(2);
    let config = GameConfig {
        players,
        dungeon: DungeonConfig { rows: 3, cols: 5, difficulty: 2, ..DungeonConfig::default() },
    };
    Game::with_dungeon(config, dungeon, Box::new(SeededSource::new(seed)))
}

/// A started game on `dungeon` with start/end fixed and one monster per entry of
/// `monsters`, seated in order. Combat coin flips come from `draws`.
pub(crate) struct Fixture {
    pub(crate) players: u8,
    pub(crate) start: LocationId,
    pub(crate) end: LocationId,
    pub(crate) monsters: Vec<LocationId>,
    pub(crate) draws: Vec<usize>,
}

impl Fixture {
    pub(crate) fn solo(start: usize, end: usize) -> Self {
        Self {
            players: 1,
            start: LocationId(start),
            end: LocationId(end),
            monsters: vec![LocationId(end)],
            draws: Vec::new(),
        }
    }

    pub(crate) fn duel(start: usize, end: usize) -> Self {
        Self { players: 2, ..Self::solo(start, end) }
    }

    pub(crate) fn with_monsters(mut self, monsters: &[usize]) -> Self {
        self.monsters = monsters.iter().copied().map(LocationId).collect();
        self
    }

    pub(crate) fn with_draws(mut self, draws: Vec<usize>) -> Self {
        self.draws = draws;
        self
    }

    pub(crate) fn build(self, mut dungeon: Dungeon) -> Game {
        dungeon.spawn_monsters(self.monsters.len());
        let roster = dungeon.roster().to_vec();
        for (&id, &at) in roster.iter().zip(&self.monsters) {
            dungeon.place_monster(id, at).expect("fixture monster placement");
        }
        dungeon.set_endpoints(self.start, self.end);

        let config = GameConfig {
            players: self.players,
            dungeon: DungeonConfig {
                rows: dungeon.rows(),
                cols: dungeon.cols(),
                wrapping: dungeon.wrapping(),
                difficulty: self.monsters.len().max(1),
                ..DungeonConfig::default()
            },
        };
        let rng = Box::new(ScriptedSource::new(self.draws));
        let mut game = Game::with_dungeon(config, dungeon, rng);
        game.register_player(PlayerSlot::One, PlayerId(1)).expect("player one");
        if self.players == 2 {
            game.register_player(PlayerSlot::Two, PlayerId(2)).expect("player two");
        }
        game.start().expect("fixture start");
        game
    }
}

pub(crate) fn stock_treasure(game: &mut Game, at: usize, counts: [u32; 3]) {
    let bundle: TreasureBag = Treasure::ALL.into_iter().zip(counts).collect();
    game.dungeon.location_mut(LocationId(at)).set_treasure(&bundle).expect("cave");
}

pub(crate) fn drop_arrows(game: &mut Game, at: usize, count: u32) {
    game.dungeon.location_mut(LocationId(at)).add_arrows(count);
}

pub(crate) fn location_of(game: &Game, id: u32) -> LocationId {
    game.player(PlayerId(id)).and_then(Player::location).expect("seated player")
}
