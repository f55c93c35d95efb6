//! Treasure, arrow and monster placement rules for generated dungeons.

use crate::dungeon::Dungeon;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use crate::state::{Location, TreasureBag};
use crate::types::{LocationId, Treasure};

/// Each placed bundle or arrow pile holds between 1 and 3 of a kind.
const MIN_PILE: usize = 1;
const MAX_PILE_EXCLUSIVE: usize = 4;

/// `spread_percent` of `total`, rounded half away from zero.
pub(super) fn spread_count(spread_percent: f64, total: usize) -> usize {
    (spread_percent / 100.0 * total as f64).round() as usize
}

fn pile(rng: &mut dyn RandomSource) -> u32 {
    rng.next_in(MIN_PILE, MAX_PILE_EXCLUSIVE) as u32
}

/// Gives a random bundle of every kind to `spread_percent` of the caves, chosen uniquely.
pub(super) fn distribute_treasure(
    locations: &mut [Location],
    caves: &[LocationId],
    spread_percent: f64,
    rng: &mut dyn RandomSource,
) {
    let count = spread_count(spread_percent, caves.len());
    for index in rng.unique_sample(count, 0, caves.len()) {
        let bundle: TreasureBag = Treasure::ALL.iter().map(|&kind| (kind, pile(rng))).collect();
        let cave = &mut locations[caves[index].index()];
        if let Err(error) = cave.set_treasure(&bundle) {
            panic!("treasure target must be a cave: {error}");
        }
    }
}

/// Drops arrow piles on `spread_percent` of the cells' worth of independent row/column
/// draws. Cells can be drawn twice, in which case the piles accumulate.
pub(super) fn distribute_arrows(
    locations: &mut [Location],
    rows: usize,
    cols: usize,
    spread_percent: f64,
    rng: &mut dyn RandomSource,
) {
    for _ in 0..spread_count(spread_percent, rows * cols) {
        let row = rng.next_in(0, rows);
        let col = rng.next_in(0, cols);
        let count = pile(rng);
        locations[row * cols + col].add_arrows(count);
    }
}

/// Seats the first monster on the end cave and the rest on distinct random caves that are
/// neither the start nor the end.
pub(super) fn place_monsters(
    dungeon: &mut Dungeon,
    start: LocationId,
    end: LocationId,
    rng: &mut dyn RandomSource,
) -> Result<(), GenerationError> {
    let roster = dungeon.roster().to_vec();
    let Some((&guard, extras)) = roster.split_first() else {
        return Err(GenerationError::NoMonsters);
    };
    let mut eligible: Vec<LocationId> = dungeon
        .caves()
        .into_iter()
        .filter(|&cave| cave != start && cave != end)
        .collect();
    if extras.len() > eligible.len() {
        // Monsters are numbered from 1 and the guard takes the end cave.
        return Err(GenerationError::NoFreeCave(eligible.len() as u32 + 2));
    }

    dungeon.place_monster(guard, end)?;
    for &monster in extras {
        let cave = eligible.remove(rng.next_in(0, eligible.len()));
        dungeon.place_monster(monster, cave)?;
    }
    Ok(())
}
