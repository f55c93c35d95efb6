use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{
    Action, ActionError, ActionJournal, Direction, Game, GameConfig, PlayerId, PlayerSlot,
    Treasure,
};
use dungeon_tools::files::write_journal_atomic;
use dungeon_tools::settings::ConfigArgs;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    settings: ConfigArgs,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of games to play, seeded `seed`, `seed + 1`, ...
    #[arg(short, long, default_value_t = 100)]
    games: u64,
    /// Action budget per game
    #[arg(short, long, default_value_t = 500)]
    actions: u32,
    /// Where to write the journal of a game that breaks an invariant
    #[arg(long)]
    record: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_action(rng: &mut ChaCha8Rng) -> Action {
    let direction = choose(rng, &Direction::ALL);
    match rng.next_u64() % 10 {
        // Bias to moving
        0..=5 => Action::Move { direction },
        6 | 7 => Action::Shoot { direction, distance: choose(rng, &[1, 1, 2, 3]) },
        8 => Action::PickupArrows,
        _ => Action::PickupTreasure { kinds: Treasure::ALL.to_vec() },
    }
}

fn treasure_in_play(game: &Game) -> u32 {
    let on_floor: u32 = game
        .dungeon()
        .locations()
        .iter()
        .filter_map(|location| location.treasure())
        .flat_map(|bag| bag.values())
        .sum();
    on_floor + game.players().iter().map(|player| player.treasure_total()).sum::<u32>()
}

fn arrows_in_play(game: &Game) -> u32 {
    let on_floor: u32 = game.dungeon().locations().iter().map(|location| location.arrows()).sum();
    on_floor + game.players().iter().map(|player| player.arrows()).sum::<u32>()
}

fn check_invariants(game: &Game, treasure: u32, arrows: u32) -> Result<(), String> {
    if treasure_in_play(game) != treasure {
        return Err("Invariant failed: treasure not conserved".to_string());
    }
    if arrows_in_play(game) != arrows {
        return Err("Invariant failed: arrows appeared or vanished".to_string());
    }

    let dungeon = game.dungeon();
    for monster in dungeon.monsters().filter(|monster| monster.is_alive()) {
        let seated = dungeon.monster_location(monster.id);
        if !seated.is_some_and(|at| dungeon.location(at).is_cave()) {
            return Err(format!("Invariant failed: {} is not in a cave", monster.label()));
        }
    }
    for player in game.players().iter().filter(|player| player.is_alive()) {
        let inside = player
            .location()
            .is_some_and(|at| dungeon.location(at).occupants().contains(&player.id));
        if !inside {
            return Err(format!("Invariant failed: {} lost track of its location", player.id));
        }
    }
    Ok(())
}

/// Plays one game from `map_seed`, recording every action it tries.
fn play(
    config: &GameConfig,
    map_seed: u64,
    budget: u32,
    rng: &mut ChaCha8Rng,
    journal: &mut ActionJournal,
) -> Result<Option<Game>, String> {
    let Ok(mut game) = Game::seeded(config.clone(), map_seed) else {
        return Ok(None);
    };
    let slots = [PlayerSlot::One, PlayerSlot::Two];
    for (number, &slot) in (1..=u32::from(config.players)).zip(slots.iter()) {
        game.register_player(slot, PlayerId(number)).map_err(|e| e.to_string())?;
    }
    if game.start().is_err() {
        return Ok(None);
    }

    let treasure = treasure_in_play(&game);
    let mut arrows = arrows_in_play(&game);
    for _ in 0..budget {
        let action = random_action(rng);
        journal.push(action.clone());
        match game.apply(&action) {
            Ok(_) if matches!(action, Action::Shoot { .. }) => arrows -= 1,
            Ok(_) => {}
            Err(ActionError::GameOver) => break,
            Err(_) => {}
        }
        check_invariants(&game, treasure, arrows)?;
    }
    Ok(Some(game))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.settings.resolve()?;

    println!(
        "Starting Fuzz harness on seeds {}..{} for max {} actions...",
        args.seed,
        args.seed + args.games,
        args.actions
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let (mut finished, mut skipped) = (0, 0);

    for map_seed in args.seed..args.seed + args.games {
        let mut journal = ActionJournal::new(map_seed, config.clone());
        match play(&config, map_seed, args.actions, &mut rng, &mut journal) {
            Ok(Some(game)) => {
                if game.is_over() {
                    finished += 1;
                }
            }
            Ok(None) => skipped += 1,
            Err(failure) => {
                if let Some(path) = &args.record {
                    write_journal_atomic(&journal, path)?;
                    println!("Journal written to {}", path.display());
                }
                bail!("{failure} on map_seed {map_seed}");
            }
        }
    }

    println!(
        "Fuzzing completed successfully: {finished} games finished, {skipped} dungeons unusable."
    );
    Ok(())
}
