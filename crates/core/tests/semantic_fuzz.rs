use dungeon_core::{
    Action, ActionError, Direction, DungeonConfig, Game, GameConfig, PlayerId, PlayerSlot,
    Treasure,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_action(rng: &mut ChaCha8Rng) -> Action {
    let direction = choose(rng, &Direction::ALL);
    match rng.next_u64() % 10 {
        0..=5 => Action::Move { direction },
        6 | 7 => Action::Shoot { direction, distance: choose(rng, &[1, 1, 2, 3, 5]) },
        8 => Action::PickupArrows,
        _ => Action::PickupTreasure { kinds: vec![choose(rng, &Treasure::ALL)] },
    }
}

fn floor_treasure(game: &Game) -> u32 {
    game.dungeon()
        .locations()
        .iter()
        .filter_map(|location| location.treasure())
        .flat_map(|bag| bag.values())
        .sum()
}

fn floor_arrows(game: &Game) -> u32 {
    game.dungeon().locations().iter().map(|location| location.arrows()).sum()
}

fn held(game: &Game) -> (u32, u32) {
    game.players().iter().fold((0, 0), |(treasure, arrows), player| {
        (treasure + player.treasure_total(), arrows + player.arrows())
    })
}

fn check_invariants(game: &Game, seed: u64) -> Result<(), String> {
    let dungeon = game.dungeon();
    let mut seated = Vec::new();
    for monster in dungeon.monsters() {
        if !monster.is_alive() {
            if dungeon.monster_location(monster.id).is_some() {
                return Err(format!("Invariant failed: dead monster still seated on seed {seed}"));
            }
            continue;
        }
        if ![50, 100].contains(&monster.health()) {
            return Err(format!("Invariant failed: odd monster health on seed {seed}"));
        }
        let Some(at) = dungeon.monster_location(monster.id) else {
            return Err(format!("Invariant failed: live monster unseated on seed {seed}"));
        };
        if !dungeon.location(at).is_cave() || seated.contains(&at) {
            return Err(format!("Invariant failed: bad monster seat {at:?} on seed {seed}"));
        }
        seated.push(at);
    }

    for player in game.players().iter().filter(|player| player.is_alive()) {
        let Some(at) = player.location() else {
            return Err(format!("Invariant failed: seated player has no location on seed {seed}"));
        };
        if !dungeon.location(at).occupants().contains(&player.id) {
            return Err(format!("Invariant failed: {} missing from {at:?}", player.id));
        }
        if !game.visited().contains(&at) {
            return Err(format!("Invariant failed: {at:?} not marked visited on seed {seed}"));
        }
    }
    Ok(())
}

fn run_fuzz_simulation(map_seed: u64, choice_seed: u64, max_actions: u32) -> Result<(), String> {
    let config = GameConfig {
        players: 2,
        dungeon: DungeonConfig { rows: 6, cols: 6, interconnectivity: 4, ..Default::default() },
    };
    let Ok(mut game) = Game::seeded(config, map_seed) else {
        return Ok(());
    };
    game.register_player(PlayerSlot::One, PlayerId(1)).map_err(|e| e.to_string())?;
    game.register_player(PlayerSlot::Two, PlayerId(2)).map_err(|e| e.to_string())?;
    if game.start().is_err() {
        return Ok(());
    }
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);

    let treasure_total = floor_treasure(&game) + held(&game).0;
    let mut arrow_budget = floor_arrows(&game) + held(&game).1;

    for _ in 0..max_actions {
        let action = random_action(&mut rng);
        let hash = game.snapshot_hash();
        let mover = game.turn();
        let result = game.apply(&action);

        if game.is_over() && result.is_ok() {
            let again = game.apply(&action);
            if again != Err(ActionError::GameOver) {
                return Err(format!("Invariant failed: action accepted after game over {again:?}"));
            }
        }
        match result {
            Ok(_) => {
                if matches!(action, Action::Shoot { .. }) {
                    arrow_budget -= 1;
                }
            }
            Err(ActionError::GameOver) => break,
            Err(_) => {
                if game.snapshot_hash() != hash || game.turn() != mover {
                    return Err(format!(
                        "Invariant failed: rejected {action:?} changed state on seed {map_seed}"
                    ));
                }
            }
        }

        if floor_treasure(&game) + held(&game).0 != treasure_total {
            return Err(format!("Invariant failed: treasure not conserved on seed {map_seed}"));
        }
        if floor_arrows(&game) + held(&game).1 != arrow_budget {
            return Err(format!("Invariant failed: arrows not conserved on seed {map_seed}"));
        }
        check_invariants(&game, map_seed)?;
    }

    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(32));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(map_seed, choice_seed)| {
            run_fuzz_simulation(map_seed, choice_seed, 400).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
