//! Tests for movement, presence bookkeeping and monster encounters.

use super::support::*;

#[test]
fn illegal_direction_is_rejected_without_side_effects() {
    let mut game = Fixture::solo(0, 4).build(bent_gallery());
    let log_len = game.log().len();
    let hash = game.snapshot_hash();

    assert_eq!(game.move_player(Direction::North), Err(ActionError::NoExit(Direction::North)));
    assert_eq!(game.move_player(Direction::South), Err(ActionError::NoExit(Direction::South)));
    assert_eq!(location_of(&game, 1), LocationId(0));
    assert_eq!(game.log().len(), log_len);
    assert_eq!(game.snapshot_hash(), hash);
}

#[test]
fn moving_updates_presence_and_visited_set() {
    let mut game = Fixture::solo(5, 9).build(cave_row());
    let report = game.move_player(Direction::East).expect("move");

    assert_eq!(
        report,
        MoveReport {
            player: PlayerId(1),
            from: LocationId(5),
            to: LocationId(6),
            encounter: Encounter::Quiet,
        }
    );
    assert!(game.dungeon().location(LocationId(5)).occupants().is_empty());
    assert!(game.dungeon().location(LocationId(6)).occupants().contains(&PlayerId(1)));
    assert_eq!(location_of(&game, 1), LocationId(6));
    assert!(game.visited().contains(&LocationId(5)) && game.visited().contains(&LocationId(6)));
    assert_eq!(game.turn(), Some(PlayerId(1)));

    game.move_player(Direction::West).expect("back");
    assert_eq!(game.visited().len(), 2);
}

#[test]
fn healthy_monster_always_kills() {
    let mut game = Fixture::solo(5, 9).with_monsters(&[9, 0]).build(cave_row());
    let report = game.move_player(Direction::North).expect("move");

    assert!(matches!(report.encounter, Encounter::Killed { .. }));
    assert!(!game.players()[0].is_alive());
    assert_eq!(game.outcome(), Some(GameOutcome::Lost { reached_end: false }));
    assert_eq!(game.move_player(Direction::South), Err(ActionError::GameOver));
    assert_eq!(game.describe_player(PlayerId(1)).as_deref(), Some("Player 1 is dead."));
}

#[test]
fn wounded_monster_lets_the_player_escape_on_a_zero_draw() {
    let mut game =
        Fixture::solo(5, 9).with_monsters(&[9, 6]).with_draws(vec![0]).build(cave_row());
    let shot = game.shoot_arrow(Direction::East, 1).expect("shoot");
    assert!(matches!(shot.outcome, ShotOutcome::Wounded { at: LocationId(6), .. }));

    let report = game.move_player(Direction::East).expect("move");
    assert!(matches!(report.encounter, Encounter::Escaped { .. }));
    assert!(game.players()[0].is_alive());
    assert_eq!(game.phase(), Phase::InProgress);
    assert!(matches!(game.log().last(), Some(LogEvent::PlayerEscaped { .. })));
}

#[test]
fn wounded_monster_kills_on_a_one_draw() {
    let mut game =
        Fixture::solo(5, 9).with_monsters(&[9, 6]).with_draws(vec![1]).build(cave_row());
    game.shoot_arrow(Direction::East, 1).expect("shoot");

    let report = game.move_player(Direction::East).expect("move");
    assert!(matches!(report.encounter, Encounter::Killed { .. }));
    assert_eq!(game.outcome(), Some(GameOutcome::Lost { reached_end: false }));
}

#[test]
fn reaching_a_cleared_end_wins() {
    let mut game = Fixture::solo(5, 9).build(cave_row());
    game.shoot_arrow(Direction::East, 4).expect("first hit");
    let shot = game.shoot_arrow(Direction::East, 4).expect("second hit");
    assert!(matches!(shot.outcome, ShotOutcome::Slain { at: LocationId(9), .. }));
    assert_eq!(game.phase(), Phase::InProgress);

    for _ in 0..4 {
        game.move_player(Direction::East).expect("walk");
    }
    assert_eq!(game.outcome(), Some(GameOutcome::Won { winner: PlayerId(1) }));
    assert_eq!(game.winner(), Some(PlayerId(1)));
    assert_eq!(game.result_text(), "Victory for Player 1!");
    assert_eq!(game.visited().len(), 5);
}

#[test]
fn location_description_lists_smell_treasure_arrows_and_exits() {
    let mut game = Fixture::solo(5, 9).with_monsters(&[9, 7]).build(cave_row());
    stock_treasure(&mut game, 5, [2, 0, 1]);
    drop_arrows(&mut game, 5, 3);

    assert_eq!(
        game.describe_location().expect("started"),
        [
            "Player 1 is in Cave 5.",
            "A faint stench drifts in from somewhere close.",
            "Treasure here: diamonds x2, sapphires x1.",
            "Arrows here: 3",
            "Exits: NORTH -> Cave 0, SOUTH -> Cave 10, EAST -> Cave 6",
        ]
        .join("\n")
    );

    game.move_player(Direction::East).expect("move");
    let text = game.describe_location().expect("started");
    assert!(text.contains("A terrible stench fills the air."), "{text}");
    assert!(text.contains("There is no treasure here."), "{text}");
}
