//! Tests for turn rotation and two-player end conditions.

use super::support::*;

#[test]
fn turns_alternate_after_moves_and_shots() {
    let mut game = Fixture::duel(5, 9).build(cave_row());
    assert_eq!(game.turn(), Some(PlayerId(1)));

    game.move_player(Direction::South).expect("p1 moves");
    assert_eq!(game.turn(), Some(PlayerId(2)));
    assert_eq!(game.log().last(), Some(&LogEvent::TurnPassed { to: PlayerId(2) }));

    game.shoot_arrow(Direction::North, 1).expect("p2 shoots");
    assert_eq!(game.turn(), Some(PlayerId(1)));
    assert_eq!(location_of(&game, 1), LocationId(10));
    assert_eq!(location_of(&game, 2), LocationId(5));
}

#[test]
fn dead_player_is_skipped() {
    let mut game = Fixture::duel(5, 9).with_monsters(&[9, 0]).build(cave_row());
    game.move_player(Direction::North).expect("p1 walks into a monster");
    assert!(!game.players()[0].is_alive());
    assert_eq!(game.turn(), Some(PlayerId(2)));
    assert_eq!(game.phase(), Phase::InProgress);

    game.move_player(Direction::East).expect("p2 moves");
    assert_eq!(game.turn(), Some(PlayerId(2)));
    game.move_player(Direction::West).expect("p2 moves again");
    assert_eq!(game.turn(), Some(PlayerId(2)));
}

#[test]
fn both_players_dead_ends_the_game_without_a_winner() {
    let mut game = Fixture::duel(5, 9).with_monsters(&[9, 0]).build(cave_row());
    game.move_player(Direction::North).expect("p1 dies");
    game.move_player(Direction::North).expect("p2 dies");

    assert_eq!(game.outcome(), Some(GameOutcome::Lost { reached_end: false }));
    assert_eq!(game.winner(), None);
    assert_eq!(game.status_text(), "Nobody made it out alive. The game is over.");
    assert_eq!(game.result_text(), "Both players died before conquering the end cave.");
    assert!(matches!(game.log().last(), Some(LogEvent::GameEnded { .. })));
}

#[test]
fn slaying_the_end_monster_wins_for_the_shooter() {
    let mut game = Fixture::duel(5, 9).build(cave_row());
    game.shoot_arrow(Direction::East, 4).expect("p1 wounds");
    assert_eq!(game.turn(), Some(PlayerId(2)));
    game.shoot_arrow(Direction::East, 4).expect("p2 slays");

    assert_eq!(game.winner(), Some(PlayerId(2)));
    assert_eq!(game.turn(), Some(PlayerId(2)));
    assert_eq!(game.status_text(), "Player 2 has won. The game is over.");
    assert_eq!(game.shoot_arrow(Direction::East, 1), Err(ActionError::GameOver));
}

#[test]
fn reaching_the_end_alone_does_not_win_a_duel() {
    let mut game = Fixture::duel(5, 9).with_draws(vec![0]).build(cave_row());
    game.shoot_arrow(Direction::East, 4).expect("p1 wounds the guard");
    for p1_step in [Direction::South, Direction::North, Direction::South] {
        game.move_player(Direction::East).expect("p2 walks");
        game.move_player(p1_step).expect("p1 paces");
    }
    assert_eq!(game.turn(), Some(PlayerId(2)));
    assert_eq!(location_of(&game, 2), LocationId(8));
    let report = game.move_player(Direction::East).expect("p2 enters the end cave");
    assert!(matches!(report.encounter, Encounter::Escaped { .. }));
    assert_eq!(game.phase(), Phase::InProgress);
}

#[test]
fn spending_every_arrow_without_clearing_the_end_is_stuck() {
    let mut game = Fixture::duel(5, 9).build(cave_row());
    for _ in 0..6 {
        game.shoot_arrow(Direction::West, 1).expect("wasted shot");
    }
    assert_eq!(game.outcome(), Some(GameOutcome::Stuck));
    assert_eq!(game.result_text(), "Stalemate: the players are stuck.");
}

#[test]
fn arrows_lying_around_prevent_a_stalemate() {
    let mut game = Fixture::duel(5, 9).build(cave_row());
    drop_arrows(&mut game, 14, 1);
    for _ in 0..6 {
        game.shoot_arrow(Direction::West, 1).expect("wasted shot");
    }
    assert_eq!(game.phase(), Phase::InProgress);
}
