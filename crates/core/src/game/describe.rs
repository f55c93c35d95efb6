//! Human-readable narration derived from game state.
//! This module exists so presentation collaborators never format state themselves.
//! It does not own any state of its own.

use super::*;
use crate::state::TreasureBag;

fn smell_line(smell: Smell) -> Option<&'static str> {
    match smell {
        Smell::None => None,
        Smell::Faint => Some("A faint stench drifts in from somewhere close."),
        Smell::Strong => Some("A terrible stench fills the air."),
        Smell::MonsterHere => Some("A monster lurks right here!"),
    }
}

/// `diamonds x2, rubies x0, sapphires x1`, or only the nonzero kinds when `skip_empty`.
fn bag_text(bag: &TreasureBag, skip_empty: bool) -> String {
    let parts: Vec<String> = bag
        .iter()
        .filter(|&(_, &count)| !skip_empty || count > 0)
        .map(|(kind, count)| format!("{kind} x{count}"))
        .collect();
    parts.join(", ")
}

impl Game {
    /// Where the turn owner stands: location, smell, treasure, arrows and exits.
    pub fn describe_location(&self) -> Result<String, ActionError> {
        let player = match self.phase {
            Phase::NotStarted | Phase::AwaitingPlayers => return Err(ActionError::NotStarted),
            Phase::InProgress | Phase::GameOver(_) => &self.players[self.turn],
        };
        let at = player.location().ok_or(ActionError::NotStarted)?;
        let location = self.dungeon.location(at);

        let mut lines = vec![format!("{} is in {}.", player.id, location.label())];
        if let Some(line) = smell_line(self.dungeon.smell(at)) {
            lines.push(line.to_string());
        }
        if let Some(bag) = location.treasure() {
            if location.has_treasure() {
                lines.push(format!("Treasure here: {}.", bag_text(bag, true)));
            } else {
                lines.push("There is no treasure here.".to_string());
            }
        }
        lines.push(format!("Arrows here: {}", location.arrows()));

        let exits: Vec<String> = location
            .neighbors()
            .iter()
            .map(|(direction, &neighbor)| {
                format!("{direction} -> {}", self.dungeon.location(neighbor).label())
            })
            .collect();
        lines.push(format!("Exits: {}", exits.join(", ")));
        Ok(lines.join("\n"))
    }

    /// A registered player's haul and quiver, or a death notice.
    pub fn describe_player(&self, id: PlayerId) -> Option<String> {
        let player = self.player(id)?;
        if !player.is_alive() {
            return Some(format!("{id} is dead."));
        }
        Some(format!(
            "{id} carries {} and {} arrows.",
            bag_text(player.treasure(), false),
            player.arrows()
        ))
    }

    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::NotStarted => "Waiting for players to join.".to_string(),
            Phase::AwaitingPlayers => {
                let ready: Vec<String> = self.players.iter().map(|p| p.id.to_string()).collect();
                format!("Waiting to start. Ready: {}.", ready.join(" and "))
            }
            Phase::InProgress => "The hunt is on: find the end cave!".to_string(),
            Phase::GameOver(GameOutcome::Won { winner }) => {
                format!("{winner} has won. The game is over.")
            }
            Phase::GameOver(GameOutcome::Lost { reached_end: true }) => {
                let player = self.players[self.turn].id;
                format!("{player} reached the end but was killed there. The game is over.")
            }
            Phase::GameOver(GameOutcome::Lost { reached_end: false }) => {
                "Nobody made it out alive. The game is over.".to_string()
            }
            Phase::GameOver(GameOutcome::Stuck) => {
                "No arrows are left to clear the end cave. The game is over.".to_string()
            }
        }
    }

    pub fn result_text(&self) -> String {
        match self.phase {
            Phase::GameOver(GameOutcome::Won { winner }) => format!("Victory for {winner}!"),
            Phase::GameOver(GameOutcome::Lost { .. }) if self.players.len() > 1 => {
                "Both players died before conquering the end cave.".to_string()
            }
            Phase::GameOver(GameOutcome::Lost { .. }) => {
                format!("{} died before conquering the end cave.", self.players[self.turn].id)
            }
            Phase::GameOver(GameOutcome::Stuck) => "Stalemate: the players are stuck.".to_string(),
            _ => "The game is still going.".to_string(),
        }
    }
}
