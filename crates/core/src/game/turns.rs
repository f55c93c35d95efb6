//! End-of-game evaluation and turn rotation after moves and shots.

use super::*;

impl Game {
    pub(super) fn conclude_turn(&mut self) {
        if let Some(outcome) = self.evaluate_end() {
            self.phase = Phase::GameOver(outcome);
            self.log.push(LogEvent::GameEnded { outcome });
            return;
        }
        self.pass_turn();
    }

    fn evaluate_end(&self) -> Option<GameOutcome> {
        if self.players.len() == 1 {
            self.evaluate_solo_end()
        } else {
            self.evaluate_duel_end()
        }
    }

    /// A lone player finishes by dying or by standing on the end cave, which only counts as
    /// a win if they survived getting there.
    fn evaluate_solo_end(&self) -> Option<GameOutcome> {
        let player = &self.players[self.turn];
        let reached_end = player.location().is_some() && player.location() == self.dungeon.end();
        match (reached_end, player.is_alive()) {
            (true, true) => Some(GameOutcome::Won { winner: player.id }),
            (reached_end, false) => Some(GameOutcome::Lost { reached_end }),
            (false, true) => None,
        }
    }

    /// Two players race to clear the end cave; whoever acts when its monster falls wins.
    fn evaluate_duel_end(&self) -> Option<GameOutcome> {
        let end_cleared =
            self.dungeon.end().is_some_and(|end| self.dungeon.live_monster_at(end).is_none());
        if end_cleared {
            return Some(GameOutcome::Won { winner: self.players[self.turn].id });
        }
        if self.players.iter().all(|player| !player.is_alive()) {
            return Some(GameOutcome::Lost { reached_end: false });
        }
        let arrows_held: u32 =
            self.players.iter().filter(|p| p.is_alive()).map(|p| p.arrows()).sum();
        let arrows_lying: u32 = self.dungeon.locations().iter().map(|l| l.arrows()).sum();
        if arrows_held == 0 && arrows_lying == 0 {
            return Some(GameOutcome::Stuck);
        }
        None
    }

    /// Rotates to the next player unless that player is dead.
    fn pass_turn(&mut self) {
        if self.players.len() < 2 {
            return;
        }
        let next = (self.turn + 1) % self.players.len();
        if self.players[next].is_alive() {
            self.turn = next;
            self.log.push(LogEvent::TurnPassed { to: self.players[next].id });
        }
    }
}
