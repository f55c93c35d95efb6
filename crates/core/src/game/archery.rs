//! Arrow flight through caves and bent passages.
//! This module exists so trajectories can be traced without touching game state.
//! It does not own turn rotation or end-of-game checks.

use std::collections::BTreeMap;

use super::*;

/// Where an arrow's flight ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trajectory {
    /// The flight ran into a wall before covering the distance.
    Blocked { path: Vec<LocationId> },
    /// The arrow came down in the cave `distance` caves away.
    Landed { path: Vec<LocationId>, at: LocationId },
}

impl Trajectory {
    pub fn path(&self) -> &[LocationId] {
        match self {
            Trajectory::Blocked { path } | Trajectory::Landed { path, .. } => path,
        }
    }
}

/// Follows the arrow from `origin` heading `direction`. Each cave entered counts one toward
/// `distance`; a passage turns the arrow through its other exit without counting.
///
/// An arrow caught in a loop skips the whole laps it would fly after the first, and they are
/// left out of the path. A `distance` of zero never leaves the origin.
pub fn trace_arrow(
    dungeon: &Dungeon,
    origin: LocationId,
    direction: Direction,
    distance: u32,
) -> Trajectory {
    let mut path = Vec::new();
    match fly(dungeon, origin, direction, distance, |at| path.push(at)) {
        Some(at) => Trajectory::Landed { path, at },
        None => Trajectory::Blocked { path },
    }
}

/// Walks the flight, reporting each location entered to `visit`. Returns the landing cave, or
/// `None` when the arrow hits a wall or circles through passages only. Each (location,
/// heading) state is walked at most twice.
fn fly(
    dungeon: &Dungeon,
    origin: LocationId,
    direction: Direction,
    distance: u32,
    mut visit: impl FnMut(LocationId),
) -> Option<LocationId> {
    if distance == 0 {
        return None;
    }
    let mut current = origin;
    let mut heading = direction;
    let mut counted: u32 = 0;
    // Caves counted before each (location, heading) was first entered.
    let mut seen: BTreeMap<(LocationId, Direction), u32> = BTreeMap::new();
    let mut lapped = false;

    loop {
        current = dungeon.neighbor(current, heading)?;
        visit(current);

        let earlier = if lapped { None } else { seen.insert((current, heading), counted) };
        if let Some(lap_start) = earlier {
            let lap = counted - lap_start;
            if lap == 0 {
                return None;
            }
            // Keep at least one cave to go so the landing is found by walking.
            counted += (distance - counted - 1) / lap * lap;
            lapped = true;
        }

        let location = dungeon.location(current);
        if location.is_cave() {
            counted += 1;
            if counted == distance {
                return Some(current);
            }
        } else {
            let entry = heading.opposite();
            heading = *location.neighbors().keys().find(|&&exit| exit != entry)?;
        }
    }
}

impl Game {
    /// Spends one arrow from the turn owner and fires it. The arrow is gone whether or not
    /// it hits. The turn passes afterwards.
    pub fn shoot_arrow(
        &mut self,
        direction: Direction,
        distance: u32,
    ) -> Result<ShotReport, ActionError> {
        let index = self.acting_index()?;
        if distance < 1 {
            return Err(ActionError::InvalidDistance);
        }
        let origin = self.location_of(index)?;
        let player = self.players[index].id;
        if !self.players[index].spend_arrow() {
            return Err(ActionError::OutOfArrows(player));
        }

        let outcome = match fly(&self.dungeon, origin, direction, distance, |_| {}) {
            None => ShotOutcome::Wasted,
            Some(at) => match self.dungeon.strike(at) {
                Some((monster, HealthState::Dead)) => ShotOutcome::Slain { monster, at },
                Some((monster, _)) => ShotOutcome::Wounded { monster, at },
                None => ShotOutcome::Missed { landed: at },
            },
        };
        self.log.push(LogEvent::ArrowLoosed { player, direction, distance, outcome });

        self.conclude_turn();
        Ok(ShotReport { player, outcome, arrows_left: self.players[index].arrows() })
    }
}
