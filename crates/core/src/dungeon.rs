//! The location graph the game is played on.
//! This module exists to own every location and monster in one arena addressed by index.
//! It does not own generation policy or turn rules.

mod paths;
mod snapshot;

use std::collections::{BTreeMap, BTreeSet};

use slotmap::SlotMap;

use crate::error::LocationError;
use crate::state::{Location, Monster};
use crate::types::*;

pub use snapshot::{DungeonSnapshot, LocationSnapshot, MonsterSnapshot};

#[derive(Clone, Debug)]
pub struct Dungeon {
    rows: usize,
    cols: usize,
    wrapping: bool,
    locations: Vec<Location>,
    monsters: SlotMap<MonsterId, Monster>,
    roster: Vec<MonsterId>,
    start: Option<LocationId>,
    end: Option<LocationId>,
}

impl Dungeon {
    pub(crate) fn from_locations(
        rows: usize,
        cols: usize,
        wrapping: bool,
        locations: Vec<Location>,
    ) -> Self {
        debug_assert_eq!(locations.len(), rows * cols);
        Self {
            rows,
            cols,
            wrapping,
            locations,
            monsters: SlotMap::with_key(),
            roster: Vec::new(),
            start: None,
            end: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn wrapping(&self) -> bool {
        self.wrapping
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Panics on an id that did not come from this dungeon.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    pub(crate) fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.index()]
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn location_at(&self, pos: Pos) -> Option<&Location> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.locations.get(pos.row * self.cols + pos.col)
    }

    pub fn caves(&self) -> Vec<LocationId> {
        self.ids_tagged(LocationTag::Cave)
    }

    pub fn passages(&self) -> Vec<LocationId> {
        self.ids_tagged(LocationTag::Passage)
    }

    fn ids_tagged(&self, tag: LocationTag) -> Vec<LocationId> {
        self.locations
            .iter()
            .filter(|location| location.tag() == tag)
            .map(|location| location.id)
            .collect()
    }

    pub fn adjacency(&self, id: LocationId) -> &BTreeMap<Direction, LocationId> {
        self.location(id).neighbors()
    }

    pub fn neighbor(&self, id: LocationId, direction: Direction) -> Option<LocationId> {
        self.location(id).neighbor(direction)
    }

    pub fn edge_count(&self) -> usize {
        self.locations.iter().map(Location::degree).sum::<usize>() / 2
    }

    pub fn layout_grid(&self) -> Vec<Vec<LocationId>> {
        self.locations.chunks(self.cols).map(|row| row.iter().map(|l| l.id).collect()).collect()
    }

    /// One line per grid row, each cell rendered as `C07` or `P12`.
    pub fn layout_text(&self) -> String {
        let width = (self.locations.len().saturating_sub(1)).to_string().len().max(2);
        let mut lines = Vec::with_capacity(self.rows);
        for row in self.locations.chunks(self.cols) {
            let cells: Vec<String> = row
                .iter()
                .map(|location| {
                    let tag = match location.tag() {
                        LocationTag::Cave => 'C',
                        LocationTag::Passage => 'P',
                    };
                    format!("{tag}{:0width$}", location.id.index())
                })
                .collect();
            lines.push(cells.join(" "));
        }
        lines.join("\n")
    }

    pub fn start(&self) -> Option<LocationId> {
        self.start
    }

    pub fn end(&self) -> Option<LocationId> {
        self.end
    }

    pub(crate) fn set_endpoints(&mut self, start: LocationId, end: LocationId) {
        self.start = Some(start);
        self.end = Some(end);
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(id)
    }

    /// Every monster in creation order, dead ones included.
    pub fn monsters(&self) -> impl Iterator<Item = &Monster> + '_ {
        self.roster.iter().filter_map(|&id| self.monsters.get(id))
    }

    pub fn monster_count(&self) -> usize {
        self.roster.len()
    }

    pub fn live_monster_at(&self, at: LocationId) -> Option<&Monster> {
        let id = self.location(at).monster()?;
        self.monsters.get(id).filter(|monster| monster.is_alive())
    }

    /// Where a monster currently sits, if it has been placed and is still alive.
    pub fn monster_location(&self, id: MonsterId) -> Option<LocationId> {
        self.locations.iter().find(|location| location.monster() == Some(id)).map(|l| l.id)
    }

    pub(crate) fn roster(&self) -> &[MonsterId] {
        &self.roster
    }

    pub(crate) fn spawn_monsters(&mut self, count: usize) {
        for number in 1..=count {
            let id = self.monsters.insert_with_key(|id| Monster::new(id, number as u32));
            self.roster.push(id);
        }
    }

    /// Puts an unplaced monster into a free cave. Checked fully before anything changes.
    pub fn place_monster(&mut self, id: MonsterId, at: LocationId) -> Result<(), LocationError> {
        let location = self.location(at);
        if !location.is_cave() {
            return Err(LocationError::PassageMonster(at));
        }
        if location.monster().is_some() {
            return Err(LocationError::CaveOccupied(at));
        }
        let Some(monster) = self.monsters.get_mut(id) else {
            return Err(LocationError::UnknownMonster(id));
        };
        if monster.is_resident() {
            return Err(LocationError::MonsterResident);
        }
        monster.settle();
        self.locations[at.index()].set_monster(Some(id))
    }

    /// Lands an arrow in `at`. Returns the monster struck and its state afterwards;
    /// a monster killed by the hit is removed from the cave.
    pub(crate) fn strike(&mut self, at: LocationId) -> Option<(MonsterId, HealthState)> {
        let id = self.live_monster_at(at)?.id;
        let state = self.monsters[id].hit();
        if state == HealthState::Dead {
            self.locations[at.index()].set_monster(None).ok()?;
        }
        Some((id, state))
    }

    pub(crate) fn relocate(&mut self, player: PlayerId, from: Option<LocationId>, to: LocationId) {
        if let Some(from) = from {
            self.locations[from.index()].leave(player);
        }
        self.locations[to.index()].enter(player);
    }

    /// Proximity signal at `at`: adjacent monsters smell strong, a single monster two steps
    /// away smells faint and two or more of them smell strong.
    pub fn smell(&self, at: LocationId) -> Smell {
        if self.live_monster_at(at).is_some() {
            return Smell::MonsterHere;
        }

        let mut visited = BTreeSet::from([at]);
        let mut first_hop = Vec::new();
        for &neighbor in self.adjacency(at).values() {
            if visited.insert(neighbor) {
                if self.live_monster_at(neighbor).is_some() {
                    return Smell::Strong;
                }
                first_hop.push(neighbor);
            }
        }

        let mut distant = 0;
        for hop in first_hop {
            for &neighbor in self.adjacency(hop).values() {
                if visited.insert(neighbor) && self.live_monster_at(neighbor).is_some() {
                    distant += 1;
                }
            }
        }

        match distant {
            0 => Smell::None,
            1 => Smell::Faint,
            _ => Smell::Strong,
        }
    }
}
