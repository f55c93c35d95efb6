use std::collections::{BTreeMap, BTreeSet};
use std::mem;

use crate::error::LocationError;
use crate::types::*;

pub const MAX_NEIGHBORS: usize = 4;
pub const MONSTER_FULL_HEALTH: i32 = 100;
pub const ARROW_DAMAGE: i32 = 50;
pub const STARTING_ARROWS: u32 = 3;

pub type TreasureBag = BTreeMap<Treasure, u32>;

pub fn empty_bag() -> TreasureBag {
    Treasure::ALL.iter().map(|&kind| (kind, 0)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationKind {
    Cave { treasure: TreasureBag, monster: Option<MonsterId> },
    Passage,
}

impl LocationKind {
    pub fn empty_cave() -> Self {
        LocationKind::Cave { treasure: empty_bag(), monster: None }
    }
}

#[derive(Clone, Debug)]
pub struct Location {
    pub id: LocationId,
    pub pos: Pos,
    pub kind: LocationKind,
    neighbors: BTreeMap<Direction, LocationId>,
    arrows: u32,
    occupants: BTreeSet<PlayerId>,
}

impl Location {
    pub fn new(id: LocationId, pos: Pos, kind: LocationKind) -> Self {
        Self {
            id,
            pos,
            kind,
            neighbors: BTreeMap::new(),
            arrows: 0,
            occupants: BTreeSet::new(),
        }
    }

    pub fn tag(&self) -> LocationTag {
        match self.kind {
            LocationKind::Cave { .. } => LocationTag::Cave,
            LocationKind::Passage => LocationTag::Passage,
        }
    }

    pub fn is_cave(&self) -> bool {
        self.tag() == LocationTag::Cave
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.tag(), self.id.0)
    }

    pub fn neighbors(&self) -> &BTreeMap<Direction, LocationId> {
        &self.neighbors
    }

    pub fn neighbor(&self, direction: Direction) -> Option<LocationId> {
        self.neighbors.get(&direction).copied()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn add_neighbor(
        &mut self,
        direction: Direction,
        neighbor: LocationId,
    ) -> Result<(), LocationError> {
        if self.neighbors.len() == MAX_NEIGHBORS {
            return Err(LocationError::NeighborLimit(self.id));
        }
        if neighbor == self.id {
            return Err(LocationError::SelfNeighbor(self.id));
        }
        if self.neighbors.contains_key(&direction) {
            return Err(LocationError::DirectionTaken { at: self.id, direction });
        }
        if self.neighbors.values().any(|&existing| existing == neighbor) {
            return Err(LocationError::DuplicateNeighbor { at: self.id, neighbor });
        }
        self.neighbors.insert(direction, neighbor);
        Ok(())
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn add_arrows(&mut self, count: u32) {
        self.arrows += count;
    }

    pub fn take_arrows(&mut self) -> Result<u32, LocationError> {
        if self.arrows == 0 {
            return Err(LocationError::NoArrows(self.id));
        }
        Ok(mem::take(&mut self.arrows))
    }

    pub fn treasure(&self) -> Option<&TreasureBag> {
        match &self.kind {
            LocationKind::Cave { treasure, .. } => Some(treasure),
            LocationKind::Passage => None,
        }
    }

    pub fn has_treasure(&self) -> bool {
        self.treasure().is_some_and(|bag| bag.values().any(|&count| count > 0))
    }

    /// Replaces the cave's treasure with `bundle`; kinds missing from it become zero.
    pub fn set_treasure(&mut self, bundle: &TreasureBag) -> Result<(), LocationError> {
        match &mut self.kind {
            LocationKind::Cave { treasure, .. } => {
                for kind in Treasure::ALL {
                    treasure.insert(kind, bundle.get(&kind).copied().unwrap_or(0));
                }
                Ok(())
            }
            LocationKind::Passage => Err(LocationError::PassageTreasure(self.id)),
        }
    }

    /// Removes the requested kinds from the cave and returns what was actually there.
    /// Rejected without effect on passages and on caves holding no treasure at all.
    pub fn take_treasure(&mut self, kinds: &[Treasure]) -> Result<TreasureBag, LocationError> {
        if !self.is_cave() {
            return Err(LocationError::PassageTreasure(self.id));
        }
        if !self.has_treasure() {
            return Err(LocationError::NoTreasure(self.id));
        }
        let LocationKind::Cave { treasure, .. } = &mut self.kind else {
            return Err(LocationError::PassageTreasure(self.id));
        };
        let mut haul = TreasureBag::new();
        for &kind in kinds {
            if let Some(count) = treasure.get_mut(&kind)
                && *count > 0
            {
                haul.insert(kind, mem::take(count));
            }
        }
        Ok(haul)
    }

    pub fn monster(&self) -> Option<MonsterId> {
        match self.kind {
            LocationKind::Cave { monster, .. } => monster,
            LocationKind::Passage => None,
        }
    }

    pub(crate) fn set_monster(&mut self, id: Option<MonsterId>) -> Result<(), LocationError> {
        match &mut self.kind {
            LocationKind::Cave { monster, .. } => {
                *monster = id;
                Ok(())
            }
            LocationKind::Passage => Err(LocationError::PassageMonster(self.id)),
        }
    }

    pub fn occupants(&self) -> &BTreeSet<PlayerId> {
        &self.occupants
    }

    pub(crate) fn enter(&mut self, player: PlayerId) {
        self.occupants.insert(player);
    }

    pub(crate) fn leave(&mut self, player: PlayerId) {
        self.occupants.remove(&player);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub id: MonsterId,
    /// One-based ordinal in creation order; the first monster guards the end cave.
    pub number: u32,
    health: i32,
    resident: bool,
}

impl Monster {
    pub fn new(id: MonsterId, number: u32) -> Self {
        Self { id, number, health: MONSTER_FULL_HEALTH, resident: false }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn health_state(&self) -> HealthState {
        match self.health {
            MONSTER_FULL_HEALTH.. => HealthState::Healthy,
            1.. => HealthState::Wounded,
            _ => HealthState::Dead,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_resident(&self) -> bool {
        self.resident
    }

    pub(crate) fn settle(&mut self) {
        self.resident = true;
    }

    pub(crate) fn hit(&mut self) -> HealthState {
        self.health -= ARROW_DAMAGE;
        self.health_state()
    }

    pub fn label(&self) -> String {
        format!("Monster {}", self.number)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    location: Option<LocationId>,
    treasure: TreasureBag,
    arrows: u32,
    alive: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self { id, location: None, treasure: empty_bag(), arrows: STARTING_ARROWS, alive: true }
    }

    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: LocationId) {
        self.location = Some(location);
    }

    pub fn treasure(&self) -> &TreasureBag {
        &self.treasure
    }

    pub fn treasure_total(&self) -> u32 {
        self.treasure.values().sum()
    }

    pub(crate) fn stash(&mut self, haul: &TreasureBag) {
        for (&kind, &count) in haul {
            *self.treasure.entry(kind).or_insert(0) += count;
        }
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub(crate) fn add_arrows(&mut self, count: u32) {
        self.arrows += count;
    }

    /// Spends one arrow; returns false when the quiver is empty.
    pub(crate) fn spend_arrow(&mut self) -> bool {
        if self.arrows == 0 {
            return false;
        }
        self.arrows -= 1;
        true
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
