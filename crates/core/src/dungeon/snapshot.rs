//! Serializable view of a dungeon for tooling and golden comparisons.

use serde::{Deserialize, Serialize};

use super::*;
use crate::state::TreasureBag;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub id: LocationId,
    pub pos: Pos,
    pub kind: LocationTag,
    pub neighbors: BTreeMap<Direction, LocationId>,
    pub arrows: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasure: Option<TreasureBag>,
    /// Number of the monster sitting here, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    pub number: u32,
    pub health: i32,
    pub location: Option<LocationId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub wrapping: bool,
    pub edge_count: usize,
    pub start: Option<LocationId>,
    pub end: Option<LocationId>,
    pub locations: Vec<LocationSnapshot>,
    pub monsters: Vec<MonsterSnapshot>,
}

impl Dungeon {
    pub fn snapshot(&self) -> DungeonSnapshot {
        let locations = self
            .locations
            .iter()
            .map(|location| LocationSnapshot {
                id: location.id,
                pos: location.pos,
                kind: location.tag(),
                neighbors: location.neighbors().clone(),
                arrows: location.arrows(),
                treasure: location.treasure().cloned(),
                monster: location
                    .monster()
                    .and_then(|id| self.monsters.get(id))
                    .map(|monster| monster.number),
            })
            .collect();
        let monsters = self
            .monsters()
            .map(|monster| MonsterSnapshot {
                number: monster.number,
                health: monster.health(),
                location: self.monster_location(monster.id),
            })
            .collect();
        DungeonSnapshot {
            rows: self.rows,
            cols: self.cols,
            wrapping: self.wrapping,
            edge_count: self.edge_count(),
            start: self.start,
            end: self.end,
            locations,
            monsters,
        }
    }
}
