//! Error types for construction-time validation and runtime rejections.

use thiserror::Error;

use crate::types::{Direction, LocationId, MonsterId, PlayerId, PlayerSlot};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("the number of players must be 1 or 2, got {0}")]
    PlayerCount(u8),
    #[error("rows and columns must both be at least 1, got {rows}x{cols}")]
    Dimensions { rows: usize, cols: usize },
    #[error("spread must be a percentage between 0 and 100, got {0}")]
    Spread(f64),
    #[error("at least one monster is required")]
    NoMonsters,
    #[error("the dungeon needs at least two caves for a start and an end, found {found}")]
    TooFewCaves { found: usize },
    #[error("{requested} monsters requested but the caves can hold at most {capacity}")]
    TooManyMonsters { requested: usize, capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("{0:?} already has four neighbors")]
    NeighborLimit(LocationId),
    #[error("{0:?} cannot neighbor itself")]
    SelfNeighbor(LocationId),
    #[error("{at:?} already has a neighbor to the {direction}")]
    DirectionTaken { at: LocationId, direction: Direction },
    #[error("{neighbor:?} is already a neighbor of {at:?}")]
    DuplicateNeighbor { at: LocationId, neighbor: LocationId },
    #[error("passage {0:?} cannot hold treasure")]
    PassageTreasure(LocationId),
    #[error("passage {0:?} cannot hold a monster")]
    PassageMonster(LocationId),
    #[error("cave {0:?} is already occupied by a monster")]
    CaveOccupied(LocationId),
    #[error("the monster already resides in a cave")]
    MonsterResident,
    #[error("no monster {0:?} exists in this dungeon")]
    UnknownMonster(MonsterId),
    #[error("no treasure in cave {0:?}")]
    NoTreasure(LocationId),
    #[error("no arrows at {0:?}")]
    NoArrows(LocationId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no pair of caves is separated by the minimum path length")]
    NoViableEndpoints,
    #[error("the dungeon has no monster to guard the end cave")]
    NoMonsters,
    #[error("no free cave is left for monster {0}")]
    NoFreeCave(u32),
    #[error(transparent)]
    Placement(#[from] LocationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the game has not started")]
    NotStarted,
    #[error("the game has already started")]
    AlreadyStarted,
    #[error("the game is over")]
    GameOver,
    #[error("all players must be registered before starting")]
    PlayersMissing,
    #[error("this game is configured for a single player")]
    PlayerLimit,
    #[error("player one must be registered first")]
    PlayerOneFirst,
    #[error("slot {0:?} is already taken")]
    SlotTaken(PlayerSlot),
    #[error("{0} is already registered")]
    DuplicatePlayer(PlayerId),
    #[error("{0} is dead")]
    PlayerDead(PlayerId),
    #[error("there is no exit to the {0}")]
    NoExit(Direction),
    #[error("an arrow must travel at least one cave")]
    InvalidDistance,
    #[error("{0} has no arrows left")]
    OutOfArrows(PlayerId),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
