use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct MonsterId;
}

/// Index of a location inside the dungeon arena. Equal to `row * cols + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Treasure {
    Diamond,
    Ruby,
    Sapphire,
}

impl Treasure {
    pub const ALL: [Treasure; 3] = [Treasure::Diamond, Treasure::Ruby, Treasure::Sapphire];
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Treasure::Diamond => "diamonds",
            Treasure::Ruby => "rubies",
            Treasure::Sapphire => "sapphires",
        })
    }
}

/// Discriminant of [`crate::state::LocationKind`] without the cave payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationTag {
    Cave,
    Passage,
}

impl fmt::Display for LocationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocationTag::Cave => "Cave",
            LocationTag::Passage => "Passage",
        })
    }
}

/// Numeric identity a player registers with; displayed as `Player <id>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthState {
    Healthy,
    Wounded,
    Dead,
}

/// Proximity signal for nearby monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Smell {
    None,
    Faint,
    Strong,
    MonsterHere,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encounter {
    Quiet,
    Killed { monster: MonsterId },
    Escaped { monster: MonsterId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The trajectory left the grid before covering the requested distance.
    Wasted,
    Missed { landed: LocationId },
    Wounded { monster: MonsterId, at: LocationId },
    Slain { monster: MonsterId, at: LocationId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub player: PlayerId,
    pub from: LocationId,
    pub to: LocationId,
    pub encounter: Encounter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotReport {
    pub player: PlayerId,
    pub outcome: ShotOutcome,
    pub arrows_left: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: PlayerId },
    Lost { reached_end: bool },
    Stuck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingPlayers,
    InProgress,
    GameOver(GameOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerRegistered { player: PlayerId, slot: PlayerSlot },
    GameStarted { start: LocationId, end: LocationId },
    PlayerMoved { player: PlayerId, from: LocationId, to: LocationId },
    PlayerKilled { player: PlayerId, monster: MonsterId, at: LocationId },
    PlayerEscaped { player: PlayerId, monster: MonsterId, at: LocationId },
    ArrowLoosed { player: PlayerId, direction: Direction, distance: u32, outcome: ShotOutcome },
    ArrowsCollected { player: PlayerId, count: u32 },
    TreasureCollected { player: PlayerId, treasure: Treasure, count: u32 },
    TurnPassed { to: PlayerId },
    GameEnded { outcome: GameOutcome },
}
