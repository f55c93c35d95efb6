pub mod config;
pub mod dungeon;
pub mod error;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod rng;
pub mod state;
pub mod types;

pub use config::{DungeonConfig, GameConfig};
pub use dungeon::{Dungeon, DungeonSnapshot, LocationSnapshot, MonsterSnapshot};
pub use error::{ActionError, ConfigError, GenerationError, LocationError};
pub use game::{ActionOutcome, Game, Trajectory, trace_arrow};
pub use journal::{Action, ActionJournal};
pub use mapgen::{MAX_ENDPOINT_DRAWS, MIN_PATH_LOCATIONS, MapGenerator, generate_dungeon};
pub use replay::*;
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use state::{Location, LocationKind, Monster, Player, TreasureBag};
pub use types::*;
