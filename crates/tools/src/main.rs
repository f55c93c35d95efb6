use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dungeon_core::{Dungeon, Game, GameConfig, PlayerId, PlayerSlot, replay_journal};
use dungeon_tools::files::load_journal;
use dungeon_tools::settings::ConfigArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a dungeon and print its layout and adjacency
    Inspect {
        #[command(flatten)]
        settings: ConfigArgs,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Also register the players and start, which picks endpoints and seats monsters
        #[arg(long)]
        start: bool,
        /// Print the dungeon snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a JSON action journal against its seeded game
    Replay {
        /// Path to the journal JSON file to replay
        #[arg(short, long)]
        journal: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Inspect { settings, seed, start, json } => {
            inspect(settings.resolve()?, seed, start, json)
        }
        Command::Replay { journal } => replay(&journal),
    }
}

fn inspect(config: GameConfig, seed: u64, start: bool, json: bool) -> Result<()> {
    let mut game = Game::seeded(config.clone(), seed).context("Dungeon generation failed")?;
    if start {
        let slots = [PlayerSlot::One, PlayerSlot::Two];
        for (number, &slot) in (1..=u32::from(config.players)).zip(slots.iter()) {
            game.register_player(slot, PlayerId(number))?;
        }
        game.start().context("Game failed to start")?;
    }

    let dungeon = game.dungeon();
    if json {
        let snapshot = serde_json::to_string_pretty(&dungeon.snapshot())
            .context("Failed to serialize dungeon snapshot")?;
        println!("{snapshot}");
        return Ok(());
    }

    println!("Seed: {seed}");
    println!("{}", dungeon.layout_text());
    println!();
    print_adjacency(dungeon);
    if let (Some(start), Some(end)) = (dungeon.start(), dungeon.end()) {
        println!();
        println!("Start: {}", dungeon.location(start).label());
        println!("End: {}", dungeon.location(end).label());
        for monster in dungeon.monsters() {
            if let Some(at) = dungeon.monster_location(monster.id) {
                println!("{} in {}", monster.label(), dungeon.location(at).label());
            }
        }
    }
    Ok(())
}

fn print_adjacency(dungeon: &Dungeon) {
    for location in dungeon.locations() {
        let exits: Vec<String> = location
            .neighbors()
            .iter()
            .map(|(direction, &neighbor)| format!("{direction} {}", neighbor.index()))
            .collect();
        let mut line = format!("{}: {}", location.label(), exits.join(", "));
        if let Some(bag) = location.treasure().filter(|_| location.has_treasure()) {
            let stock: Vec<String> =
                bag.iter().map(|(kind, count)| format!("{kind} x{count}")).collect();
            line.push_str(&format!(" | treasure {}", stock.join(", ")));
        }
        if location.arrows() > 0 {
            line.push_str(&format!(" | arrows {}", location.arrows()));
        }
        println!("{line}");
    }
    println!("Edges: {}, caves: {}", dungeon.edge_count(), dungeon.caves().len());
}

fn replay(path: &Path) -> Result<()> {
    let journal = load_journal(path)?;
    let result = replay_journal(&journal).context("Replay setup failed")?;

    println!("Replay complete.");
    println!("Actions applied: {}", result.applied);
    for rejected in &result.rejected {
        println!("Rejected #{}: {}", rejected.index, rejected.error);
    }
    println!("Outcome: {:?}", result.outcome);
    println!("Snapshot Hash: {}", result.snapshot_hash);
    Ok(())
}
