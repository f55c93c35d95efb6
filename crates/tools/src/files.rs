//! Game configs (TOML) and action journals (JSON) on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dungeon_core::{ActionJournal, GameConfig};

pub fn load_config(path: &Path) -> Result<GameConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GameConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;
    Ok(config)
}

pub fn load_journal(path: &Path) -> Result<ActionJournal> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    let journal: ActionJournal =
        serde_json::from_str(&content).with_context(|| "Failed to deserialize journal JSON")?;
    Ok(journal)
}

/// Writes through a sibling temp file so a crash never leaves a half-written journal.
pub fn write_journal_atomic(journal: &ActionJournal, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).context("Failed to serialize journal")?;
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write journal file: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move journal into place: {}", path.display()))?;
    Ok(())
}
