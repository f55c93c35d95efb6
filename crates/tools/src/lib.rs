//! Headless developer tooling over the dungeon core: config and journal files plus the
//! shared command-line overrides used by the binaries.

pub mod files;
pub mod settings;
