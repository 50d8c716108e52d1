//! Game configuration: a small JSON document with fallback to defaults.
//!
//! Configuration problems never stop the game. A missing or malformed file
//! falls back to the defaults wholesale; an individual out-of-range value
//! falls back field-wise. Nothing is surfaced to the player beyond a log
//! line.

use crate::computer::Difficulty;
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use thiserror::Error;

/// Default board edge length in pixels.
pub const DEFAULT_SIZE: u32 = 600;

/// Accepted board edge lengths.
pub const SIZE_RANGE: RangeInclusive<i64> = 200..=1000;

/// Who drives the right paddle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Player,
    Computer,
}

/// Validated game configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board edge length in pixels; the board is square.
    pub size: u32,
    pub opponent: Opponent,
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: DEFAULT_SIZE,
            opponent: Opponent::Computer,
            difficulty: Difficulty::Easy,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw document shape: every field is optional and validated separately.
/// An unknown `opponent` string makes the whole document malformed.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    size: Option<i64>,
    opponent: Option<Opponent>,
    difficulty: Option<i64>,
}

impl GameConfig {
    /// Parse a configuration document, falling back field-wise for values
    /// that parse but are out of range.
    pub fn parse(json: &str) -> Result<GameConfig, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Ok(GameConfig::from_raw(raw))
    }

    /// Load from `path`. Any problem, from a missing file to malformed
    /// JSON, falls back to the defaults entirely.
    pub fn load_or_default(path: impl AsRef<Path>) -> GameConfig {
        let loaded = fs::read_to_string(path.as_ref())
            .map_err(ConfigError::from)
            .and_then(|text| GameConfig::parse(&text));

        match loaded {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default configuration: {}", err);
                GameConfig::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> GameConfig {
        let defaults = GameConfig::default();

        let size = match raw.size {
            Some(size) if SIZE_RANGE.contains(&size) => size as u32,
            Some(size) => {
                // Out-of-range sizes fall back rather than clamp
                log::warn!("configured size {} outside 200-1000, using {}", size, defaults.size);
                defaults.size
            }
            None => defaults.size,
        };

        let difficulty = match raw.difficulty {
            Some(level) => Difficulty::from_level(level).unwrap_or_else(|| {
                log::warn!(
                    "configured difficulty {} outside 1-3, using level {}",
                    level,
                    defaults.difficulty.level()
                );
                defaults.difficulty
            }),
            None => defaults.difficulty,
        };

        GameConfig {
            size,
            opponent: raw.opponent.unwrap_or(defaults.opponent),
            difficulty,
        }
    }
}
