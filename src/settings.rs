//! Session settings
//!
//! Loaded from JSON by the driver, validated before a session is built.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ASTEROIDS, MAX_STARS};
use crate::error::{ConfigError, Result};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Asteroids spawned at start and on every restart
    pub asteroid_count: u32,
    /// Lives at start and on every restart
    pub lives: u32,
    /// Background stars spawned at start and on every restart
    pub star_count: u32,

    // === Audio ===
    /// Sound effects enabled
    pub sound_on: bool,
    /// Looping music enabled
    pub music_on: bool,

    // === Pacing ===
    /// Initial ticks per second
    pub tick_rate: u32,
    /// Lowest rate reachable with speed_down
    pub min_tick_rate: u32,
    /// Highest rate reachable with speed_up
    pub max_tick_rate: u32,

    /// RNG seed for spawns
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asteroid_count: 10,
            lives: 3,
            star_count: 100,

            sound_on: true,
            music_on: true,

            tick_rate: 25,
            min_tick_rate: 1,
            max_tick_rate: 40,

            seed: 2019,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields fall back to defaults) and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.lives < 1 {
            return Err(ConfigError::invalid("lives", "must be at least 1"));
        }
        if self.asteroid_count > MAX_ASTEROIDS {
            return Err(ConfigError::invalid(
                "asteroid_count",
                format!("must not exceed {MAX_ASTEROIDS}"),
            ));
        }
        if self.star_count > MAX_STARS {
            return Err(ConfigError::invalid(
                "star_count",
                format!("must not exceed {MAX_STARS}"),
            ));
        }
        if self.min_tick_rate < 1 {
            return Err(ConfigError::invalid("min_tick_rate", "must be at least 1"));
        }
        if self.min_tick_rate > self.max_tick_rate {
            return Err(ConfigError::invalid(
                "min_tick_rate",
                format!("exceeds max_tick_rate ({})", self.max_tick_rate),
            ));
        }
        if !(self.min_tick_rate..=self.max_tick_rate).contains(&self.tick_rate) {
            return Err(ConfigError::invalid(
                "tick_rate",
                format!(
                    "must be within {}..={}",
                    self.min_tick_rate, self.max_tick_rate
                ),
            ));
        }
        Ok(())
    }
}
