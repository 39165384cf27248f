//! Game settings and preferences
//!
//! Read from a JSON file at startup. Missing fields fall back to defaults and
//! a missing or broken file falls back to [`Settings::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;
use crate::input::Controls;

/// Background tracks for the two match moods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicTracks {
    /// Looped while both players are standing
    pub battle: String,
    /// Looped once a player is down
    pub victory: String,
}

impl Default for MusicTracks {
    fn default() -> Self {
        Self {
            battle: "music.mp3".to_string(),
            victory: "Shaabaashiyaan.mp3".to_string(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
    pub tracks: MusicTracks,

    // === Input ===
    pub controls: Controls,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            master_volume: 1.0,
            music_volume: 0.5,
            muted: false,
            tracks: MusicTracks::default(),
            controls: Controls::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring bad settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Length of one tick in milliseconds
    pub fn tick_millis(&self) -> u64 {
        1000 / u64::from(self.tick_rate.max(1))
    }

    fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        if self.tick_rate == 0 {
            log::warn!("tick_rate 0 is not allowed, using {}", TICK_RATE);
            self.tick_rate = TICK_RATE;
        }
    }
}
