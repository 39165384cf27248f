//! Background music selection
//!
//! The game has two moods: a battle loop while both players stand and a
//! victory loop once one is down. The audio backend is only told when the
//! mood changes, never every tick.

use crate::settings::{MusicTracks, Settings};
use crate::sim::MatchState;

/// Which background loop should be playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCue {
    Battle,
    Victory,
}

impl MusicCue {
    pub fn for_match(state: &MatchState) -> Self {
        if state.combat_active() {
            MusicCue::Battle
        } else {
            MusicCue::Victory
        }
    }
}

/// Audio backend provided by the platform
pub trait MusicPlayer {
    /// Start looping `track` at `volume` (0.0 - 1.0), replacing anything playing
    fn play_looped(&mut self, track: &str, volume: f32);
    fn stop(&mut self);
}

/// Backend that only logs; used headless
#[derive(Debug, Default)]
pub struct LogPlayer;

impl MusicPlayer for LogPlayer {
    fn play_looped(&mut self, track: &str, volume: f32) {
        log::info!("Music: looping {} at volume {:.2}", track, volume);
    }

    fn stop(&mut self) {
        log::info!("Music: stopped");
    }
}

/// Tracks the current cue and forwards changes to a [`MusicPlayer`]
#[derive(Debug, Clone)]
pub struct AudioManager {
    current: Option<MusicCue>,
    tracks: MusicTracks,
    /// Loop volume after master volume and mute are applied
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            current: None,
            tracks: settings.tracks.clone(),
            volume: settings.effective_music_volume(),
        }
    }

    pub fn current(&self) -> Option<MusicCue> {
        self.current
    }

    fn track(&self, cue: MusicCue) -> &str {
        match cue {
            MusicCue::Battle => &self.tracks.battle,
            MusicCue::Victory => &self.tracks.victory,
        }
    }

    /// Switch loops if the match mood changed. Returns the newly started cue.
    pub fn update(&mut self, state: &MatchState, player: &mut dyn MusicPlayer) -> Option<MusicCue> {
        let cue = MusicCue::for_match(state);
        if self.current == Some(cue) {
            return None;
        }
        if cue == MusicCue::Victory {
            player.stop();
        }
        player.play_looped(self.track(cue), self.volume);
        self.current = Some(cue);
        Some(cue)
    }

    /// Stop the music and forget the cue so the next update starts it afresh
    pub fn restart(&mut self, player: &mut dyn MusicPlayer) {
        player.stop();
        self.current = None;
    }
}
