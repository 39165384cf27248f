//! Headless platform for running matches without a window
//!
//! Holds random keys from a seeded RNG, clicks Play Again whenever a match
//! ends and quits after a set number of rounds or ticks. Used by the native
//! binary as an attract/soak run and by tests.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::app::{Frame, Platform, PlatformEvent};
use crate::audio::MusicPlayer;
use crate::input::{Key, KeyState};
use crate::sim::Side;
use crate::ui::{Button, ClickTarget};

/// Keys the demo mashes. Reset and pause are left alone so rounds finish.
const GAMEPLAY_KEYS: [Key; 16] = [
    Key::A,
    Key::D,
    Key::W,
    Key::S,
    Key::F,
    Key::X,
    Key::Q,
    Key::J,
    Key::L,
    Key::I,
    Key::K,
    Key::G,
    Key::N,
    Key::P,
    Key::Slash,
    Key::Period,
];

/// Chance per tick that a key flips between up and down
const FLIP_CHANCE: f64 = 0.12;

pub struct DemoPlatform {
    rng: Pcg32,
    held: KeyState,
    pending: Vec<PlatformEvent>,
    ticks: u64,
    max_ticks: u64,
    rounds: u32,
    /// Winner of each finished round, in order
    pub results: Vec<Side>,
    awaiting_reset: bool,
    realtime: bool,
    /// Track names handed to the music backend, in order
    pub music_log: Vec<String>,
}

impl DemoPlatform {
    pub fn new(seed: u64, rounds: u32, max_ticks: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: KeyState::new(),
            pending: Vec::new(),
            ticks: 0,
            max_ticks,
            rounds,
            results: Vec::new(),
            awaiting_reset: false,
            realtime: false,
            music_log: Vec::new(),
        }
    }

    /// Sleep between ticks like a real window would
    pub fn realtime(mut self, on: bool) -> Self {
        self.realtime = on;
        self
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn mash_keys(&mut self) {
        for key in GAMEPLAY_KEYS {
            if self.rng.random_bool(FLIP_CHANCE) {
                if self.held.is_down(key) {
                    self.held.release(key);
                } else {
                    self.held.press(key);
                }
            }
        }
        // Hack growth is unbounded; keep it from dominating every round
        if self.held.is_down(Key::Slash) && self.rng.random_bool(0.5) {
            self.held.release(Key::Slash);
            self.held.press(Key::Period);
        }
    }
}

impl MusicPlayer for DemoPlatform {
    fn play_looped(&mut self, track: &str, volume: f32) {
        log::debug!("Demo music: {} at {:.2}", track, volume);
        self.music_log.push(track.to_string());
    }

    fn stop(&mut self) {
        log::debug!("Demo music stopped");
    }
}

impl Platform for DemoPlatform {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        if self.ticks >= self.max_ticks {
            log::info!("Demo tick limit {} reached", self.max_ticks);
            self.pending.push(PlatformEvent::Quit);
        }
        std::mem::take(&mut self.pending)
    }

    fn held_keys(&self) -> KeyState {
        self.held.clone()
    }

    fn present(&mut self, frame: &Frame<'_>) {
        self.ticks += 1;

        match frame.state.winner {
            Some(side) if !self.awaiting_reset => {
                let name = &frame.names[side.index()];
                log::info!(
                    "Round {} to {} after {} ticks",
                    self.results.len() + 1,
                    name,
                    frame.state.tick
                );
                self.results.push(side);
                self.awaiting_reset = true;
                self.held.clear();

                let event = if self.results.len() as u32 >= self.rounds {
                    PlatformEvent::Quit
                } else {
                    PlatformEvent::Click(ClickTarget::Button(Button::PlayAgain))
                };
                self.pending.push(event);
            }
            Some(_) => {}
            None => {
                self.awaiting_reset = false;
                self.mash_keys();
            }
        }
    }

    fn wait_for_tick(&mut self, tick: Duration) {
        if self.realtime {
            std::thread::sleep(tick);
        }
    }
}
