//! Jumping Game - a two-player local arena brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, jump/fly, combat, match state)
//! - `input`: Key snapshots, bindings and per-player commands
//! - `app`: Fixed-tick driver and modal screen state machine
//! - `audio`: Music cue tracking for the audio collaborator
//! - `ui`: Headless menu, pause, controls and HUD logic
//! - `settings`: JSON configuration

pub mod app;
pub mod audio;
pub mod demo;
pub mod input;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{Frame, GameLoop, Platform, PlatformEvent, Screen};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 27;

    /// Arena dimensions
    pub const ARENA_WIDTH: i32 = 850;
    pub const ARENA_HEIGHT: i32 = 480;
    /// Right-hand limit used by the walk bound check (a little inside the wall)
    pub const WALK_LIMIT_X: i32 = 838;

    /// Jump arc: phase runs from +JUMP_PHASE down to -JUMP_PHASE
    pub const JUMP_PHASE: i32 = 10;
    /// Displacement ticks in one full jump arc
    pub const JUMP_ARC_TICKS: u32 = (2 * JUMP_PHASE + 1) as u32;

    /// Punch windup window in ticks
    pub const PUNCH_FRAMES: u32 = 12;
    /// Ticks each punch sprite is shown for
    pub const PUNCH_TICKS_PER_SPRITE: u32 = 4;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: i32 = 6;
    pub const PROJECTILE_SPEED: i32 = 10;
    pub const MAX_LIVE_PROJECTILES: usize = 2;
    /// Fire cooldown wraps back to zero once it passes this value
    pub const FIRE_COOLDOWN_TICKS: u32 = 7;

    /// Ticks each walk sprite is shown for
    pub const WALK_TICKS_PER_SPRITE: u32 = 3;
}

/// Sign of a facing direction as an integer step (-1 or 1)
#[inline]
pub fn facing_sign(facing: sim::Facing) -> i32 {
    match facing {
        sim::Facing::Left => -1,
        sim::Facing::Right => 1,
    }
}
