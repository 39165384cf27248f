//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, integer arithmetic
//! - Stable iteration order (side A before side B, projectiles in spawn order)
//! - No rendering, audio or platform dependencies

pub mod animation;
pub mod combatant;
pub mod geometry;
pub mod projectile;
pub mod state;
pub mod tick;

pub use animation::{AnimationCycle, animation_frame_index, punch_frame_index};
pub use combatant::{
    AttackState, Combatant, CombatantProfile, Facing, FlyState, JumpState, Movement,
    StunState, jump_displacement,
};
pub use geometry::Rect;
pub use projectile::Projectile;
pub use state::{MatchState, Side};
pub use tick::{PlayerCommands, TickInput, step};
