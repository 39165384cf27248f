//! Sprite frame selection
//!
//! Pure functions of combatant state so the presentation layer can pick a
//! sprite without owning any gameplay counters.

use serde::{Deserialize, Serialize};

use super::combatant::{AttackState, Combatant, Facing, Movement};
use crate::consts::*;

/// Walk cycle layout for one character's sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationCycle {
    /// Number of walk sprites per direction
    pub walk_frames: u32,
    /// Ticks each walk sprite stays on screen
    pub ticks_per_frame: u32,
    /// Sprite shown while standing still
    pub idle_frame: u32,
}

impl AnimationCycle {
    /// Length of a full walk cycle in ticks
    pub fn len(&self) -> u32 {
        self.walk_frames * self.ticks_per_frame
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which sprite row to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteRow {
    Walk,
    Punch,
}

/// Sprite to draw for a combatant this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub row: SpriteRow,
    pub facing: Facing,
    pub index: usize,
}

/// Walk sprite index for a movement flag and walk counter
pub fn animation_frame_index(movement: Movement, counter: u32, cycle: &AnimationCycle) -> usize {
    match movement {
        Movement::Idle => cycle.idle_frame as usize,
        Movement::Left | Movement::Right => {
            if cycle.is_empty() {
                return cycle.idle_frame as usize;
            }
            ((counter % cycle.len()) / cycle.ticks_per_frame) as usize
        }
    }
}

/// Punch sprite index while a punch is winding up
pub fn punch_frame_index(attack: AttackState) -> Option<usize> {
    match attack {
        AttackState::Idle => None,
        AttackState::Attacking { frames_remaining } => {
            let elapsed = PUNCH_FRAMES.saturating_sub(frames_remaining);
            Some((elapsed / PUNCH_TICKS_PER_SPRITE) as usize)
        }
    }
}

/// Sprite for a combatant; punching takes precedence over walking
pub fn sprite_for(combatant: &Combatant) -> Sprite {
    if let Some(index) = punch_frame_index(combatant.attack) {
        return Sprite {
            row: SpriteRow::Punch,
            facing: combatant.facing,
            index,
        };
    }
    Sprite {
        row: SpriteRow::Walk,
        facing: combatant.facing,
        index: animation_frame_index(
            combatant.movement,
            combatant.walk_counter,
            &combatant.profile.cycle,
        ),
    }
}
