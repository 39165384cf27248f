//! Projectiles fired by combatants

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::combatant::Combatant;
use super::geometry::Rect;
use super::state::Side;
use crate::consts::*;
use crate::facing_sign;

/// A projectile in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: IVec2,
    pub radius: i32,
    /// Horizontal velocity in pixels per tick (sign is the travel direction)
    pub vel: i32,
    /// Side that fired it; it can only hit the other side
    pub owner: Side,
}

impl Projectile {
    /// Spawn from the shooter's center, travelling the way it faces
    pub fn fire(owner: Side, shooter: &Combatant) -> Self {
        Self {
            pos: shooter.rect().center(),
            radius: PROJECTILE_RADIUS,
            vel: PROJECTILE_SPEED * facing_sign(shooter.facing),
            owner,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    pub fn hits(&self, target: &Combatant) -> bool {
        self.bounds().overlaps(&target.rect())
    }

    /// Whether the projectile is still strictly inside the arena horizontally
    pub fn in_arena(&self) -> bool {
        self.pos.x > 0 && self.pos.x < ARENA_WIDTH
    }

    /// Advance one tick. Returns false once the projectile has left the arena
    /// and should be dropped.
    pub fn advance(&mut self) -> bool {
        if self.in_arena() {
            self.pos.x += self.vel;
            true
        } else {
            false
        }
    }
}
