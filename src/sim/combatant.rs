//! Per-character state: position, stats, jump/fly kinematics and combat flags

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::animation::AnimationCycle;
use super::geometry::Rect;
use super::tick::PlayerCommands;
use crate::consts::*;

/// Direction a combatant is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Horizontal movement this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Movement {
    #[default]
    Idle,
    Left,
    Right,
}

/// Jump arc state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    #[default]
    Grounded,
    /// Airborne; `phase` counts down from +10 to -10
    Jumping { phase: i32 },
}

/// Flight mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlyState {
    #[default]
    Disabled,
    Flying,
}

/// Hit-stun after being knocked up; blocks further punches landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StunState {
    #[default]
    Clear,
    Stunned { ticks_remaining: u32 },
}

/// Punch windup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttackState {
    #[default]
    Idle,
    Attacking { frames_remaining: u32 },
}

/// Fixed per-character starting values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantProfile {
    pub start: IVec2,
    pub size: IVec2,
    pub speed: i32,
    pub health: i32,
    pub damage: i32,
    pub cycle: AnimationCycle,
    /// Full width of the health bar drawn above the sprite
    pub health_bar_width: i32,
}

impl CombatantProfile {
    /// Left-hand player: slower, less health, harder hitting
    pub const fn player_one() -> Self {
        Self {
            start: IVec2::new(50, 400),
            size: IVec2::new(40, 60),
            speed: 5,
            health: 10,
            damage: 2,
            cycle: AnimationCycle {
                walk_frames: 9,
                ticks_per_frame: WALK_TICKS_PER_SPRITE,
                idle_frame: 0,
            },
            health_bar_width: 50,
        }
    }

    /// Right-hand player
    pub const fn player_two() -> Self {
        Self {
            start: IVec2::new(725, 400),
            size: IVec2::new(40, 60),
            speed: 6,
            health: 15,
            damage: 1,
            cycle: AnimationCycle {
                walk_frames: 7,
                ticks_per_frame: WALK_TICKS_PER_SPRITE,
                idle_frame: 6,
            },
            health_bar_width: 60,
        }
    }
}

/// Vertical displacement for one tick of the jump arc at `phase`.
///
/// Negative is upward. The integer division is part of the arc's shape.
pub fn jump_displacement(phase: i32) -> i32 {
    let sign = if phase < 0 { -1 } else { 1 };
    -((phase * phase) / 3) * sign
}

/// A playable character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub profile: CombatantProfile,
    pub pos: IVec2,
    pub size: IVec2,
    pub health: i32,
    pub max_health: i32,
    pub speed: i32,
    pub damage: i32,
    pub facing: Facing,
    pub movement: Movement,
    pub jump: JumpState,
    pub fly: FlyState,
    pub stun: StunState,
    pub attack: AttackState,
    /// Consecutive walking ticks, modulo the walk cycle
    pub walk_counter: u32,
    /// Non-zero while the shot gate is cooling down
    pub fire_cooldown: u32,
    /// Punch key was held last tick (for press-edge detection)
    #[serde(default)]
    punch_held: bool,
}

impl Combatant {
    pub fn new(profile: CombatantProfile) -> Self {
        Self {
            profile,
            pos: profile.start,
            size: profile.size,
            health: profile.health,
            max_health: profile.health,
            speed: profile.speed,
            damage: profile.damage,
            facing: Facing::default(),
            movement: Movement::Idle,
            jump: JumpState::Grounded,
            fly: FlyState::Disabled,
            stun: StunState::Clear,
            attack: AttackState::Idle,
            walk_counter: 0,
            fire_cooldown: 0,
            punch_held: false,
        }
    }

    /// Restore start-of-match state in place
    pub fn reset(&mut self) {
        *self = Self::new(self.profile);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self.jump, JumpState::Jumping { .. })
    }

    pub fn is_flying(&self) -> bool {
        self.fly == FlyState::Flying
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self.stun, StunState::Stunned { .. })
    }

    /// Width of the filled part of the health bar in pixels
    pub fn health_bar_fill(&self) -> i32 {
        self.profile.health_bar_width * self.health / self.max_health.max(1)
    }

    /// Count down per-tick timers (punch window, stun, fire cooldown)
    pub fn tick_timers(&mut self) {
        if let AttackState::Attacking { frames_remaining } = self.attack {
            self.attack = match frames_remaining.saturating_sub(1) {
                0 => AttackState::Idle,
                n => AttackState::Attacking { frames_remaining: n },
            };
        }

        if let StunState::Stunned { ticks_remaining } = self.stun {
            self.stun = match ticks_remaining.saturating_sub(1) {
                0 => StunState::Clear,
                n => StunState::Stunned { ticks_remaining: n },
            };
        }

        if self.fire_cooldown > 0 {
            self.fire_cooldown += 1;
        }
        if self.fire_cooldown > FIRE_COOLDOWN_TICKS {
            self.fire_cooldown = 0;
        }
    }

    /// Either party airborne lets a combatant pass through the other
    fn passes_over(&self, opponent: &Combatant) -> bool {
        self.is_airborne() || opponent.is_airborne()
    }

    pub fn can_step_left(&self, opponent: &Combatant) -> bool {
        let x = self.pos.x;
        let blocked = opponent.pos.x < x && x < opponent.pos.x + opponent.size.x;
        x > self.speed && (!blocked || self.passes_over(opponent))
    }

    pub fn can_step_right(&self, opponent: &Combatant) -> bool {
        let x = self.pos.x;
        let blocked = opponent.pos.x - opponent.size.x < x && x < opponent.pos.x;
        x < WALK_LIMIT_X - self.size.x - self.speed && (!blocked || self.passes_over(opponent))
    }

    /// Try to walk one step left. Returns false (and changes nothing) if blocked.
    pub fn step_left(&mut self, opponent: &Combatant) -> bool {
        if !self.can_step_left(opponent) {
            return false;
        }
        self.pos.x -= self.speed;
        self.walk(Movement::Left);
        true
    }

    /// Try to walk one step right. Returns false (and changes nothing) if blocked.
    pub fn step_right(&mut self, opponent: &Combatant) -> bool {
        if !self.can_step_right(opponent) {
            return false;
        }
        self.pos.x += self.speed;
        self.walk(Movement::Right);
        true
    }

    fn walk(&mut self, dir: Movement) {
        let was_walking = self.movement != Movement::Idle;
        self.walk_counter = if was_walking {
            (self.walk_counter + 1) % self.profile.cycle.len().max(1)
        } else {
            0
        };
        self.movement = dir;
        self.facing = match dir {
            Movement::Left => Facing::Left,
            Movement::Right => Facing::Right,
            Movement::Idle => self.facing,
        };
    }

    pub fn stand_idle(&mut self) {
        self.movement = Movement::Idle;
        self.walk_counter = 0;
    }

    /// Debug boost: one more point of speed and damage per tick held
    pub fn hack(&mut self) {
        self.speed = self.speed.saturating_add(1);
        self.damage = self.damage.saturating_add(1);
    }

    /// Undo any hack boost
    pub fn unhack(&mut self) {
        self.speed = self.profile.speed;
        self.damage = self.profile.damage;
    }

    /// Record the punch key and report whether this tick is a fresh press
    pub fn punch_pressed(&mut self, held: bool) -> bool {
        let edge = held && !self.punch_held;
        self.punch_held = held;
        edge
    }

    /// Start (or keep) the punch windup
    pub fn begin_punch(&mut self) {
        if self.attack == AttackState::Idle {
            self.attack = AttackState::Attacking {
                frames_remaining: PUNCH_FRAMES,
            };
        }
    }

    /// Whether a punch thrown now would land on `target`
    pub fn punch_connects(&self, target: &Combatant) -> bool {
        let (ax, ay) = (self.pos.x, self.pos.y);
        let (tx, ty) = (target.pos.x, target.pos.y);
        !target.is_stunned()
            && ax - self.size.x < tx
            && tx < ax + self.size.x
            && ay <= ty
            && ty <= ay + self.size.y
    }

    /// Apply damage, floored at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).clamp(0, self.max_health);
    }

    /// Hit reaction: pop into the jump arc and stay stunned for its length
    pub fn knock_up(&mut self) {
        if self.jump == JumpState::Grounded {
            self.jump = JumpState::Jumping { phase: JUMP_PHASE };
        }
        self.stun = StunState::Stunned {
            ticks_remaining: JUMP_ARC_TICKS + 1,
        };
    }

    /// Flight branch: toggle on, or move up/down, or toggle off
    pub fn update_fly(&mut self, cmds: &PlayerCommands) {
        match self.fly {
            FlyState::Disabled => {
                if cmds.fly {
                    self.fly = FlyState::Flying;
                }
            }
            FlyState::Flying => {
                if cmds.fly_up && self.pos.y > 0 {
                    self.pos.y = (self.pos.y - self.speed).max(0);
                } else if cmds.fly_down && self.pos.y < ARENA_HEIGHT - self.size.y - self.speed {
                    self.pos.y += self.speed;
                } else if cmds.fly_off {
                    self.fly = FlyState::Disabled;
                }
            }
        }
    }

    /// Jump branch: start a jump, or advance the arc one tick
    pub fn update_jump(&mut self, cmds: &PlayerCommands) {
        match self.jump {
            JumpState::Grounded => {
                if cmds.jump {
                    self.jump = JumpState::Jumping { phase: JUMP_PHASE };
                }
            }
            JumpState::Jumping { phase } if phase >= -JUMP_PHASE => {
                self.pos.y += jump_displacement(phase);
                self.jump = JumpState::Jumping { phase: phase - 1 };
            }
            JumpState::Jumping { .. } => {
                self.jump = JumpState::Grounded;
            }
        }
    }
}
