//! Match state: both combatants, live projectiles and the win condition
//!
//! Everything the presentation layer needs each frame is readable from here
//! without consulting tick-internal counters.

use serde::{Deserialize, Serialize};

use super::combatant::{Combatant, CombatantProfile};
use super::projectile::Projectile;
use crate::consts::*;

/// Which player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Player slot index (0 for A, 1 for B)
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub a: Combatant,
    pub b: Combatant,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    /// Set once a side's health reaches zero; cleared only by reset
    pub winner: Option<Side>,
    /// Simulation tick counter (not reset with the match)
    pub tick: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// A fresh match with the standard two characters
    pub fn new() -> Self {
        Self::with_profiles(CombatantProfile::player_one(), CombatantProfile::player_two())
    }

    pub fn with_profiles(a: CombatantProfile, b: CombatantProfile) -> Self {
        Self {
            a: Combatant::new(a),
            b: Combatant::new(b),
            projectiles: Vec::new(),
            winner: None,
            tick: 0,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Mutable access to `side` and its opponent at once
    pub fn pair_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        match side {
            Side::A => (&mut self.a, &mut self.b),
            Side::B => (&mut self.b, &mut self.a),
        }
    }

    /// Both combatants standing; damage and new shots only happen while true
    pub fn combat_active(&self) -> bool {
        self.a.is_alive() && self.b.is_alive()
    }

    /// Terminal until reset
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Record the winner once a side has dropped. Side A is checked first, and
    /// combat stops as soon as either health hits zero, so only one side can
    /// ever be down.
    pub fn resolve_deaths(&mut self) {
        if self.winner.is_some() {
            return;
        }
        let winner = if !self.a.is_alive() {
            Some(Side::B)
        } else if !self.b.is_alive() {
            Some(Side::A)
        } else {
            None
        };
        if let Some(side) = winner {
            log::info!("Match over at tick {}: side {:?} wins", self.tick, side);
            self.winner = Some(side);
        }
    }

    /// Fire for `side` if its gate is open. The gate closes on any attempt;
    /// a projectile only spawns while fewer than two are live.
    pub fn try_fire(&mut self, side: Side) -> bool {
        let shooter = self.combatant_mut(side);
        if shooter.fire_cooldown != 0 {
            return false;
        }
        shooter.fire_cooldown = 1;

        if self.projectiles.len() >= MAX_LIVE_PROJECTILES {
            return false;
        }
        let projectile = Projectile::fire(side, self.combatant(side));
        log::debug!("Side {:?} fired from {}", side, projectile.pos);
        self.projectiles.push(projectile);
        true
    }

    /// Restore start-of-match state for both sides and clear projectiles
    pub fn reset(&mut self) {
        self.a.reset();
        self.b.reset();
        self.projectiles.clear();
        self.winner = None;
        log::info!("Match reset at tick {}", self.tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_new_match() {
        let state = MatchState::new();
        assert_eq!(state.a.pos, IVec2::new(50, 400));
        assert_eq!(state.b.pos, IVec2::new(725, 400));
        assert_eq!((state.a.health, state.b.health), (10, 15));
        assert_eq!((state.a.speed, state.b.speed), (5, 6));
        assert!(state.projectiles.is_empty());
        assert!(state.combat_active());
        assert!(!state.is_over());
    }

    #[test]
    fn test_side_a_checked_first() {
        let mut state = MatchState::new();
        state.b.health = 0;
        state.resolve_deaths();
        assert_eq!(state.winner, Some(Side::A));

        // Winner never changes afterwards
        state.a.health = 0;
        state.resolve_deaths();
        assert_eq!(state.winner, Some(Side::A));
    }

    #[test]
    fn test_try_fire_gate() {
        let mut state = MatchState::new();
        assert!(state.try_fire(Side::A));
        assert!(!state.try_fire(Side::A), "cooldown closes the gate");

        state.a.fire_cooldown = 0;
        assert!(state.try_fire(Side::A));
        state.a.fire_cooldown = 0;
        assert!(!state.try_fire(Side::A), "two already live");
        assert_eq!(state.projectiles.len(), 2);
        assert_eq!(state.a.fire_cooldown, 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = MatchState::new();
        state.a.pos = IVec2::new(300, 120);
        state.b.health = 0;
        state.b.speed = 40;
        state.try_fire(Side::A);
        state.resolve_deaths();

        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);

        let fresh = MatchState::new();
        assert_eq!(state.a, fresh.a);
        assert_eq!(state.b, fresh.b);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.winner, None);
    }
}
