//! Fixed tick match update
//!
//! One call to [`step`] advances the match by one tick given both players'
//! commands for that tick.

use serde::{Deserialize, Serialize};

use super::state::{MatchState, Side};

/// Commands for one player for a single tick (derived from held keys)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCommands {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Enable flight
    pub fly: bool,
    pub fly_up: bool,
    pub fly_down: bool,
    /// Disable flight
    pub fly_off: bool,
    pub punch: bool,
    pub shoot: bool,
    pub hack: bool,
    pub unhack: bool,
}

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub a: PlayerCommands,
    pub b: PlayerCommands,
    /// Restart the match at the end of this tick
    pub reset: bool,
}

impl TickInput {
    pub fn commands(&self, side: Side) -> &PlayerCommands {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

/// Advance the match by one tick.
///
/// Order: timers, projectiles, deaths, side A, side B, deaths again, reset.
pub fn step(state: &mut MatchState, input: &TickInput) {
    state.tick += 1;

    // Both sides count down together so a fresh stun lasts the same
    // number of ticks whoever landed the hit
    for side in [Side::A, Side::B] {
        let c = state.combatant_mut(side);
        if c.is_alive() {
            c.tick_timers();
        }
    }

    advance_projectiles(state);
    state.resolve_deaths();

    for side in [Side::A, Side::B] {
        update_side(state, side, input.commands(side));
    }
    state.resolve_deaths();

    if input.reset {
        state.reset();
    }
}

/// Move projectiles and apply hits against the side that did not fire them
fn advance_projectiles(state: &mut MatchState) {
    let in_flight = std::mem::take(&mut state.projectiles);
    let mut kept = Vec::with_capacity(in_flight.len());

    for mut projectile in in_flight {
        let target_side = projectile.owner.other();
        if state.combat_active() && projectile.hits(state.combatant(target_side)) {
            let damage = state.combatant(projectile.owner).damage;
            let target = state.combatant_mut(target_side);
            target.take_damage(damage);
            if target.is_alive() {
                target.knock_up();
            }
            log::debug!(
                "Projectile hit side {:?} for {} (health {})",
                target_side,
                damage,
                target.health
            );
            continue;
        }
        if projectile.advance() {
            kept.push(projectile);
        }
    }

    state.projectiles = kept;
}

/// Apply one player's commands: shooting, the action chain, then flight
/// and jump
fn update_side(state: &mut MatchState, side: Side, cmds: &PlayerCommands) {
    if !state.combatant(side).is_alive() {
        return;
    }
    let combat = state.combat_active();

    if cmds.shoot && combat {
        state.try_fire(side);
    }

    let (me, opponent) = state.pair_mut(side);
    let punch_edge = me.punch_pressed(cmds.punch);

    // First match wins; a blocked step falls through to the next entry
    if cmds.punch {
        me.begin_punch();
        if punch_edge && combat && me.punch_connects(opponent) {
            opponent.take_damage(me.damage);
            if opponent.is_alive() {
                opponent.knock_up();
            }
            log::debug!(
                "Side {:?} punched for {} (opponent health {})",
                side,
                me.damage,
                opponent.health
            );
        }
    } else {
        let stepped = (cmds.move_left && me.step_left(opponent))
            || (cmds.move_right && me.step_right(opponent));
        if !stepped {
            if cmds.hack {
                me.hack();
            } else if cmds.unhack {
                me.unhack();
            } else {
                me.stand_idle();
            }
        }
    }

    me.update_fly(cmds);
    me.update_jump(cmds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{JumpState, Projectile};
    use glam::IVec2;
    use proptest::prelude::*;

    fn b_input(b: PlayerCommands) -> TickInput {
        TickInput {
            b,
            ..Default::default()
        }
    }

    fn a_input(a: PlayerCommands) -> TickInput {
        TickInput {
            a,
            ..Default::default()
        }
    }

    #[test]
    fn test_punch_knockout_ends_match() {
        let mut state = MatchState::new();
        state.a.pos = IVec2::new(700, 400);
        state.a.health = 1;

        let punch = b_input(PlayerCommands {
            punch: true,
            ..Default::default()
        });
        step(&mut state, &punch);

        assert_eq!(state.a.health, 0);
        assert!(!state.a.is_alive());
        assert_eq!(state.winner, Some(Side::B));

        // Release and punch again: nothing changes
        step(&mut state, &TickInput::default());
        step(&mut state, &punch);
        assert_eq!(state.a.health, 0);
        assert_eq!(state.winner, Some(Side::B));
        assert!(state.b.is_alive());
    }

    #[test]
    fn test_punch_lands_once_per_press() {
        let mut state = MatchState::new();
        state.a.pos = IVec2::new(700, 400);
        let punch = b_input(PlayerCommands {
            punch: true,
            ..Default::default()
        });
        for _ in 0..60 {
            step(&mut state, &punch);
        }
        assert_eq!(state.a.health, 9);
    }

    #[test]
    fn test_punch_blocks_movement() {
        let mut state = MatchState::new();
        let input = b_input(PlayerCommands {
            punch: true,
            move_left: true,
            ..Default::default()
        });
        step(&mut state, &input);
        assert_eq!(state.b.pos.x, 725);
        assert!(matches!(
            state.b.attack,
            crate::sim::AttackState::Attacking { .. }
        ));
    }

    #[test]
    fn test_third_shot_waits_for_expiry() {
        let mut state = MatchState::new();
        // Out of the line of fire so shots run off the arena
        state.b.pos.y = 0;
        let shoot = a_input(PlayerCommands {
            shoot: true,
            ..Default::default()
        });

        let mut live = vec![0usize];
        for _ in 1..=90 {
            step(&mut state, &shoot);
            live.push(state.projectiles.len());
        }

        assert_eq!(live[1], 1);
        assert_eq!(live[7], 1);
        assert!(live[8..=79].iter().all(|&n| n == 2));
        assert_eq!(live[80], 1, "first shot left the arena");
        assert_eq!(live[84], 1);
        assert_eq!(live[85], 2, "next gate opening fires again");
        assert!(live.iter().all(|&n| n <= MAX_LIVE_PROJECTILES));
    }

    #[test]
    fn test_projectile_hit_applies_once() {
        let mut state = MatchState::new();
        state.projectiles.push(Projectile {
            pos: IVec2::new(721, 430),
            radius: PROJECTILE_RADIUS,
            vel: PROJECTILE_SPEED,
            owner: Side::A,
        });
        step(&mut state, &TickInput::default());
        assert_eq!(state.b.health, 13);
        assert!(state.projectiles.is_empty());
        assert!(state.b.is_stunned());
        assert!(state.b.is_airborne());

        step(&mut state, &TickInput::default());
        assert_eq!(state.b.health, 13);
    }

    #[test]
    fn test_projectile_ignores_owner() {
        let mut state = MatchState::new();
        state.projectiles.push(Projectile {
            pos: state.a.rect().center(),
            radius: PROJECTILE_RADIUS,
            vel: -PROJECTILE_SPEED,
            owner: Side::A,
        });
        step(&mut state, &TickInput::default());
        assert_eq!(state.a.health, 10);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_hack_then_unhack() {
        let mut state = MatchState::new();
        let hack = b_input(PlayerCommands {
            hack: true,
            ..Default::default()
        });
        for _ in 0..5 {
            step(&mut state, &hack);
        }
        assert_eq!(state.b.damage, 6);
        assert_eq!(state.b.speed, 11);

        let unhack = b_input(PlayerCommands {
            unhack: true,
            ..Default::default()
        });
        step(&mut state, &unhack);
        assert_eq!((state.b.speed, state.b.damage), (6, 1));
    }

    #[test]
    fn test_grounded_players_block_and_jump_passes() {
        let mut state = MatchState::new();
        state.a.pos.x = 660;
        let right = a_input(PlayerCommands {
            move_right: true,
            ..Default::default()
        });
        for _ in 0..20 {
            step(&mut state, &right);
        }
        assert_eq!(state.a.pos.x, 690);

        let leap = a_input(PlayerCommands {
            move_right: true,
            jump: true,
            ..Default::default()
        });
        for _ in 0..10 {
            step(&mut state, &leap);
        }
        assert!(state.a.pos.x > state.b.pos.x);
    }

    #[test]
    fn test_jump_lands_after_arc() {
        let mut state = MatchState::new();
        let jump = a_input(PlayerCommands {
            jump: true,
            ..Default::default()
        });
        step(&mut state, &jump);
        assert_eq!(state.a.jump, JumpState::Jumping { phase: 10 });
        for _ in 0..JUMP_ARC_TICKS {
            step(&mut state, &TickInput::default());
        }
        assert_eq!(state.a.pos.y, 400);
        step(&mut state, &TickInput::default());
        assert_eq!(state.a.jump, JumpState::Grounded);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = MatchState::new();
        let busy = TickInput {
            a: PlayerCommands {
                move_right: true,
                shoot: true,
                fly: true,
                ..Default::default()
            },
            b: PlayerCommands {
                hack: true,
                ..Default::default()
            },
            reset: false,
        };
        for _ in 0..12 {
            step(&mut state, &busy);
        }
        step(
            &mut state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
        );

        let fresh = MatchState::new();
        assert_eq!(state.a, fresh.a);
        assert_eq!(state.b, fresh.b);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_winner_keeps_moving_without_combat() {
        let mut state = MatchState::new();
        state.b.health = 1;
        state.projectiles.push(Projectile {
            pos: IVec2::new(721, 430),
            radius: PROJECTILE_RADIUS,
            vel: PROJECTILE_SPEED,
            owner: Side::A,
        });
        step(&mut state, &TickInput::default());
        assert_eq!(state.winner, Some(Side::A));

        let input = a_input(PlayerCommands {
            move_right: true,
            shoot: true,
            ..Default::default()
        });
        step(&mut state, &input);
        assert_eq!(state.a.pos.x, 55);
        assert!(state.projectiles.is_empty(), "no new shots once over");
    }

    #[test]
    fn test_fly_and_jump_same_tick() {
        let mut state = MatchState::new();
        let speed = state.a.speed;
        let take_off = a_input(PlayerCommands {
            fly: true,
            ..Default::default()
        });
        step(&mut state, &take_off);
        assert!(state.a.is_flying());
        assert_eq!(state.a.pos.y, 400);

        // W is bound to both fly-up and jump
        let up = a_input(PlayerCommands {
            fly_up: true,
            jump: true,
            ..Default::default()
        });
        step(&mut state, &up);
        assert_eq!(state.a.pos.y, 400 - speed);
        assert_eq!(state.a.jump, JumpState::Jumping { phase: 10 });

        step(&mut state, &up);
        assert_eq!(state.a.pos.y, 400 - 2 * speed - 33);
        assert_eq!(state.a.jump, JumpState::Jumping { phase: 9 });
    }

    #[test]
    fn test_killing_hit_leaves_body_grounded() {
        let mut state = MatchState::new();
        state.b.health = 1;
        state.projectiles.push(Projectile {
            pos: IVec2::new(721, 430),
            radius: PROJECTILE_RADIUS,
            vel: PROJECTILE_SPEED,
            owner: Side::A,
        });
        for _ in 0..100 {
            step(&mut state, &TickInput::default());
        }
        assert!(!state.b.is_alive());
        assert_eq!(state.b.jump, JumpState::Grounded);
        assert!(!state.b.is_stunned());
        assert_eq!(state.b.pos.y, 400);

        // The body still blocks the winner
        state.a.pos.x = 660;
        let right = a_input(PlayerCommands {
            move_right: true,
            ..Default::default()
        });
        for _ in 0..20 {
            step(&mut state, &right);
        }
        assert_eq!(state.a.pos.x, 690);
    }

    fn stun_ticks_after_punch(attacker: Side) -> u32 {
        let mut state = MatchState::new();
        state.a.pos = IVec2::new(700, 400);
        let punch = PlayerCommands {
            punch: true,
            ..Default::default()
        };
        let input = match attacker {
            Side::A => a_input(punch),
            Side::B => b_input(punch),
        };
        step(&mut state, &input);

        let target = attacker.other();
        assert!(state.combatant(target).is_stunned());
        let mut ticks = 0;
        while state.combatant(target).is_stunned() {
            step(&mut state, &TickInput::default());
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn test_stun_length_same_for_both_sides() {
        assert_eq!(stun_ticks_after_punch(Side::A), JUMP_ARC_TICKS + 1);
        assert_eq!(stun_ticks_after_punch(Side::B), JUMP_ARC_TICKS + 1);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            a_input(PlayerCommands {
                move_right: true,
                shoot: true,
                ..Default::default()
            }),
            b_input(PlayerCommands {
                jump: true,
                move_left: true,
                ..Default::default()
            }),
            TickInput::default(),
        ];
        let mut s1 = MatchState::new();
        let mut s2 = MatchState::new();
        for i in 0..200 {
            let input = &inputs[i % inputs.len()];
            step(&mut s1, input);
            step(&mut s2, input);
        }
        let j1 = serde_json::to_string(&s1).unwrap();
        let j2 = serde_json::to_string(&s2).unwrap();
        assert_eq!(j1, j2);
    }

    fn arb_commands() -> impl Strategy<Value = PlayerCommands> {
        proptest::collection::vec(any::<bool>(), 11).prop_map(|b| PlayerCommands {
            move_left: b[0],
            move_right: b[1],
            jump: b[2],
            fly: b[3],
            fly_up: b[4],
            fly_down: b[5],
            fly_off: b[6],
            punch: b[7],
            shoot: b[8],
            hack: b[9] && b[10],
            unhack: b[10],
        })
    }

    proptest! {
        #[test]
        fn prop_match_invariants(
            ticks in proptest::collection::vec((arb_commands(), arb_commands()), 1..300)
        ) {
            let mut state = MatchState::new();
            for (a, b) in ticks {
                step(&mut state, &TickInput { a, b, reset: false });

                for c in [&state.a, &state.b] {
                    prop_assert!(c.health >= 0 && c.health <= c.max_health);
                    prop_assert!(c.pos.x >= 0 && c.pos.x <= WALK_LIMIT_X - c.size.x);
                }
                prop_assert!(state.a.is_alive() || state.b.is_alive());
                prop_assert!(state.projectiles.len() <= MAX_LIVE_PROJECTILES);
                match state.winner {
                    Some(side) => {
                        prop_assert!(state.combatant(side).is_alive());
                        prop_assert!(!state.combatant(side.other()).is_alive());
                    }
                    None => prop_assert!(state.combat_active()),
                }
            }
        }
    }
}
