//! In-game overlay text and health bars

use crate::sim::{MatchState, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBar {
    /// Full bar width in pixels
    pub width: i32,
    /// Filled (remaining health) width in pixels
    pub fill: i32,
    /// Bars are hidden for a downed player
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// "<name>'s Health: <n>" for each side
    pub health_labels: [String; 2],
    pub health_bars: [HealthBar; 2],
    pub win_banner: Option<String>,
    /// Show the Play Again button
    pub play_again: bool,
}

impl Hud {
    pub fn build(state: &MatchState, names: &[String; 2]) -> Self {
        let label = |side: Side| {
            format!(
                "{}'s Health: {}",
                names[side.index()],
                state.combatant(side).health
            )
        };
        let bar = |side: Side| {
            let c = state.combatant(side);
            HealthBar {
                width: c.profile.health_bar_width,
                fill: c.health_bar_fill(),
                visible: c.is_alive(),
            }
        };

        Self {
            health_labels: [label(Side::A), label(Side::B)],
            health_bars: [bar(Side::A), bar(Side::B)],
            win_banner: state
                .winner
                .map(|side| format!("{} Wins! Congratulations!", names[side.index()])),
            play_again: state.is_over(),
        }
    }
}
