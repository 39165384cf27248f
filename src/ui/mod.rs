//! Headless screen logic: menu name entry, pause menu, controls sheet, HUD
//!
//! Drawing is left to the platform; these types hold what each screen shows
//! and decide what a click or key press does.

pub mod controls_sheet;
pub mod hud;
pub mod menu;
pub mod name_field;
pub mod pause;

pub use controls_sheet::ControlsSheet;
pub use hud::{HealthBar, Hud};
pub use menu::{MainMenu, MenuOutcome};
pub use name_field::{FieldStyle, NameField};
pub use pause::{PauseMenu, PauseResult};

/// Clickable buttons across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    // Main menu
    Start,
    Controls,
    Quit,
    // Controls screen
    Back,
    // In game
    Pause,
    PlayAgain,
    // Pause screen
    Resume,
    Reset,
    About,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Button(Button),
    /// Name entry box by player slot
    NameField(usize),
    Elsewhere,
}
