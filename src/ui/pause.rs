//! Pause screen: Resume / Reset / Quit / About

use super::{Button, ClickTarget};
use crate::input::Key;

/// Credit line toggled by the About button
pub const ABOUT_TEXT: &str = "Created By: Sanvit Katrekar";

/// How the pause screen was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseResult {
    Resume,
    Reset,
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct PauseMenu {
    about_shown: bool,
}

impl PauseMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit line, when toggled on
    pub fn about(&self) -> Option<&'static str> {
        self.about_shown.then_some(ABOUT_TEXT)
    }

    /// Forget the About toggle (called each time the screen opens)
    pub fn open(&mut self) {
        self.about_shown = false;
    }

    pub fn click(&mut self, target: ClickTarget) -> Option<PauseResult> {
        match target {
            ClickTarget::Button(Button::Resume) => Some(PauseResult::Resume),
            ClickTarget::Button(Button::Reset) => Some(PauseResult::Reset),
            ClickTarget::Button(Button::Quit) => Some(PauseResult::Quit),
            ClickTarget::Button(Button::About) => {
                self.about_shown = !self.about_shown;
                None
            }
            _ => None,
        }
    }

    pub fn key(&mut self, key: Key) -> Option<PauseResult> {
        match key {
            Key::Escape => Some(PauseResult::Quit),
            Key::S | Key::Return => Some(PauseResult::Resume),
            _ => None,
        }
    }
}
