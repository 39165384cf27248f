//! Main menu: two name boxes plus Start / Controls / Quit

use super::name_field::{FieldEdit, NameField};
use super::{Button, ClickTarget};
use crate::input::Key;

/// What the menu wants the app to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    Start([String; 2]),
    ShowControls,
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct MainMenu {
    pub fields: [NameField; 2],
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both names, once both have been committed
    pub fn names(&self) -> Option<[String; 2]> {
        let [a, b] = &self.fields;
        if a.value().is_empty() || b.value().is_empty() {
            return None;
        }
        Some([a.value().to_string(), b.value().to_string()])
    }

    pub fn click(&mut self, target: ClickTarget) -> MenuOutcome {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.click(target == ClickTarget::NameField(i));
        }

        match target {
            ClickTarget::Button(Button::Quit) => MenuOutcome::Quit,
            ClickTarget::Button(Button::Start) => match self.names() {
                Some(names) => MenuOutcome::Start(names),
                None => {
                    log::debug!("Start pressed before both names were entered");
                    MenuOutcome::Stay
                }
            },
            ClickTarget::Button(Button::Controls) => MenuOutcome::ShowControls,
            _ => MenuOutcome::Stay,
        }
    }

    pub fn key(&mut self, key: Key) -> MenuOutcome {
        let edit = match key {
            Key::Escape => return MenuOutcome::Quit,
            Key::Return => FieldEdit::Commit,
            Key::Backspace => FieldEdit::Backspace,
            _ => return MenuOutcome::Stay,
        };
        for field in &mut self.fields {
            field.edit(edit);
        }
        MenuOutcome::Stay
    }

    pub fn text(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        for field in &mut self.fields {
            field.edit(FieldEdit::Insert(c));
        }
    }
}
