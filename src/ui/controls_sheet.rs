//! Controls screen text
//!
//! The sheet format is plain text whose first character is the column
//! delimiter; the chunk after the final delimiter is ignored. Each column is
//! drawn side by side, one line per row.

use crate::input::{Controls, Key};
use crate::sim::Side;

const DELIMITER: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlsSheet {
    pub columns: Vec<Vec<String>>,
}

impl ControlsSheet {
    pub fn parse(text: &str) -> Self {
        let mut chars = text.chars();
        let Some(delimiter) = chars.next() else {
            return Self::default();
        };
        let body = chars.as_str();

        let mut chunks: Vec<&str> = body.split(delimiter).collect();
        chunks.pop();

        let columns = chunks
            .into_iter()
            .map(|chunk| chunk.lines().map(str::to_string).collect())
            .collect();
        Self { columns }
    }

    /// Build the sheet from the active key bindings
    pub fn from_controls(controls: &Controls) -> Self {
        let mut text = String::new();
        text.push(DELIMITER);
        for side in [Side::A, Side::B] {
            text.push_str(&format!("Player {}\n", side.index() + 1));
            for (action, key) in controls.player(side).describe() {
                text.push_str(&format!("{action}: {key}\n"));
            }
            if side == Side::A {
                text.push_str(&format!("Pause: {}\n", controls.pause));
                text.push_str(&format!("Reset: {}\n", controls.reset));
            }
            text.push(DELIMITER);
        }
        Self::parse(&text)
    }

    /// Keys that leave the controls screen back to the menu
    pub fn is_back_key(key: Key) -> bool {
        matches!(
            key,
            Key::S | Key::Right | Key::Up | Key::Return | Key::Backspace
        )
    }
}
