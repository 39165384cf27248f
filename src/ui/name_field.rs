//! Player name entry box

/// Longest name the box accepts
pub const MAX_NAME_LEN: usize = 10;

/// Placeholder shown before a name is typed
pub const PLACEHOLDER: &str = "Enter name";

/// Outline color state for the box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    Inactive,
    Active,
    Committed,
}

/// Edits for a focused field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Commit,
    Backspace,
    Insert(char),
}

/// A click-to-focus text box whose value is only set when Enter is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameField {
    text: String,
    value: String,
    active: bool,
}

impl Default for NameField {
    fn default() -> Self {
        Self::new()
    }
}

impl NameField {
    pub fn new() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            value: String::new(),
            active: false,
        }
    }

    /// Text currently displayed in the box
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Committed value; empty until Enter is pressed
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn style(&self) -> FieldStyle {
        if self.active {
            FieldStyle::Active
        } else if !self.value.is_empty() {
            FieldStyle::Committed
        } else {
            FieldStyle::Inactive
        }
    }

    /// A click inside toggles focus and swaps the placeholder in and out;
    /// a click anywhere else drops focus.
    pub fn click(&mut self, inside: bool) {
        if !inside {
            self.active = false;
            return;
        }
        self.active = !self.active;
        if self.text.is_empty() {
            self.text = PLACEHOLDER.to_string();
        } else if self.text == PLACEHOLDER {
            self.text.clear();
        }
    }

    /// Apply an edit; ignored unless focused
    pub fn edit(&mut self, edit: FieldEdit) {
        if !self.active {
            return;
        }
        match edit {
            FieldEdit::Commit => {
                self.value = self.text.clone();
                self.active = false;
            }
            FieldEdit::Backspace => {
                self.text.pop();
            }
            FieldEdit::Insert(c) => {
                if self.text.chars().count() < MAX_NAME_LEN {
                    self.text.push(c);
                }
            }
        }
    }
}
