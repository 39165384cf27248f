//! Keyboard input: held-key snapshots and per-player bindings
//!
//! The platform reports which keys are down each tick; bindings turn that
//! snapshot into [`PlayerCommands`] for the simulation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::{PlayerCommands, Side, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    D,
    F,
    G,
    I,
    J,
    K,
    L,
    N,
    P,
    Q,
    R,
    S,
    W,
    X,
    Slash,
    Period,
    Space,
    Escape,
    Return,
    Backspace,
    Up,
    Right,
}

impl Key {
    /// Label shown on the controls screen
    pub fn label(self) -> &'static str {
        match self {
            Key::A => "A",
            Key::D => "D",
            Key::F => "F",
            Key::G => "G",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::N => "N",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::W => "W",
            Key::X => "X",
            Key::Slash => "/",
            Key::Period => ".",
            Key::Space => "Space",
            Key::Escape => "Esc",
            Key::Return => "Enter",
            Key::Backspace => "Backspace",
            Key::Up => "Up",
            Key::Right => "Right",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keys held down this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: BTreeSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// True if a binding is set and its key is down
    pub fn bound_down(&self, key: Option<Key>) -> bool {
        key.is_some_and(|k| self.is_down(k))
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// One player's key map. Unbound actions are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub move_left: Key,
    pub move_right: Key,
    pub jump: Key,
    pub fly: Key,
    pub fly_up: Key,
    pub fly_down: Key,
    pub fly_off: Key,
    #[serde(default)]
    pub punch: Option<Key>,
    #[serde(default)]
    pub shoot: Option<Key>,
    #[serde(default)]
    pub hack: Option<Key>,
    #[serde(default)]
    pub unhack: Option<Key>,
}

impl KeyBindings {
    /// Left-hand player: WASD cluster, Q to shoot. Jump and fly-up share W.
    pub const fn player_one() -> Self {
        Self {
            move_left: Key::A,
            move_right: Key::D,
            jump: Key::W,
            fly: Key::F,
            fly_up: Key::W,
            fly_down: Key::S,
            fly_off: Key::X,
            punch: None,
            shoot: Some(Key::Q),
            hack: None,
            unhack: None,
        }
    }

    /// Right-hand player: IJKL cluster, P to punch, / and . for hack/unhack.
    /// Jump and fly-up share I.
    pub const fn player_two() -> Self {
        Self {
            move_left: Key::J,
            move_right: Key::L,
            jump: Key::I,
            fly: Key::G,
            fly_up: Key::I,
            fly_down: Key::K,
            fly_off: Key::N,
            punch: Some(Key::P),
            shoot: None,
            hack: Some(Key::Slash),
            unhack: Some(Key::Period),
        }
    }

    pub fn commands(&self, keys: &KeyState) -> PlayerCommands {
        PlayerCommands {
            move_left: keys.is_down(self.move_left),
            move_right: keys.is_down(self.move_right),
            jump: keys.is_down(self.jump),
            fly: keys.is_down(self.fly),
            fly_up: keys.is_down(self.fly_up),
            fly_down: keys.is_down(self.fly_down),
            fly_off: keys.is_down(self.fly_off),
            punch: keys.bound_down(self.punch),
            shoot: keys.bound_down(self.shoot),
            hack: keys.bound_down(self.hack),
            unhack: keys.bound_down(self.unhack),
        }
    }

    /// Action name and key pairs, in the order the controls screen lists them
    pub fn describe(&self) -> Vec<(&'static str, Key)> {
        let mut rows = vec![
            ("Move left", self.move_left),
            ("Move right", self.move_right),
            ("Jump", self.jump),
            ("Fly", self.fly),
            ("Fly up", self.fly_up),
            ("Fly down", self.fly_down),
            ("Stop flying", self.fly_off),
        ];
        let optional = [
            ("Punch", self.punch),
            ("Shoot", self.shoot),
            ("Hack", self.hack),
            ("Unhack", self.unhack),
        ];
        rows.extend(optional.into_iter().filter_map(|(name, key)| key.map(|k| (name, k))));
        rows
    }
}

/// Keys for both players plus the match-wide keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub players: [KeyBindings; 2],
    pub pause: Key,
    pub reset: Key,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            players: [KeyBindings::player_one(), KeyBindings::player_two()],
            pause: Key::Space,
            reset: Key::R,
        }
    }
}

impl Controls {
    pub fn player(&self, side: Side) -> &KeyBindings {
        &self.players[side.index()]
    }

    /// Build the simulation input for one tick from held keys
    pub fn tick_input(&self, keys: &KeyState) -> TickInput {
        TickInput {
            a: self.player(Side::A).commands(keys),
            b: self.player(Side::B).commands(keys),
            reset: keys.is_down(self.reset),
        }
    }
}
