//! Key edges to control intents
//!
//! Raw press/release events are folded into three intents: turn left, turn
//! right and thrust. While both turn keys are held the most recently pressed
//! one wins; releasing it falls back to the other.

use serde::{Deserialize, Serialize};

/// Keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    TurnLeft,
    TurnRight,
    Thrust,
    /// Anything else (ignored)
    Unused,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::TurnLeft,
            "ArrowUp" => Key::Thrust,
            "ArrowRight" => Key::TurnRight,
            _ => Key::Unused,
        }
    }
}

/// A single press or release edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

/// Current control intents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlIntents {
    left_held: bool,
    right_held: bool,
    /// Most recently pressed turn key still held
    last_turn: Option<Turn>,
    thrust: bool,
}

impl ControlIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key edge
    pub fn apply(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => self.press(key),
            KeyEvent::Released(key) => self.release(key),
        }
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::TurnLeft => {
                self.left_held = true;
                self.last_turn = Some(Turn::Left);
            }
            Key::TurnRight => {
                self.right_held = true;
                self.last_turn = Some(Turn::Right);
            }
            Key::Thrust => self.thrust = true,
            Key::Unused => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::TurnLeft => {
                self.left_held = false;
                if self.last_turn == Some(Turn::Left) {
                    self.last_turn = self.right_held.then_some(Turn::Right);
                }
            }
            Key::TurnRight => {
                self.right_held = false;
                if self.last_turn == Some(Turn::Right) {
                    self.last_turn = self.left_held.then_some(Turn::Left);
                }
            }
            Key::Thrust => self.thrust = false,
            Key::Unused => {}
        }
    }

    /// Turn direction: +1 counter-clockwise (left), -1 clockwise (right), 0 none
    pub fn turn(&self) -> f32 {
        match self.last_turn {
            Some(Turn::Left) => 1.0,
            Some(Turn::Right) => -1.0,
            None => 0.0,
        }
    }

    pub fn thrusting(&self) -> bool {
        self.thrust
    }

    /// Drop every held key
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Key::TurnLeft);
        assert_eq!(Key::from_key_name("ArrowUp"), Key::Thrust);
        assert_eq!(Key::from_key_name("ArrowRight"), Key::TurnRight);
        assert_eq!(Key::from_key_name("ArrowDown"), Key::Unused);
    }

    #[test]
    fn test_single_turn_press_release() {
        let mut intents = ControlIntents::new();
        intents.apply(KeyEvent::Pressed(Key::TurnLeft));
        assert_eq!(intents.turn(), 1.0);
        intents.apply(KeyEvent::Released(Key::TurnLeft));
        assert_eq!(intents.turn(), 0.0);

        intents.apply(KeyEvent::Pressed(Key::TurnRight));
        assert_eq!(intents.turn(), -1.0);
        intents.apply(KeyEvent::Released(Key::TurnRight));
        assert_eq!(intents.turn(), 0.0);
    }

    #[test]
    fn test_most_recent_turn_wins() {
        let mut intents = ControlIntents::new();
        intents.press(Key::TurnLeft);
        intents.press(Key::TurnRight);
        assert_eq!(intents.turn(), -1.0);

        // Releasing the newer key falls back to the older one still held
        intents.release(Key::TurnRight);
        assert_eq!(intents.turn(), 1.0);

        intents.press(Key::TurnRight);
        intents.press(Key::TurnLeft);
        assert_eq!(intents.turn(), 1.0);

        // Releasing the older key leaves the newer one in effect
        intents.release(Key::TurnRight);
        assert_eq!(intents.turn(), 1.0);
        intents.release(Key::TurnLeft);
        assert_eq!(intents.turn(), 0.0);
    }

    #[test]
    fn test_thrust_and_unused() {
        let mut intents = ControlIntents::new();
        intents.apply(KeyEvent::Pressed(Key::Unused));
        assert_eq!(intents, ControlIntents::default());

        intents.apply(KeyEvent::Pressed(Key::Thrust));
        assert!(intents.thrusting());
        intents.apply(KeyEvent::Released(Key::Unused));
        assert!(intents.thrusting());
        intents.apply(KeyEvent::Released(Key::Thrust));
        assert!(!intents.thrusting());
    }

    #[test]
    fn test_release_without_press_is_harmless() {
        let mut intents = ControlIntents::new();
        intents.release(Key::TurnLeft);
        intents.release(Key::Thrust);
        assert_eq!(intents, ControlIntents::default());
    }
}
