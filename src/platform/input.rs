//! Key bindings
//!
//! Hosts report which physical keys are held; bindings fold them into the
//! four signals the simulation understands.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    P,
    ArrowUp,
    ArrowDown,
    Space,
}

/// Which keys drive which signal. Any bound key being held raises its signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub hold_pause: Vec<Key>,
    pub toggle_pause: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec![Key::W, Key::ArrowUp],
            down: vec![Key::S, Key::ArrowDown],
            hold_pause: vec![Key::Space],
            toggle_pause: vec![Key::P],
        }
    }
}

impl KeyBindings {
    /// Input for one frame from the set of currently held keys
    pub fn signals(&self, held: &HashSet<Key>) -> TickInput {
        let any = |keys: &[Key]| keys.iter().any(|k| held.contains(k));
        TickInput {
            up: any(self.up.as_slice()),
            down: any(self.down.as_slice()),
            hold_pause: any(self.hold_pause.as_slice()),
            toggle_pause: any(self.toggle_pause.as_slice()),
        }
    }

    /// One-line controls summary, e.g. for a help overlay or log line
    pub fn hint(&self) -> String {
        let names = |keys: &[Key]| {
            keys.iter()
                .map(|k| format!("{:?}", k))
                .collect::<Vec<_>>()
                .join("/")
        };
        format!(
            "{} up | {} down | {} toggle pause | {} hold to pause",
            names(self.up.as_slice()),
            names(self.down.as_slice()),
            names(self.toggle_pause.as_slice()),
            names(self.hold_pause.as_slice())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> HashSet<Key> {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.signals(&held(&[])), TickInput::default());
        assert!(bindings.signals(&held(&[Key::W])).up);
        assert!(bindings.signals(&held(&[Key::ArrowUp])).up);
        assert!(bindings.signals(&held(&[Key::S])).down);
        assert!(bindings.signals(&held(&[Key::ArrowDown])).down);
        assert!(bindings.signals(&held(&[Key::Space])).hold_pause);
        assert!(bindings.signals(&held(&[Key::P])).toggle_pause);
    }

    #[test]
    fn test_opposing_keys_both_reported() {
        let input = KeyBindings::default().signals(&held(&[Key::W, Key::ArrowDown]));
        assert!(input.up && input.down);
    }

    #[test]
    fn test_hint_lists_bindings() {
        assert_eq!(
            KeyBindings::default().hint(),
            "W/ArrowUp up | S/ArrowDown down | P toggle pause | Space hold to pause"
        );
    }

    #[test]
    fn test_bindings_from_json() {
        let json = r#"{"up":["W"],"down":["S"],"hold_pause":[],"toggle_pause":["P","Space"]}"#;
        let bindings: KeyBindings = serde_json::from_str(json).unwrap();
        assert!(!bindings.signals(&held(&[Key::ArrowUp])).up);
        let input = bindings.signals(&held(&[Key::Space]));
        assert!(input.toggle_pause && !input.hold_pause);
    }
}
