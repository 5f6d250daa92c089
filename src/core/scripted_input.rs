use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::traits::InputSource;

/// Fixed input for headless runs and tests - the same keys and pointer delta every frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedInput {
    held: HashSet<KeyCode>,
    pointer_delta: (f32, f32),
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(mut self, key: KeyCode) -> Self {
        self.held.insert(key);
        self
    }

    pub fn with_pointer_delta(mut self, dx: f32, dy: f32) -> Self {
        self.pointer_delta = (dx, dy);
        self
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}

impl FromIterator<KeyCode> for ScriptedInput {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(keys: I) -> Self {
        Self {
            held: keys.into_iter().collect(),
            pointer_delta: (0.0, 0.0),
        }
    }
}

impl InputSource for ScriptedInput {
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn pointer_delta(&self) -> (f32, f32) {
        self.pointer_delta
    }
}
