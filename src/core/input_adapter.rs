use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::InputSource;

/// Adapter that bridges Winit events to the InputSource trait
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Currently held keys
    held_keys: HashSet<KeyCode>,
    /// Raw pointer motion accumulated since last reset
    pointer_delta: (f32, f32),
}

impl WinitInput {
    /// Create a new WinitInput with no held keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update held keys
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.set_key(keycode, event.state);
                }
            }
            // Keys released while unfocused never report a release
            WindowEvent::Focused(false) => self.held_keys.clear(),
            _ => {}
        }
    }

    /// Process a Winit DeviceEvent; raw motion is unaffected by cursor locking
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.pointer_delta.0 += delta.0 as f32;
            self.pointer_delta.1 += delta.1 as f32;
        }
    }

    /// Record a key transition
    pub fn set_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.held_keys.insert(key);
            }
            ElementState::Released => {
                self.held_keys.remove(&key);
            }
        }
    }

    /// Add pointer movement
    pub fn add_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.pointer_delta.0 += dx;
        self.pointer_delta.1 += dy;
    }

    /// Reset per-frame state (pointer delta)
    /// Call this after the frame's rig updates have consumed it
    pub fn reset_deltas(&mut self) {
        self.pointer_delta = (0.0, 0.0);
    }
}

impl InputSource for WinitInput {
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }

    fn pointer_delta(&self) -> (f32, f32) {
        self.pointer_delta
    }
}
