use crate::controls::KeyMap;

use super::input::InputSource;

/// A single motion primitive call produced by an input mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Add `speed * forward` to velocity
    Forward(f32),
    /// Add `speed * right` to velocity
    Lateral(f32),
    /// Add `speed * up` to velocity
    Vertical(f32),
    Yaw(f32),
    Pitch(f32),
    Roll(f32),
    FieldOfView(f32),
    /// Adjust the eye-height offset
    Elevate(f32),
}

/// Everything a mapping may consult besides the raw input
#[derive(Debug, Clone, Copy)]
pub struct ControlContext<'a> {
    pub keymap: &'a KeyMap,
    pub speed: f32,
    pub sensitivity: f32,
    pub pointer_captured: bool,
}

/// Input mapping strategy - turns one frame of input into motion commands
///
/// Implementations must be pure: the rig applies the returned commands in order,
/// so the same input and context always produce the same motion.
pub trait InputMapping {
    fn map(&self, input: &dyn InputSource, ctx: &ControlContext<'_>) -> Vec<Motion>;
}

impl<F> InputMapping for F
where
    F: Fn(&dyn InputSource, &ControlContext<'_>) -> Vec<Motion>,
{
    fn map(&self, input: &dyn InputSource, ctx: &ControlContext<'_>) -> Vec<Motion> {
        self(input, ctx)
    }
}
