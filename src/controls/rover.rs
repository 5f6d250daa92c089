use crate::traits::{ControlContext, InputMapping, InputSource, Motion};

use super::keymap::Command;

/// Pointer deltas are scaled down by this factor relative to key look
const POINTER_SCALE: f32 = 0.1;

/// Field-of-view steps are this fraction of the sensitivity
const ZOOM_SCALE: f32 = 0.1;

/// Default mapping - pointer look while captured, key look otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoverControls;

/// Pointer drives yaw/pitch, strafe and elevate keys move the rig
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerLook;

/// Keys alone drive yaw/pitch, no capture required
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyLook;

impl InputMapping for RoverControls {
    fn map(&self, input: &dyn InputSource, ctx: &ControlContext<'_>) -> Vec<Motion> {
        if ctx.pointer_captured {
            PointerLook.map(input, ctx)
        } else {
            KeyLook.map(input, ctx)
        }
    }
}

impl InputMapping for PointerLook {
    fn map(&self, input: &dyn InputSource, ctx: &ControlContext<'_>) -> Vec<Motion> {
        let mut motions = Vec::new();
        let (dx, dy) = input.pointer_delta();
        let scale = ctx.sensitivity * POINTER_SCALE;

        // Screen y grows downward, pitch grows upward
        motions.push(Motion::Yaw(dx * scale));
        motions.push(Motion::Pitch(-dy * scale));

        push_axis(
            &mut motions,
            input,
            ctx,
            (Command::StrafeLeft, Command::StrafeRight),
            Motion::Lateral,
            ctx.speed,
        );
        push_axis(
            &mut motions,
            input,
            ctx,
            (Command::ElevateUp, Command::ElevateDown),
            Motion::Elevate,
            ctx.speed,
        );

        push_movement(&mut motions, input, ctx);
        motions
    }
}

impl InputMapping for KeyLook {
    fn map(&self, input: &dyn InputSource, ctx: &ControlContext<'_>) -> Vec<Motion> {
        let mut motions = Vec::new();

        push_axis(
            &mut motions,
            input,
            ctx,
            (Command::YawRight, Command::YawLeft),
            Motion::Yaw,
            ctx.sensitivity,
        );
        push_axis(
            &mut motions,
            input,
            ctx,
            (Command::PitchUp, Command::PitchDown),
            Motion::Pitch,
            ctx.sensitivity,
        );

        push_movement(&mut motions, input, ctx);
        motions
    }
}

/// Commands shared by both look modes
fn push_movement(motions: &mut Vec<Motion>, input: &dyn InputSource, ctx: &ControlContext<'_>) {
    push_axis(
        motions,
        input,
        ctx,
        (Command::MoveForward, Command::MoveBackward),
        Motion::Forward,
        ctx.speed,
    );
    push_axis(
        motions,
        input,
        ctx,
        (Command::Ascend, Command::Descend),
        Motion::Vertical,
        ctx.speed,
    );
    push_axis(
        motions,
        input,
        ctx,
        (Command::ZoomOut, Command::ZoomIn),
        Motion::FieldOfView,
        ctx.sensitivity * ZOOM_SCALE,
    );
}

/// Emit `motion(+amount)` for the positive command and `motion(-amount)` for the
/// negative one. Both fire when both are held, matching independent key checks.
fn push_axis(
    motions: &mut Vec<Motion>,
    input: &dyn InputSource,
    ctx: &ControlContext<'_>,
    (positive, negative): (Command, Command),
    motion: fn(f32) -> Motion,
    amount: f32,
) {
    if ctx.keymap.is_held(positive, input) {
        motions.push(motion(amount));
    }
    if ctx.keymap.is_held(negative, input) {
        motions.push(motion(-amount));
    }
}
