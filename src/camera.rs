use std::f32::consts::FRAC_PI_2;
use std::fmt;

use glam::Vec3;

use crate::config::RigConfig;
use crate::controls::{KeyMap, RoverControls};
use crate::core::PointerCapture;
use crate::projection::{Projection, ProjectionCache, Viewport};
use crate::state::CameraState;
use crate::traits::{ControlContext, InputMapping, InputSource, Motion};
use crate::types::{RenderOutput, VerticalOffset};

/// Tilt is clamped to +/- PI / 2.01, just short of the poles
pub const TILT_LIMIT: f32 = std::f32::consts::PI / 2.01;

/// Nudge applied if tilt ever lands exactly on PI / 2
pub const POLE_NUDGE: f32 = 0.001;

/// Largest friction the rig accepts; velocity must always decay
pub const MAX_FRICTION: f32 = 1.0 - f32::EPSILON;

/// Clamp tilt into range and step off the pole. Every tilt write goes through here.
pub fn guard_tilt(tilt: f32) -> f32 {
    let clamped = tilt.clamp(-TILT_LIMIT, TILT_LIMIT);
    if clamped == FRAC_PI_2 {
        clamped + POLE_NUDGE
    } else {
        clamped
    }
}

/// Forward vector for the given angles: normalize(cos pan, tan tilt, sin pan)
pub fn forward_from(pan: f32, tilt: f32) -> Vec3 {
    Vec3::new(pan.cos(), tilt.tan(), pan.sin()).normalize()
}

/// Right vector for the given pan; always horizontal
pub fn right_from(pan: f32) -> Vec3 {
    let angle = pan - FRAC_PI_2;
    Vec3::new(angle.cos(), 0.0, angle.sin())
}

/// First-person camera rig
///
/// Orientation is kept as pan/tilt angles; the forward/right/up basis is derived
/// from them every frame and never edited directly. Velocity is measured in world
/// units per frame and decays by `friction` each update.
///
/// NaN or infinite deltas are not rejected and will propagate into the position.
pub struct CameraRig {
    position: Vec3,
    velocity: Vec3,
    pan: f32,
    tilt: f32,
    roll: f32,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    friction: f32,
    speed: f32,
    sensitivity: f32,
    offset: VerticalOffset,
    projection: ProjectionCache,
    active: bool,
    control_enabled: bool,
    keymap: KeyMap,
    mapping: Box<dyn InputMapping>,
}

impl CameraRig {
    pub fn new() -> Self {
        Self::with_config(RigConfig::default())
    }

    pub fn with_config(config: RigConfig) -> Self {
        let mut rig = Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            pan: 0.0,
            tilt: 0.0,
            roll: 0.0,
            forward: Vec3::X,
            right: Vec3::NEG_Z,
            up: Vec3::Y,
            friction: 0.0,
            speed: config.speed,
            sensitivity: config.sensitivity,
            offset: VerticalOffset::default(),
            projection: ProjectionCache::new(config.fov_y, config.near, config.far),
            active: true,
            control_enabled: true,
            keymap: KeyMap::default(),
            mapping: Box::new(RoverControls),
        };
        rig.set_friction(config.friction);
        rig.update_basis();
        rig
    }

    // === Motion primitives ===

    pub fn move_forward(&mut self, speed: f32) {
        self.velocity += self.forward * speed;
    }

    pub fn move_lateral(&mut self, speed: f32) {
        self.velocity += self.right * speed;
    }

    pub fn move_vertical(&mut self, speed: f32) {
        self.velocity += self.up * speed;
    }

    pub fn yaw(&mut self, angle: f32) {
        self.pan += angle;
    }

    pub fn pitch(&mut self, angle: f32) {
        self.tilt = guard_tilt(self.tilt + angle);
    }

    /// Accumulated only; the basis ignores roll for now
    pub fn roll(&mut self, angle: f32) {
        self.roll += angle;
    }

    pub fn adjust_field_of_view(&mut self, angle: f32) {
        self.projection.adjust_fov_y(angle);
    }

    /// Raise or lower the eye without moving the rig
    pub fn elevate(&mut self, delta: f32) {
        self.offset.eye_height += delta;
    }

    pub fn set_vertical_offset(&mut self, offset: VerticalOffset) {
        self.offset = offset;
    }

    /// Apply one command produced by an input mapping
    pub fn apply_motion(&mut self, motion: Motion) {
        match motion {
            Motion::Forward(speed) => self.move_forward(speed),
            Motion::Lateral(speed) => self.move_lateral(speed),
            Motion::Vertical(speed) => self.move_vertical(speed),
            Motion::Yaw(angle) => self.yaw(angle),
            Motion::Pitch(angle) => self.pitch(angle),
            Motion::Roll(angle) => self.roll(angle),
            Motion::FieldOfView(angle) => self.adjust_field_of_view(angle),
            Motion::Elevate(delta) => self.elevate(delta),
        }
    }

    // === Lifecycle ===

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if active {
            // The viewport may have changed while we were not looking
            self.projection.invalidate();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_control_enabled(&mut self, enabled: bool) {
        self.control_enabled = enabled;
    }

    pub fn is_control_enabled(&self) -> bool {
        self.control_enabled
    }

    /// Return orientation, position, motion and projection to their initial values.
    /// Tuning, key map and mapping strategy are kept.
    pub fn reset(&mut self) {
        self.pan = 0.0;
        self.tilt = guard_tilt(0.0);
        self.roll = 0.0;
        self.position = Vec3::ZERO;
        self.velocity = Vec3::ZERO;
        self.offset = VerticalOffset::default();
        self.projection.set_fov_y(crate::projection::DEFAULT_FOV_Y);
        self.update_basis();
    }

    /// Sparse merge: only fields present in `state` are written
    pub fn apply_state(&mut self, state: &CameraState) {
        if let Some(fov) = state.fov {
            self.projection.set_fov_y(fov);
        }
        if let Some(active) = state.active {
            self.active = active;
        }
        if let Some([pan, tilt, roll]) = state.rotation {
            self.pan = pan;
            self.tilt = guard_tilt(tilt);
            self.roll = roll;
        }
        if let Some(position) = state.position {
            self.position = Vec3::from_array(position);
        }
        if let Some(offset) = state.offset {
            self.offset = VerticalOffset::from(offset);
        }
        if let Some(enabled) = state.control_enabled {
            self.control_enabled = enabled;
        }
        if let Some(speed) = state.speed {
            self.speed = speed;
        }
        if let Some(sensitivity) = state.sensitivity {
            self.sensitivity = sensitivity;
        }
        log::debug!("Applied camera state {:?}", state);
    }

    /// Snapshot of every live value
    pub fn state(&self) -> CameraState {
        CameraState {
            fov: Some(self.projection.fov_y()),
            active: Some(self.active),
            rotation: Some([self.pan, self.tilt, self.roll]),
            position: Some(self.position.to_array()),
            offset: Some(self.offset.into()),
            control_enabled: Some(self.control_enabled),
            speed: Some(self.speed),
            sensitivity: Some(self.sensitivity),
        }
    }

    // === Frame ===

    /// Advance one frame. Does nothing and returns `None` while inactive.
    ///
    /// Order is fixed: projection refresh, input mapping, basis, friction,
    /// integration, then render output.
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        capture: &PointerCapture,
        viewport: Viewport,
    ) -> Option<RenderOutput> {
        if !self.active {
            return None;
        }

        self.projection.refresh(viewport);

        if self.control_enabled {
            let motions = {
                let ctx = ControlContext {
                    keymap: &self.keymap,
                    speed: self.speed,
                    sensitivity: self.sensitivity,
                    pointer_captured: capture.is_captured(),
                };
                self.mapping.map(input, &ctx)
            };
            for motion in motions {
                self.apply_motion(motion);
            }
        }

        self.update_basis();

        self.velocity *= self.friction;
        self.position += self.velocity;

        Some(self.render_output())
    }

    fn update_basis(&mut self) {
        self.forward = forward_from(self.pan, self.tilt);
        self.right = right_from(self.pan);
        // TODO: rotate `up` about `forward` by `roll` once banking is supported
        self.up = Vec3::Y;
    }

    /// Eye, target and up for the current state, offsets applied
    pub fn render_output(&self) -> RenderOutput {
        let lift = Vec3::new(0.0, self.offset.eye_height, 0.0);
        let base = self.position - self.right * self.offset.look_offset;
        RenderOutput {
            eye: base + lift,
            target: base + self.forward + lift,
            up: self.up,
        }
    }

    // === Accessors ===

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Replace the position outright; velocity is left alone
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn pan(&self) -> f32 {
        self.pan
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn roll_angle(&self) -> f32 {
        self.roll
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn vertical_offset(&self) -> VerticalOffset {
        self.offset
    }

    pub fn fov_y(&self) -> f32 {
        self.projection.fov_y()
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Clamped into [0, 1) so velocity always decays
    pub fn set_friction(&mut self, friction: f32) {
        let clamped = friction.clamp(0.0, MAX_FRICTION);
        if clamped != friction {
            log::warn!("Friction {} out of range, using {}", friction, clamped);
        }
        self.friction = clamped;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Projection from the most recent active frame
    pub fn projection(&self) -> Option<Projection> {
        self.projection.current()
    }

    pub fn projection_cache(&self) -> &ProjectionCache {
        &self.projection
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.projection.set_clip_planes(near, far);
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    /// Replace the input mapping strategy
    pub fn set_mapping<M: InputMapping + 'static>(&mut self, mapping: M) {
        self.mapping = Box::new(mapping);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CameraRig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraRig")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("pan", &self.pan)
            .field("tilt", &self.tilt)
            .field("roll", &self.roll)
            .field("friction", &self.friction)
            .field("offset", &self.offset)
            .field("projection", &self.projection)
            .field("active", &self.active)
            .field("control_enabled", &self.control_enabled)
            .finish_non_exhaustive()
    }
}
