use glam::Mat4;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FOV_Y: f32 = 1.0;
pub const DEFAULT_NEAR: f32 = 0.01;
pub const DEFAULT_FAR: f32 = 10000.0;

/// Host surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, with both dimensions clamped to at least one pixel
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Perspective parameters handed to the host's projection matrix builder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// Right-handed perspective matrix with a [0, 1] depth range
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Projection parameters with lazy recomputation
///
/// The projection is rebuilt only when the viewport reported by the host differs
/// (exact equality) from the one it was last built for, or when something marked
/// it dirty: a field-of-view change or a rig becoming active.
#[derive(Debug, Clone)]
pub struct ProjectionCache {
    fov_y: f32,
    near: f32,
    far: f32,
    viewport: Option<Viewport>,
    dirty: bool,
    current: Option<Projection>,
    recomputations: u64,
}

impl ProjectionCache {
    pub fn new(fov_y: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            near,
            far,
            viewport: None,
            dirty: true,
            current: None,
            recomputations: 0,
        }
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
        self.invalidate();
    }

    pub fn adjust_fov_y(&mut self, delta: f32) {
        self.set_fov_y(self.fov_y + delta);
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
        self.invalidate();
    }

    /// Force a rebuild on the next refresh
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild the projection if needed. Returns true if it was rebuilt.
    pub fn refresh(&mut self, viewport: Viewport) -> bool {
        if !self.dirty && self.viewport == Some(viewport) {
            return false;
        }

        let projection = Projection {
            fov_y: self.fov_y,
            aspect: viewport.aspect(),
            near: self.near,
            far: self.far,
        };
        log::debug!(
            "Projection rebuilt for {}x{}: fov {:.3} aspect {:.3}",
            viewport.width,
            viewport.height,
            projection.fov_y,
            projection.aspect
        );

        self.current = Some(projection);
        self.viewport = Some(viewport);
        self.dirty = false;
        self.recomputations += 1;
        true
    }

    /// Last computed projection, if any refresh has happened yet
    pub fn current(&self) -> Option<Projection> {
        self.current
    }

    /// Viewport the current projection was built for
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Number of times the projection has been rebuilt
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_Y, DEFAULT_NEAR, DEFAULT_FAR)
    }
}
