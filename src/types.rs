use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::projection::Projection;

/// Per-frame camera output for the host's view matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl RenderOutput {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Eye placement decoupled from the physical position, applied only to render output
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalOffset {
    /// Added to the Y of both eye and target
    pub eye_height: f32,
    /// Shifts eye and target against the right vector
    pub look_offset: f32,
}

impl From<[f32; 2]> for VerticalOffset {
    fn from([eye_height, look_offset]: [f32; 2]) -> Self {
        Self {
            eye_height,
            look_offset,
        }
    }
}

impl From<VerticalOffset> for [f32; 2] {
    fn from(offset: VerticalOffset) -> Self {
        [offset.eye_height, offset.look_offset]
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad1: f32,
}

impl CameraUniform {
    pub fn new(output: &RenderOutput, projection: &Projection) -> Self {
        let view_proj = projection.matrix() * output.view_matrix();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye: output.eye.to_array(),
            _pad1: 0.0,
        }
    }
}
