//! Sparse camera state snapshots for save/restore and scripted moves.
//!
//! Every field is optional. Applying a snapshot overwrites only the fields that
//! are present, so an explicit `0.0` or `false` is a real value rather than
//! "unset".

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fov: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// `[pan, tilt, roll]` in radians
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    /// `[eye_height, look_offset]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<[f32; 2]>,
    #[serde(default, alias = "enableControl", skip_serializing_if = "Option::is_none")]
    pub control_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f32>,
}

impl CameraState {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid camera state")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize camera state")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera state {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write camera state {}", path.display()))
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fields of `other` take precedence over fields of `self`
    pub fn merged(&self, other: &CameraState) -> CameraState {
        CameraState {
            fov: other.fov.or(self.fov),
            active: other.active.or(self.active),
            rotation: other.rotation.or(self.rotation),
            position: other.position.or(self.position),
            offset: other.offset.or(self.offset),
            control_enabled: other.control_enabled.or(self.control_enabled),
            speed: other.speed.or(self.speed),
            sensitivity: other.sensitivity.or(self.sensitivity),
        }
    }
}
