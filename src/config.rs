use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::projection::{DEFAULT_FAR, DEFAULT_FOV_Y, DEFAULT_NEAR};

pub const DEFAULT_FRICTION: f32 = 0.8;
pub const DEFAULT_SPEED: f32 = 0.1;
pub const DEFAULT_SENSITIVITY: f32 = 0.02;

/// Construction-time tuning for a camera rig, loadable from JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RigConfig {
    /// Per-frame velocity multiplier, in [0, 1)
    pub friction: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl RigConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid rig config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rig config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.friction) {
            bail!("friction must be in [0, 1), got {}", self.friction);
        }
        if !(self.fov_y > 0.0) {
            bail!("fov_y must be positive, got {}", self.fov_y);
        }
        if !(self.near > 0.0) {
            bail!("near must be positive, got {}", self.near);
        }
        if !(self.far > self.near) {
            bail!("far ({}) must be beyond near ({})", self.far, self.near);
        }
        Ok(())
    }
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            fov_y: DEFAULT_FOV_Y,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RigConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RigConfig::from_json(r#"{"friction": 0.5, "far": 1000.0}"#).unwrap();
        assert_eq!(config.friction, 0.5);
        assert_eq!(config.far, 1000.0);
        assert_eq!(config.speed, DEFAULT_SPEED);
    }

    #[test]
    fn friction_of_one_rejected() {
        assert!(RigConfig::from_json(r#"{"friction": 1.0}"#).is_err());
    }

    #[test]
    fn inverted_clip_planes_rejected() {
        assert!(RigConfig::from_json(r#"{"near": 10.0, "far": 1.0}"#).is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(RigConfig::from_json(r#"{"frction": 0.5}"#).is_err());
    }
}
