use crate::camera::CameraRig;
use crate::projection::Viewport;
use crate::traits::InputSource;
use crate::types::RenderOutput;

use super::pointer_capture::PointerCapture;

/// Host-owned collection of rigs, updated in insertion order
///
/// The set only forwards calls; which output reaches the renderer is the
/// host's choice. `switch_to` is the usual way to keep exactly one rig active.
#[derive(Debug, Default)]
pub struct CameraSet {
    rigs: Vec<CameraRig>,
}

impl CameraSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rig and return its index
    pub fn push(&mut self, rig: CameraRig) -> usize {
        self.rigs.push(rig);
        self.rigs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.rigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rigs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CameraRig> {
        self.rigs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CameraRig> {
        self.rigs.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CameraRig> {
        self.rigs.iter()
    }

    /// Index of the first active rig
    pub fn active_index(&self) -> Option<usize> {
        self.rigs.iter().position(CameraRig::is_active)
    }

    /// Activate `index` and deactivate every other rig. Returns false if out of range.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.rigs.len() {
            return false;
        }
        for (i, rig) in self.rigs.iter_mut().enumerate() {
            rig.set_active(i == index);
        }
        log::info!("Switched to camera {}", index);
        true
    }

    /// Switch to the rig after the current one, wrapping around
    pub fn cycle(&mut self) -> Option<usize> {
        if self.rigs.is_empty() {
            return None;
        }
        let next = self
            .active_index()
            .map_or(0, |current| (current + 1) % self.rigs.len());
        self.switch_to(next);
        Some(next)
    }

    /// Update every rig; returns the output of the first active one
    pub fn update(
        &mut self,
        input: &dyn InputSource,
        capture: &PointerCapture,
        viewport: Viewport,
    ) -> Option<RenderOutput> {
        let mut shown = None;
        for rig in &mut self.rigs {
            let output = rig.update(input, capture, viewport);
            if shown.is_none() {
                shown = output;
            }
        }
        shown
    }
}
