/// Pointer capture state shared by every rig drawing to one surface
///
/// Owned by the host and passed by reference to each rig's update. The host
/// toggles it when the user clicks into the surface and releases it when the
/// platform reports that capture was lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerCapture {
    captured: bool,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Flip capture on click; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.captured = !self.captured;
        log::info!(
            "Pointer {}",
            if self.captured { "captured" } else { "released" }
        );
        self.captured
    }

    /// Platform reported that capture ended (focus loss, escape)
    pub fn release(&mut self) {
        if self.captured {
            log::info!("Pointer capture lost");
        }
        self.captured = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_released() {
        assert!(!PointerCapture::new().is_captured());
    }

    #[test]
    fn toggle_flips() {
        let mut capture = PointerCapture::new();
        assert!(capture.toggle());
        assert!(capture.is_captured());
        assert!(!capture.toggle());
    }

    #[test]
    fn release_is_idempotent() {
        let mut capture = PointerCapture::new();
        capture.toggle();
        capture.release();
        capture.release();
        assert!(!capture.is_captured());
    }
}
