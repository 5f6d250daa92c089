use winit::keyboard::KeyCode;

/// Input source - answers the two queries a camera rig needs each frame
pub trait InputSource {
    /// Check if key is currently held
    fn is_key_held(&self, key: KeyCode) -> bool;

    /// Pointer movement accumulated since the host last cleared it
    fn pointer_delta(&self) -> (f32, f32);
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn is_key_held(&self, key: KeyCode) -> bool {
        (**self).is_key_held(key)
    }

    fn pointer_delta(&self) -> (f32, f32) {
        (**self).pointer_delta()
    }
}

/// Input source with nothing held and no pointer movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoInput;

impl InputSource for NoInput {
    fn is_key_held(&self, _key: KeyCode) -> bool {
        false
    }

    fn pointer_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }
}
