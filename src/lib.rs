pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod core;
pub mod projection;
pub mod state;
pub mod traits;
pub mod types;

pub use camera::CameraRig;
pub use config::RigConfig;
pub use controls::{Command, KeyLook, KeyMap, KeyPair, PointerLook, RoverControls};
pub use crate::core::{CameraSet, FrameStepper, PointerCapture, ScriptedInput, WinitInput};
pub use projection::{Projection, Viewport};
pub use state::CameraState;
pub use traits::{ControlContext, InputMapping, InputSource, Motion, NoInput};
pub use types::{CameraUniform, RenderOutput, VerticalOffset};
