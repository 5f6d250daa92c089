//! Host-side glue: input adapters, pointer capture, rig collections and frame timing.

pub mod camera_set;
pub mod clock;
pub mod input_adapter;
pub mod pointer_capture;
pub mod scripted_input;

pub use camera_set::CameraSet;
pub use clock::FrameStepper;
pub use input_adapter::WinitInput;
pub use pointer_capture::PointerCapture;
pub use scripted_input::ScriptedInput;
