//! Key bindings and the default input mapping strategies.

pub mod keymap;
pub mod rover;

pub use keymap::{parse_key_name, Command, KeyMap, KeyPair};
pub use rover::{KeyLook, PointerLook, RoverControls};
