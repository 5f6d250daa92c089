use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::traits::InputSource;

/// Look up a key by its winit name, e.g. `KeyW` or `ArrowLeft`
pub fn parse_key_name(name: &str) -> Result<KeyCode> {
    serde_json::from_value(serde_json::Value::String(name.trim().to_string()))
        .with_context(|| format!("Unknown key name {:?}", name))
}

/// Logical control command, each bound to a pair of keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    MoveForward,
    MoveBackward,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
    RollLeft,
    RollRight,
    ZoomIn,
    ZoomOut,
    ElevateUp,
    ElevateDown,
}

impl Command {
    pub const ALL: [Command; 16] = [
        Command::MoveForward,
        Command::MoveBackward,
        Command::StrafeLeft,
        Command::StrafeRight,
        Command::Ascend,
        Command::Descend,
        Command::YawLeft,
        Command::YawRight,
        Command::PitchUp,
        Command::PitchDown,
        Command::RollLeft,
        Command::RollRight,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::ElevateUp,
        Command::ElevateDown,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Default binding
    pub const fn default_keys(self) -> KeyPair {
        match self {
            Command::MoveForward => KeyPair::new(KeyCode::KeyW, KeyCode::ArrowUp),
            Command::MoveBackward => KeyPair::new(KeyCode::KeyS, KeyCode::ArrowDown),
            Command::StrafeLeft | Command::YawLeft => KeyPair::new(KeyCode::KeyA, KeyCode::ArrowLeft),
            Command::StrafeRight | Command::YawRight => KeyPair::new(KeyCode::KeyD, KeyCode::ArrowRight),
            Command::Ascend => KeyPair::single(KeyCode::KeyE),
            Command::Descend => KeyPair::single(KeyCode::KeyQ),
            Command::PitchUp | Command::ElevateUp => KeyPair::single(KeyCode::KeyR),
            Command::PitchDown | Command::ElevateDown => KeyPair::single(KeyCode::KeyF),
            Command::RollLeft => KeyPair::single(KeyCode::KeyZ),
            Command::RollRight => KeyPair::single(KeyCode::KeyC),
            Command::ZoomIn => KeyPair::new(KeyCode::NumpadAdd, KeyCode::Equal),
            Command::ZoomOut => KeyPair::new(KeyCode::NumpadSubtract, KeyCode::Minus),
        }
    }
}

/// Primary and alternate key for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub primary: KeyCode,
    pub alternate: KeyCode,
}

impl KeyPair {
    pub const fn new(primary: KeyCode, alternate: KeyCode) -> Self {
        Self { primary, alternate }
    }

    /// Pair with no distinct alternate
    pub const fn single(key: KeyCode) -> Self {
        Self::new(key, key)
    }

    pub fn is_held(&self, input: &dyn InputSource) -> bool {
        input.is_key_held(self.primary) || input.is_key_held(self.alternate)
    }
}

/// Command to key pair table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: [KeyPair; Command::ALL.len()],
}

impl KeyMap {
    pub fn keys(&self, command: Command) -> KeyPair {
        self.bindings[command.index()]
    }

    /// Rebind a single command
    pub fn bind(&mut self, command: Command, keys: KeyPair) {
        self.bindings[command.index()] = keys;
    }

    /// Rebind every command present in `overrides`, leaving the rest untouched
    pub fn apply_overrides<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (Command, KeyPair)>,
    {
        for (command, keys) in overrides {
            log::debug!("Rebinding {:?} to {:?}", command, keys);
            self.bind(command, keys);
        }
    }

    /// Check whether either key bound to `command` is held
    pub fn is_held(&self, command: Command, input: &dyn InputSource) -> bool {
        self.keys(command).is_held(input)
    }

    /// Parse a sparse override table such as `{"zoomIn": {"primary": "KeyI", "alternate": "KeyI"}}`
    pub fn overrides_from_json(json: &str) -> Result<BTreeMap<Command, KeyPair>> {
        serde_json::from_str(json).context("Invalid key map override table")
    }

    /// Read an override file and apply it
    pub fn load_overrides(&mut self, path: &Path) -> Result<()> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read key map {}", path.display()))?;
        let overrides = Self::overrides_from_json(&json)
            .with_context(|| format!("Failed to parse key map {}", path.display()))?;
        log::info!("Loaded {} key binding(s) from {}", overrides.len(), path.display());
        self.apply_overrides(overrides);
        Ok(())
    }

    /// Full table, suitable for writing back out as an override file
    pub fn to_bindings(&self) -> BTreeMap<Command, KeyPair> {
        Command::ALL.iter().map(|&c| (c, self.keys(c))).collect()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: Command::ALL.map(Command::default_keys),
        }
    }
}
