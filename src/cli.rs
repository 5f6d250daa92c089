// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "rovercam")]
#[command(about = "First-person camera rig viewer", long_about = None)]
pub struct Cli {
    /// Rig tuning file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Camera state snapshot to apply at startup (JSON)
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Key binding overrides (JSON)
    #[arg(long)]
    pub keymap: Option<PathBuf>,

    /// Run without a window and print the resulting state
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Keys held for the whole headless run, by winit name (e.g. KeyW,ArrowLeft)
    #[arg(long, value_delimiter = ',')]
    pub hold: Vec<String>,

    /// Pointer delta per headless frame as "dx,dy"; implies pointer capture
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub pointer: Option<Vec<f32>>,

    /// Viewport size for headless mode
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Disable the window title readout and periodic log output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
