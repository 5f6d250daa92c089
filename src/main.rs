use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use rovercam::cli::Cli;
use rovercam::controls::parse_key_name;
use rovercam::{
    CameraRig, CameraSet, CameraState, FrameStepper, PointerCapture, Projection, RenderOutput,
    RigConfig, ScriptedInput, Viewport, WinitInput,
};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const STATUS_INTERVAL_FRAMES: u64 = 120;

// === Setup ===

fn load_config(cli: &Cli) -> Result<RigConfig> {
    match &cli.config {
        Some(path) => RigConfig::load(path),
        None => Ok(RigConfig::default()),
    }
}

/// Primary rig with every CLI override applied
fn build_rig(cli: &Cli, config: RigConfig) -> Result<CameraRig> {
    let mut rig = CameraRig::with_config(config);
    if let Some(path) = &cli.keymap {
        rig.keymap_mut().load_overrides(path)?;
    }
    if let Some(path) = &cli.state {
        rig.apply_state(&CameraState::load(path)?);
    }
    Ok(rig)
}

/// Primary rig plus an inactive overhead rig to switch to with Tab
fn build_cameras(cli: &Cli) -> Result<CameraSet> {
    let config = load_config(cli)?;
    let mut cameras = CameraSet::new();
    cameras.push(build_rig(cli, config)?);

    let mut overhead = CameraRig::with_config(config);
    overhead.apply_state(&CameraState {
        position: Some([0.0, 8.0, -12.0]),
        rotation: Some([FRAC_PI_2, -0.5, 0.0]),
        active: Some(false),
        ..Default::default()
    });
    cameras.push(overhead);
    Ok(cameras)
}

// === Headless ===

#[derive(Serialize)]
struct HeadlessReport {
    frames: u32,
    state: CameraState,
    output: RenderOutput,
    projection: Option<Projection>,
}

fn run_headless(cli: &Cli) -> Result<()> {
    let mut rig = build_rig(cli, load_config(cli)?)?;
    let mut input = cli
        .hold
        .iter()
        .map(|name| parse_key_name(name))
        .collect::<Result<ScriptedInput>>()?;

    let mut capture = PointerCapture::new();
    if let Some(delta) = &cli.pointer {
        let &[dx, dy] = delta.as_slice() else {
            bail!("--pointer takes exactly two values, got {}", delta.len());
        };
        input = input.with_pointer_delta(dx, dy);
        capture.toggle();
    }

    let viewport = Viewport::new(cli.width, cli.height);
    let mut output = rig.render_output();
    for _ in 0..cli.frames {
        if let Some(frame) = rig.update(&input, &capture, viewport) {
            output = frame;
        }
    }

    let report = HeadlessReport {
        frames: cli.frames,
        state: rig.state(),
        output,
        projection: rig.projection(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

// === Viewer ===

struct App {
    window: Option<Arc<Window>>,
    cameras: CameraSet,
    input: WinitInput,
    capture: PointerCapture,
    stepper: FrameStepper,
    frame_count: u64,
    show_ui: bool,
}

impl App {
    fn new(cameras: CameraSet, show_ui: bool) -> Self {
        Self {
            window: None,
            cameras,
            input: WinitInput::new(),
            capture: PointerCapture::new(),
            stepper: FrameStepper::default(),
            frame_count: 0,
            show_ui,
        }
    }

    /// Lock and hide the cursor to match the capture flag; drops capture if the
    /// platform refuses both grab modes
    fn sync_cursor(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        if self.capture.is_captured() {
            window.set_cursor_visible(false);
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                log::warn!("Cursor grab unavailable: {}", e);
                window.set_cursor_visible(true);
                self.capture.release();
            }
        } else {
            window.set_cursor_visible(true);
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("Failed to release cursor: {}", e);
            }
        }
    }

    fn on_key_pressed(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        match key {
            KeyCode::Escape if self.capture.is_captured() => {
                self.capture.release();
                self.sync_cursor();
            }
            KeyCode::Escape => event_loop.exit(),
            KeyCode::Tab => {
                self.cameras.cycle();
            }
            KeyCode::Backspace => {
                if let Some(rig) = self
                    .cameras
                    .active_index()
                    .and_then(|index| self.cameras.get_mut(index))
                {
                    rig.reset();
                    log::info!("Camera reset");
                }
            }
            _ => {}
        }
    }

    fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let viewport = Viewport::from(window.inner_size());

        let mut shown = None;
        for _ in 0..self.stepper.tick() {
            shown = self.cameras.update(&self.input, &self.capture, viewport).or(shown);
            // Pointer motion belongs to the first frame that sees it
            self.input.reset_deltas();
            self.frame_count += 1;

            if self.show_ui && self.frame_count % STATUS_INTERVAL_FRAMES == 0 {
                if let Some(output) = &shown {
                    log::info!(
                        "frame {} eye ({:.2}, {:.2}, {:.2}) target ({:.2}, {:.2}, {:.2})",
                        self.frame_count,
                        output.eye.x,
                        output.eye.y,
                        output.eye.z,
                        output.target.x,
                        output.target.y,
                        output.target.z
                    );
                }
            }
        }

        if let (true, Some(output)) = (self.show_ui, shown) {
            window.set_title(&format!(
                "rovercam - camera {} - ({:.1}, {:.1}, {:.1})",
                self.cameras.active_index().unwrap_or(0),
                output.eye.x,
                output.eye.y,
                output.eye.z
            ));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("rovercam")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.stepper.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => self.on_key_pressed(event_loop, key),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.capture.toggle();
                self.sync_cursor();
            }
            WindowEvent::Focused(false) => {
                self.capture.release();
                self.sync_cursor();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.capture.is_captured() {
            self.input.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.headless {
        return run_headless(&cli);
    }

    let cameras = build_cameras(&cli)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cameras, !cli.no_ui);

    log::info!(
        "rovercam - click to capture pointer, WASD/arrows move or turn, E/Q up/down, R/F pitch, +/- zoom, Tab switch camera, Escape release/quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
