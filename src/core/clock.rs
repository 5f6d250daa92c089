use std::time::Instant;

/// Rig physics is per-frame, so hosts should step it at a fixed rate
pub const DEFAULT_FRAME_HZ: f32 = 60.0;

/// Most rig frames run for a single host frame, so a stall does not fast-forward
pub const DEFAULT_MAX_STEPS: u32 = 4;

/// Turns wall-clock time into a whole number of fixed-rate rig frames
#[derive(Debug)]
pub struct FrameStepper {
    last_tick: Instant,
    interval: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FrameStepper {
    /// Create stepper running at `hz` frames per second, starting now
    pub fn new(hz: f32, max_steps: u32) -> Self {
        Self {
            last_tick: Instant::now(),
            interval: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Measure time since the last tick and return how many frames to run
    pub fn tick(&mut self) -> u32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.advance(delta)
    }

    /// Feed `delta` seconds and return how many frames are due, capped.
    /// Time beyond the cap is dropped.
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta;

        let due = (self.accumulator / self.interval) as u32;
        let steps = due.min(self.max_steps);

        if due > self.max_steps {
            log::debug!("Frame stepper dropped {} frame(s)", due - self.max_steps);
            self.accumulator = 0.0;
        } else {
            self.accumulator -= steps as f32 * self.interval;
        }
        steps
    }

    /// Restart timing from now, discarding accumulated time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
        self.accumulator = 0.0;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }
}

impl Default for FrameStepper {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_HZ, DEFAULT_MAX_STEPS)
    }
}
