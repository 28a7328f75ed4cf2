//! Game clock and fixed-step scheduling

use crate::consts::{MAX_SUBSTEPS, SIM_DT, SIM_STEP_MS};

/// Monotonic millisecond clock used for spawn timing
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Clock that advances exactly one step per simulation tick, so spawn timing
/// depends only on the number of ticks run.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    ticks: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once after every tick
    pub fn advance(&mut self) {
        self.ticks += 1;
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.ticks * SIM_STEP_MS
    }
}

/// Turns variable frame times into a whole number of fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add a frame's elapsed seconds and return how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // Long stalls (window drag, breakpoint) should not fast-forward
        let dt = frame_dt.clamp(0.0, 0.25);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        // Drop what could not be run this frame
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }

        substeps
    }
}
