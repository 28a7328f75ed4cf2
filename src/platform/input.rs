//! Input sampling
//!
//! Frames and ticks do not line up one-to-one, so the latch keeps one-shot
//! events (button down, window close) until a tick consumes them, while the
//! level state and pointer always reflect the latest sample.

use glam::IVec2;

use crate::sim::TickInput;

/// Discrete events drained from the platform once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PrimaryDown,
    Close,
}

/// A source of pointer and button state
pub trait InputSource {
    fn primary_button_pressed(&self) -> bool;
    /// Pointer position in playfield pixels
    fn pointer_position(&self) -> IVec2;
    /// Events since the previous call
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pressed: bool,
    pointer: IVec2,
    pending_down: bool,
    close_requested: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of `source`
    pub fn sample<S: InputSource>(&mut self, source: &mut S) {
        self.pressed = source.primary_button_pressed();
        self.pointer = source.pointer_position();
        for event in source.poll_events() {
            match event {
                InputEvent::PrimaryDown => self.pending_down = true,
                InputEvent::Close => self.close_requested = true,
            }
        }
    }

    /// Build the input for one tick and clear one-shot events
    pub fn take_tick_input(&mut self, now_ms: u64) -> TickInput {
        let input = TickInput {
            // A click shorter than a frame still counts as held for its tick
            primary_pressed: self.pressed || self.pending_down,
            primary_down: self.pending_down,
            pointer: self.pointer,
            now_ms,
        };
        self.pending_down = false;
        input
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}
