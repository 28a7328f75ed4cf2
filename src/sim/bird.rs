//! The player's bird

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::IRect;
use super::state::GamePhase;
use crate::tuning::Tuning;

/// Fixed pose of a crashed bird (degrees, counter-clockwise)
pub const DEAD_ANGLE: f32 = -90.0;

/// The player entity. x never changes; only y, velocity and animation do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub rect: IRect,
    /// Vertical velocity in pixels per tick (positive is down)
    pub vel: f32,
    /// Current animation frame
    pub frame: usize,
    /// Ticks since the last frame change
    counter: u32,
    /// Primary button state seen on the previous tick (for edge detection)
    clicked: bool,
}

impl Bird {
    pub fn new(center: IVec2, size: IVec2) -> Self {
        Self {
            rect: IRect::from_center(center, size),
            vel: 0.0,
            frame: 0,
            counter: 0,
            clicked: false,
        }
    }

    /// Treat the primary button as already held, so a press that is still
    /// down when the bird appears does not count as a flap.
    pub fn with_button_held(mut self, held: bool) -> Self {
        self.clicked = held;
        self
    }

    /// Advance one tick. Returns true if the bird flapped.
    pub fn update(&mut self, phase: GamePhase, pressed: bool, tuning: &Tuning) -> bool {
        if phase == GamePhase::Flying {
            self.apply_gravity(tuning);
        }

        if phase == GamePhase::GameOver {
            return false;
        }

        let flapped = self.handle_jump(pressed, tuning);
        self.animate(tuning);
        flapped
    }

    /// Accelerate downward and fall, unless already resting on the ground
    pub fn apply_gravity(&mut self, tuning: &Tuning) {
        self.vel = (self.vel + tuning.gravity).min(tuning.max_fall_speed);
        if self.rect.bottom() < tuning.ground_line {
            self.rect.y += self.vel as i32;
        }
    }

    /// Edge-triggered: only the released -> pressed transition flaps
    pub fn handle_jump(&mut self, pressed: bool, tuning: &Tuning) -> bool {
        let flapped = pressed && !self.clicked;
        if flapped {
            self.vel = tuning.jump_velocity;
        }
        self.clicked = pressed;
        flapped
    }

    pub fn animate(&mut self, tuning: &Tuning) {
        self.counter += 1;
        if self.counter >= tuning.flap_cooldown {
            self.counter = 0;
            self.frame = (self.frame + 1) % tuning.bird_frames.max(1);
        }
    }

    /// Counter-clockwise sprite rotation in degrees: nose follows velocity
    /// while alive, points at the ground once crashed.
    pub fn render_angle(&self, phase: GamePhase) -> f32 {
        match phase {
            GamePhase::GameOver => DEAD_ANGLE,
            _ => -self.vel,
        }
    }
}
