//! Data-driven game balance
//!
//! Every number that shapes the feel of the game lives here so it can be
//! overridden from the settings file. Defaults reproduce the classic feel.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_LINE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: i32,
    pub screen_height: i32,
    /// y coordinate of the ground surface
    pub ground_line: i32,
    /// Ground tile offset wraps back to 0 once its magnitude exceeds this
    pub ground_wrap: i32,

    // === Bird ===
    pub bird_start_x: i32,
    /// Downward acceleration per tick while flying
    pub gravity: f32,
    /// Terminal fall speed (pixels per tick)
    pub max_fall_speed: f32,
    /// Velocity set by a flap (negative is up)
    pub jump_velocity: f32,
    /// Ticks between animation frames
    pub flap_cooldown: u32,
    pub bird_frames: usize,

    // === Pipes ===
    /// Leftward scroll of pipes and ground (pixels per tick)
    pub scroll_speed: i32,
    /// Vertical distance between the facing edges of a pair
    pub pipe_gap: i32,
    /// Minimum time between spawns
    pub pipe_interval_ms: u64,
    /// Gap center is drawn from screen center +/- this many pixels
    pub pipe_offset_range: i32,

    // === Sprite sizes (replaced by real image sizes when assets load) ===
    pub bird_size: IVec2,
    pub pipe_size: IVec2,
    pub button_size: IVec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_line: GROUND_LINE,
            ground_wrap: 35,

            bird_start_x: 100,
            gravity: 0.5,
            max_fall_speed: 8.0,
            jump_velocity: -8.0,
            flap_cooldown: 5,
            bird_frames: 3,

            scroll_speed: 4,
            pipe_gap: 150,
            pipe_interval_ms: 1500,
            pipe_offset_range: 100,

            bird_size: IVec2::new(51, 36),
            pipe_size: IVec2::new(78, 560),
            button_size: IVec2::new(120, 42),
        }
    }
}

impl Tuning {
    /// Vertical center of the playfield
    pub fn center_y(&self) -> i32 {
        self.screen_height / 2
    }

    /// Where the bird's center sits at start and after every reset
    pub fn bird_start(&self) -> IVec2 {
        IVec2::new(self.bird_start_x, self.center_y())
    }

    /// Pipes enter at the right edge of the screen
    pub fn pipe_spawn_x(&self) -> i32 {
        self.screen_width
    }

    /// Top-left corner of the restart button
    pub fn button_top_left(&self) -> IVec2 {
        IVec2::new(self.screen_width / 2 - 50, self.screen_height / 2 - 100)
    }

    /// Check for combinations that break gameplay.
    ///
    /// Scoring only notices a pipe if the bird is seen fully inside the
    /// pipe's horizontal span on some tick, so the bird must be narrower than
    /// a pipe and a pipe must not scroll past the bird in a single tick.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.scroll_speed >= self.pipe_size.x {
            warnings.push(format!(
                "scroll_speed {} >= pipe width {}: pipes can be passed without scoring",
                self.scroll_speed, self.pipe_size.x
            ));
        }
        if self.bird_size.x >= self.pipe_size.x {
            warnings.push(format!(
                "bird width {} >= pipe width {}: pipes can never be scored",
                self.bird_size.x, self.pipe_size.x
            ));
        }
        if self.bird_frames == 0 {
            warnings.push("bird_frames must be at least 1".to_string());
        }
        if self.pipe_offset_range < 0 {
            warnings.push(format!(
                "pipe_offset_range {} is negative",
                self.pipe_offset_range
            ));
        }
        if self.ground_line > self.screen_height {
            warnings.push(format!(
                "ground_line {} is below the screen ({})",
                self.ground_line, self.screen_height
            ));
        }

        warnings
    }
}
