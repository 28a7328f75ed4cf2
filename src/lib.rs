//! Flappy - a fixed-tick Flappy Bird clone
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird, pipes, scoring, game phases)
//! - `renderer`: Draw-call contract and scene composition
//! - `platform`: Clock and input collaborators
//! - `settings`: User preferences loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const SIM_HZ: u32 = 50;
    /// Milliseconds of game time covered by one tick
    pub const SIM_STEP_MS: u64 = 1000 / SIM_HZ as u64;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 864;
    pub const SCREEN_HEIGHT: i32 = 736;
    /// Collidable ground surface
    pub const GROUND_LINE: i32 = 588;

    /// Background is drawn shifted up so its horizon sits above the ground
    pub const BACKGROUND_OFFSET_Y: i32 = -150;
    /// Score text anchor (top edge)
    pub const SCORE_TEXT_Y: i32 = 20;
    pub const SCORE_FONT_SIZE: u16 = 60;
}
