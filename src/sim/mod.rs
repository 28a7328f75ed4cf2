//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod bird;
pub mod button;
pub mod pipe;
pub mod rect;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;

pub use bird::{Bird, DEAD_ANGLE};
pub use button::RestartButton;
pub use pipe::PipePair;
pub use rect::IRect;
pub use scoring::ScoreTracker;
pub use spawner::PipeSpawner;
pub use state::{CrashCause, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
