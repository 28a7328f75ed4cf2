//! Platform abstraction layer
//!
//! Contracts for the collaborators the simulation consumes:
//! - Time/ticks
//! - Input events

pub mod input;
pub mod time;

pub use input::{InputEvent, InputLatch, InputSource};
pub use time::{Clock, FixedStep, SimClock};
