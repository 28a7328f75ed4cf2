//! Rendering contract
//!
//! The simulation never draws. `draw_scene` turns a `GameState` into an
//! ordered list of blits and text calls against any `Renderer`.

pub mod scene;

pub use scene::draw_scene;

use glam::IVec2;

/// Images the game draws, loaded once by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Ground,
    /// Animation frame index
    Bird(usize),
    /// Hanging pipe (pipe image mirrored vertically)
    PipeTop,
    PipeBottom,
    RestartButton,
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
}

pub trait Renderer {
    /// Draw `sprite` with its top-left corner at `pos`, rotated
    /// counter-clockwise by `rotation_deg` about its center
    fn blit(&mut self, sprite: Sprite, pos: IVec2, rotation_deg: f32);

    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: IVec2, size: u16, color: Rgba);

    /// Finish the frame
    fn present(&mut self) {}
}
