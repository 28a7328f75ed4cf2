//! Pipe pairs - the scrolling gap obstacles

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::IRect;

/// Two pipes sharing one x position: one hanging from above, one rising
/// from below, with a fixed gap between their facing edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipePair {
    pub id: u32,
    /// Hanging pipe (drawn mirrored)
    pub top: IRect,
    /// Rising pipe
    pub bottom: IRect,
}

impl PipePair {
    /// Build a pair around `base_y`, the vertical center of the gap
    pub fn new(id: u32, spawn_x: i32, base_y: i32, size: IVec2, gap: i32) -> Self {
        let half_gap = gap / 2;
        Self {
            id,
            top: IRect::from_bottom_left(IVec2::new(spawn_x, base_y - half_gap), size),
            bottom: IRect::from_top_left(IVec2::new(spawn_x, base_y + half_gap), size),
        }
    }

    /// Move both pipes left together
    pub fn scroll(&mut self, speed: i32) {
        let delta = IVec2::new(-speed, 0);
        self.top.translate(delta);
        self.bottom.translate(delta);
    }

    /// Both pipes share x and width, so they leave the screen on the same tick
    pub fn is_off_screen(&self) -> bool {
        self.top.right() < 0 && self.bottom.right() < 0
    }

    pub fn rects(&self) -> [IRect; 2] {
        [self.top, self.bottom]
    }

    pub fn x(&self) -> i32 {
        self.bottom.x
    }

    /// y of the hanging pipe's lower edge
    pub fn gap_top(&self) -> i32 {
        self.top.bottom()
    }

    /// y of the rising pipe's upper edge
    pub fn gap_bottom(&self) -> i32 {
        self.bottom.top()
    }
}
