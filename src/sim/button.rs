//! Restart button shown on the game-over screen

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::IRect;
use super::state::GamePhase;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestartButton {
    pub rect: IRect,
}

impl RestartButton {
    pub fn new(top_left: IVec2, size: IVec2) -> Self {
        Self {
            rect: IRect::from_top_left(top_left, size),
        }
    }

    pub fn is_visible(phase: GamePhase) -> bool {
        phase == GamePhase::GameOver
    }

    /// Level-triggered: fires on every tick the button is held over the rect
    pub fn activated(&self, phase: GamePhase, pointer: IVec2, pressed: bool) -> bool {
        Self::is_visible(phase) && pressed && self.rect.contains_point(pointer)
    }
}
