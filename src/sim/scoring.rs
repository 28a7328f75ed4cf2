//! Score tracking
//!
//! Two-phase edge detection against the nearest pipe: first the bird must be
//! seen strictly inside the pipe's horizontal span, then fully past its
//! trailing edge. Each pass through that sequence scores exactly one point.

use serde::{Deserialize, Serialize};

use super::rect::IRect;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: u32,
    /// Bird is between the nearest pipe's edges and has not scored it yet
    pub pass_pipe: bool,
}

impl ScoreTracker {
    /// Check the bird against the nearest pipe. Returns true on a new point.
    pub fn update(&mut self, bird: &IRect, nearest: Option<&IRect>) -> bool {
        let Some(pipe) = nearest else {
            return false;
        };

        if !self.pass_pipe && bird.left() > pipe.left() && bird.right() < pipe.right() {
            self.pass_pipe = true;
        }

        if self.pass_pipe && bird.left() > pipe.right() {
            self.score += 1;
            self.pass_pipe = false;
            return true;
        }

        false
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.pass_pipe = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRD: IRect = IRect::new(75, 350, 51, 36);

    fn pipe_at(x: i32) -> IRect {
        IRect::new(x, 443, 78, 560)
    }

    #[test]
    fn test_no_pipes_no_change() {
        let mut tracker = ScoreTracker::default();
        assert!(!tracker.update(&BIRD, None));
        assert_eq!(tracker.score, 0);
        assert!(!tracker.pass_pipe);
    }

    #[test]
    fn test_scores_once_per_pipe() {
        let mut tracker = ScoreTracker::default();
        let mut points = 0;
        let mut scored_at = None;

        let mut x = 300;
        while x > -100 {
            if tracker.update(&BIRD, Some(&pipe_at(x))) {
                points += 1;
                scored_at = Some(x);
            }
            x -= 4;
        }

        assert_eq!(points, 1);
        assert_eq!(tracker.score, 1);
        assert!(!tracker.pass_pipe);
        // First x where pipe.right (x + 78) < bird.left (75)
        assert_eq!(scored_at, Some(-4));
    }

    #[test]
    fn test_entry_requires_strict_containment() {
        let mut tracker = ScoreTracker::default();
        // bird.left == pipe.left: not inside yet
        tracker.update(&BIRD, Some(&pipe_at(75)));
        assert!(!tracker.pass_pipe);
        tracker.update(&BIRD, Some(&pipe_at(74)));
        assert!(tracker.pass_pipe);
    }

    #[test]
    fn test_exit_without_entry_does_not_score() {
        let mut tracker = ScoreTracker::default();
        assert!(!tracker.update(&BIRD, Some(&pipe_at(-20))));
        assert_eq!(tracker.score, 0);
    }

    #[test]
    fn test_reset() {
        let mut tracker = ScoreTracker {
            score: 12,
            pass_pipe: true,
        };
        tracker.reset();
        assert_eq!(tracker.score, 0);
        assert!(!tracker.pass_pipe);
    }
}
