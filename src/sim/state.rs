//! Game state and core simulation types
//!
//! Everything the loop mutates lives in `GameState`, owned by the caller and
//! handed to `tick` by mutable reference.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::button::RestartButton;
use super::pipe::PipePair;
use super::scoring::ScoreTracker;
use super::spawner::PipeSpawner;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird hovers in place, waiting for the first press
    #[default]
    Idle,
    /// Gravity, pipes and scrolling active
    Flying,
    /// Everything frozen; restart button live
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Pipe,
    /// Flew off the top of the screen
    Ceiling,
    Ground,
}

/// Things that happened during a tick, for logging and tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    PipeSpawned { id: u32, gap_center: i32 },
    Scored { score: u32 },
    Crashed { cause: CrashCause, score: u32 },
    Reset,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Active pipe pairs, earliest spawned first
    pub pipes: Vec<PipePair>,
    pub scoring: ScoreTracker,
    pub spawner: PipeSpawner,
    pub button: RestartButton,
    /// Horizontal offset of the ground tile, in `-ground_wrap..=0`
    pub ground_scroll: i32,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        for warning in tuning.validate() {
            log::warn!("Tuning: {}", warning);
        }

        let bird = Bird::new(tuning.bird_start(), tuning.bird_size);
        let button = RestartButton::new(tuning.button_top_left(), tuning.button_size);

        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Idle,
            bird,
            pipes: Vec::new(),
            scoring: ScoreTracker::default(),
            spawner: PipeSpawner::new(seed),
            button,
            ground_scroll: 0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    pub fn score(&self) -> u32 {
        self.scoring.score
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The pair scoring is measured against
    pub fn nearest_pipe(&self) -> Option<&PipePair> {
        self.pipes.first()
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Shift the ground tile left, wrapping to give an endless strip
    pub fn scroll_ground(&mut self) {
        self.ground_scroll -= self.tuning.scroll_speed;
        if self.ground_scroll.abs() > self.tuning.ground_wrap {
            self.ground_scroll = 0;
        }
    }

    /// Back to Idle with a fresh bird, no pipes and a zero score
    pub fn reset(&mut self, button_held: bool) {
        self.pipes.clear();
        self.bird = Bird::new(self.tuning.bird_start(), self.tuning.bird_size)
            .with_button_held(button_held);
        self.scoring.reset();
        self.phase = GamePhase::Idle;
        self.events.push(GameEvent::Reset);
        log::info!("Game reset");
    }
}
