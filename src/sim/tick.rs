//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. Order within a step:
//! bird, scoring, collisions, world motion (spawn, ground, pipes), restart
//! button, and finally the start-of-flight press.

use glam::IVec2;

use super::state::{CrashCause, GameEvent, GamePhase, GameState};

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Primary button currently held (level)
    pub primary_pressed: bool,
    /// A primary button-down event arrived since the previous tick
    pub primary_down: bool,
    /// Pointer position in playfield pixels
    pub pointer: IVec2,
    /// Game clock, in milliseconds
    pub now_ms: u64,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    let phase_at_start = state.phase;

    if state
        .bird
        .update(state.phase, input.primary_pressed, &state.tuning)
    {
        state.events.push(GameEvent::Flapped);
    }

    let nearest = state.nearest_pipe().map(|pair| pair.bottom);
    if state.scoring.update(&state.bird.rect, nearest.as_ref()) {
        let score = state.score();
        log::debug!("Scored: {}", score);
        state.events.push(GameEvent::Scored { score });
    }

    if state.phase == GamePhase::Flying {
        if let Some(cause) = detect_crash(state) {
            let score = state.score();
            log::info!("Game over ({:?}) with score {}", cause, score);
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::Crashed { cause, score });
        }
    }

    if state.phase != GamePhase::GameOver {
        if state.phase == GamePhase::Flying {
            spawn_pipes(state, input.now_ms);
        }

        state.scroll_ground();

        if state.phase == GamePhase::Flying {
            let speed = state.tuning.scroll_speed;
            for pair in &mut state.pipes {
                pair.scroll(speed);
            }
            state.pipes.retain(|pair| !pair.is_off_screen());
        }
    }

    if state
        .button
        .activated(state.phase, input.pointer, input.primary_pressed)
    {
        state.reset(input.primary_pressed);
    }

    // Only a press that started the tick in Idle begins a flight, so the
    // click that hits the restart button never launches the next run.
    if input.primary_down && phase_at_start == GamePhase::Idle && state.phase == GamePhase::Idle
    {
        log::info!("Flight started");
        state.phase = GamePhase::Flying;
        state.events.push(GameEvent::Started);
    }
}

/// Pipe hit, off the top, or on the ground
fn detect_crash(state: &GameState) -> Option<CrashCause> {
    let bird = state.bird.rect;

    if state
        .pipes
        .iter()
        .flat_map(|pair| pair.rects())
        .any(|pipe| bird.intersects(&pipe))
    {
        return Some(CrashCause::Pipe);
    }
    if bird.top() < 0 {
        return Some(CrashCause::Ceiling);
    }
    if bird.bottom() >= state.tuning.ground_line {
        return Some(CrashCause::Ground);
    }
    None
}

fn spawn_pipes(state: &mut GameState, now_ms: u64) {
    if !state
        .spawner
        .is_due(now_ms, state.tuning.pipe_interval_ms)
    {
        return;
    }

    let id = state.next_entity_id();
    if let Some(pair) = state.spawner.try_spawn(now_ms, id, &state.tuning) {
        let gap_center = (pair.gap_top() + pair.gap_bottom()) / 2;
        log::debug!("Spawned pipe {} with gap at y={}", id, gap_center);
        state.pipes.push(pair);
        state.events.push(GameEvent::PipeSpawned { id, gap_center });
    }
}
