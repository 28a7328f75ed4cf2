use flappy::Tuning;
use flappy::consts::SIM_STEP_MS;
use flappy::sim::{
    Bird, GameEvent, GamePhase, GameState, IRect, PipePair, RestartButton, ScoreTracker,
    TickInput, tick,
};
use glam::IVec2;
use proptest::prelude::*;

fn run(state: &mut GameState, input: TickInput) {
    let input = TickInput {
        now_ms: state.time_ticks * SIM_STEP_MS,
        ..input
    };
    tick(state, &input);
}

proptest! {
    #[test]
    fn gravity_never_exceeds_terminal_speed(start_vel in -8.0f32..8.0, ticks in 1usize..80) {
        let tuning = Tuning::default();
        let mut bird = Bird::new(tuning.bird_start(), tuning.bird_size);
        bird.vel = start_vel;
        for _ in 0..ticks {
            let before = bird.vel;
            bird.apply_gravity(&tuning);
            prop_assert!(bird.vel <= tuning.max_fall_speed);
            prop_assert_eq!(bird.vel, f32::min(before + tuning.gravity, tuning.max_fall_speed));
        }
    }

    #[test]
    fn flap_sets_exact_impulse(start_vel in -8.0f32..=8.0) {
        let tuning = Tuning::default();
        let mut bird = Bird::new(tuning.bird_start(), tuning.bird_size);
        bird.vel = start_vel;
        prop_assert!(bird.handle_jump(true, &tuning));
        prop_assert_eq!(bird.vel, -8.0);
    }

    #[test]
    fn pair_gap_is_fixed(offset in -100i32..=100, x in 0i32..900) {
        let tuning = Tuning::default();
        let base_y = tuning.center_y() + offset;
        let pair = PipePair::new(1, x, base_y, tuning.pipe_size, tuning.pipe_gap);
        prop_assert_eq!(pair.gap_top(), base_y - 75);
        prop_assert_eq!(pair.gap_bottom(), base_y + 75);
        prop_assert_eq!(pair.top.x, pair.bottom.x);
    }

    #[test]
    fn one_point_per_pipe(start_x in 130i32..900, speed in 1i32..20) {
        let bird = IRect::new(75, 350, 51, 36);
        let mut tracker = ScoreTracker::default();
        let mut x = start_x;
        while x > -200 {
            tracker.update(&bird, Some(&IRect::new(x, 443, 78, 560)));
            x -= speed;
        }
        prop_assert_eq!(tracker.score, 1);
        prop_assert!(!tracker.pass_pipe);
    }

    #[test]
    fn button_only_fires_on_game_over(px in 0i32..864, py in 0i32..736, pressed: bool) {
        let tuning = Tuning::default();
        let button = RestartButton::new(tuning.button_top_left(), tuning.button_size);
        let pointer = IVec2::new(px, py);
        prop_assert!(!button.activated(GamePhase::Idle, pointer, pressed));
        prop_assert!(!button.activated(GamePhase::Flying, pointer, pressed));
        prop_assert_eq!(
            button.activated(GamePhase::GameOver, pointer, pressed),
            pressed && button.rect.contains_point(pointer)
        );
    }

    #[test]
    fn reset_always_restores_start(score in 0u32..1000, y in 0i32..560, seed: u64) {
        let mut state = GameState::new(seed, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.scoring.score = score;
        state.bird.rect.y = y;

        let pointer = state.button.rect.center();
        run(&mut state, TickInput { primary_pressed: true, primary_down: true, pointer, now_ms: 0 });

        prop_assert_eq!(state.phase, GamePhase::Idle);
        prop_assert_eq!(state.score(), 0);
        prop_assert_eq!(state.bird.rect.center(), IVec2::new(100, 368));
        prop_assert!(state.pipes.is_empty());
    }

    #[test]
    fn random_play_keeps_invariants(seed: u64, presses in proptest::collection::vec(any::<bool>(), 1..600)) {
        let mut state = GameState::new(seed, Tuning::default());
        let mut last_score = 0;
        let mut held = false;

        for press in presses {
            let input = TickInput {
                primary_pressed: press,
                primary_down: press && !held,
                ..Default::default()
            };
            held = press;
            run(&mut state, input);

            prop_assert!(state.bird.vel <= 8.0);
            prop_assert_eq!(state.bird.rect.x, 75);
            prop_assert!(state.ground_scroll.abs() <= 35);
            for pair in &state.pipes {
                prop_assert_eq!(pair.top.x, pair.bottom.x);
                prop_assert_eq!(pair.gap_bottom() - pair.gap_top(), 150);
            }
            let xs: Vec<i32> = state.pipes.iter().map(|p| p.x()).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));

            for event in state.drain_events() {
                if let GameEvent::Scored { score } = event {
                    prop_assert_eq!(score, last_score + 1);
                    last_score = score;
                }
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }
}

#[test]
fn centered_pair_scenario() {
    let tuning = Tuning::default();
    assert_eq!(tuning.center_y(), 368);
    let pair = PipePair::new(1, tuning.pipe_spawn_x(), 368, tuning.pipe_size, 150);
    assert_eq!(pair.gap_top(), 293);
    assert_eq!(pair.gap_bottom(), 443);
}

#[test]
fn snapshot_restores_identical_run() {
    let mut state = GameState::new(2024, Tuning::default());
    let press = TickInput {
        primary_pressed: true,
        primary_down: true,
        ..Default::default()
    };
    run(&mut state, press);
    for _ in 0..40 {
        run(&mut state, TickInput::default());
    }

    let json = serde_json::to_string(&state).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();

    for i in 0..200 {
        let input = if i % 30 == 0 { press } else { TickInput::default() };
        run(&mut state, input);
        run(&mut restored, input);
    }

    assert_eq!(state.phase, restored.phase);
    assert_eq!(state.bird.rect, restored.bird.rect);
    assert_eq!(state.score(), restored.score());
    let gaps: Vec<i32> = state.pipes.iter().map(|p| p.gap_top()).collect();
    let restored_gaps: Vec<i32> = restored.pipes.iter().map(|p| p.gap_top()).collect();
    assert_eq!(gaps, restored_gaps);
}
