//! Scene composition in draw order: background, bird, pipes, ground, score,
//! and the restart button on the game-over screen.

use glam::IVec2;

use super::{Renderer, Rgba, Sprite};
use crate::consts::{BACKGROUND_OFFSET_Y, SCORE_FONT_SIZE, SCORE_TEXT_Y};
use crate::sim::{GameState, RestartButton};

pub fn draw_scene<R: Renderer>(state: &GameState, renderer: &mut R) {
    let tuning = &state.tuning;

    renderer.blit(Sprite::Background, IVec2::new(0, BACKGROUND_OFFSET_Y), 0.0);

    let bird = &state.bird;
    renderer.blit(
        Sprite::Bird(bird.frame),
        bird.rect.top_left(),
        bird.render_angle(state.phase),
    );

    for pair in &state.pipes {
        renderer.blit(Sprite::PipeBottom, pair.bottom.top_left(), 0.0);
        renderer.blit(Sprite::PipeTop, pair.top.top_left(), 0.0);
    }

    renderer.blit(
        Sprite::Ground,
        IVec2::new(state.ground_scroll, tuning.ground_line),
        0.0,
    );

    renderer.draw_text(
        &state.score().to_string(),
        IVec2::new(tuning.screen_width / 2, SCORE_TEXT_Y),
        SCORE_FONT_SIZE,
        Rgba::WHITE,
    );

    if RestartButton::is_visible(state.phase) {
        renderer.blit(Sprite::RestartButton, state.button.rect.top_left(), 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, PipePair};
    use crate::tuning::Tuning;

    #[derive(Debug, PartialEq)]
    enum Call {
        Blit(Sprite, IVec2, f32),
        Text(String, IVec2),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn blit(&mut self, sprite: Sprite, pos: IVec2, rotation_deg: f32) {
            self.calls.push(Call::Blit(sprite, pos, rotation_deg));
        }

        fn draw_text(&mut self, text: &str, pos: IVec2, _size: u16, _color: Rgba) {
            self.calls.push(Call::Text(text.to_string(), pos));
        }
    }

    #[test]
    fn test_idle_scene() {
        let state = GameState::new(1, Tuning::default());
        let mut rec = Recorder::default();
        draw_scene(&state, &mut rec);

        assert_eq!(
            rec.calls,
            vec![
                Call::Blit(Sprite::Background, IVec2::new(0, -150), 0.0),
                Call::Blit(Sprite::Bird(0), IVec2::new(75, 350), 0.0),
                Call::Blit(Sprite::Ground, IVec2::new(0, 588), 0.0),
                Call::Text("0".to_string(), IVec2::new(432, 20)),
            ]
        );
    }

    #[test]
    fn test_game_over_scene() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.bird.vel = 3.0;
        state.scoring.score = 4;
        let id = state.next_entity_id();
        state
            .pipes
            .push(PipePair::new(id, 300, 368, state.tuning.pipe_size, 150));

        let mut rec = Recorder::default();
        draw_scene(&state, &mut rec);

        assert_eq!(rec.calls.len(), 7);
        assert_eq!(
            rec.calls[1],
            Call::Blit(Sprite::Bird(0), IVec2::new(75, 350), -90.0)
        );
        assert_eq!(
            rec.calls[2],
            Call::Blit(Sprite::PipeBottom, IVec2::new(300, 443), 0.0)
        );
        assert_eq!(
            rec.calls[3],
            Call::Blit(Sprite::PipeTop, IVec2::new(300, 293 - 560), 0.0)
        );
        assert_eq!(rec.calls[5], Call::Text("4".to_string(), IVec2::new(432, 20)));
        assert_eq!(
            rec.calls[6],
            Call::Blit(Sprite::RestartButton, IVec2::new(382, 268), 0.0)
        );
    }
}
