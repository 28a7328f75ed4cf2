//! Flappy entry point
//!
//! Opens the window, loads art, and runs the fixed-step game loop.

use std::sync::OnceLock;

use flappy::Settings;
use macroquad::prelude::Conf;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Settings are needed before `main` to size the window
fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::load)
}

fn window_conf() -> Conf {
    env_logger::init();
    let settings = settings();

    Conf {
        window_title: settings.window_title.clone(),
        window_width: settings.tuning.screen_width,
        window_height: settings.tuning.screen_height,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

mod native_game {
    use std::path::Path;

    use flappy::platform::{Clock, FixedStep, InputEvent, InputLatch, InputSource, SimClock};
    use flappy::renderer::{Renderer, Rgba, Sprite, draw_scene};
    use flappy::sim::{GameEvent, GameState, tick};
    use flappy::{Settings, Tuning, consts};
    use glam::IVec2;
    use macroquad::prelude::{
        BLACK, Color, DrawTextureParams, FilterMode, Font, Image, MouseButton, TextParams,
        Texture2D, WHITE, clear_background, draw_text_ex, draw_texture_ex, get_fps,
        get_frame_time, is_mouse_button_down, is_mouse_button_pressed, is_quit_requested,
        load_texture, load_ttf_font, measure_text, mouse_position, next_frame, prevent_quit,
    };

    // ── Art ─────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy)]
    struct Rgb(u8, u8, u8);

    impl Rgb {
        fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
            let t = t.clamp(0.0, 1.0);
            let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
            Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
        }

        fn color(self) -> Color {
            Color::from_rgba(self.0, self.1, self.2, 255)
        }
    }

    const SKY_TOP: Rgb = Rgb(70, 180, 200);
    const SKY_BOT: Rgb = Rgb(190, 232, 245);
    const HILL: Rgb = Rgb(120, 195, 75);
    const GRASS: Rgb = Rgb(84, 168, 55);
    const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
    const DIRT: Rgb = Rgb(210, 185, 110);
    const DIRT_DARK: Rgb = Rgb(185, 160, 90);
    const PIPE_L: Rgb = Rgb(74, 122, 26);
    const PIPE_HI: Rgb = Rgb(145, 215, 62);
    const CAP_DARK: Rgb = Rgb(60, 100, 20);
    const BIRD_Y: Rgb = Rgb(245, 200, 66);
    const BIRD_WING: Rgb = Rgb(215, 165, 35);
    const BIRD_EYE: Rgb = Rgb(255, 255, 255);
    const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
    const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
    const BUTTON: Rgb = Rgb(225, 120, 40);
    const SHADOW: Rgb = Rgb(30, 30, 30);

    /// Ground texture repeats every this many pixels so the wrap is seamless
    fn ground_period(tuning: &Tuning) -> i32 {
        tuning.ground_wrap + 1
    }

    fn blank(size: IVec2, fill: Rgb) -> Image {
        Image::gen_image_color(size.x.max(1) as u16, size.y.max(1) as u16, fill.color())
    }

    fn fill_rect(img: &mut Image, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for py in y.max(0)..(y + h).min(img.height as i32) {
            for px in x.max(0)..(x + w).min(img.width as i32) {
                img.set_pixel(px as u32, py as u32, c.color());
            }
        }
    }

    fn paint_background(tuning: &Tuning) -> Image {
        let size = IVec2::new(
            tuning.screen_width,
            tuning.ground_line - consts::BACKGROUND_OFFSET_Y,
        );
        let mut img = blank(size, SKY_TOP);
        for y in 0..size.y {
            let c = Rgb::lerp(SKY_TOP, SKY_BOT, y as f32 / size.y as f32);
            fill_rect(&mut img, 0, y, size.x, 1, c);
        }
        for x in 0..size.x {
            let fx = x as f32 * 0.02;
            let h = (fx.sin() * 25.0 + (fx * 1.7).sin() * 12.0 + 60.0) as i32;
            fill_rect(&mut img, x, size.y - h, 1, h, HILL);
        }
        img
    }

    fn paint_ground(tuning: &Tuning) -> Image {
        let period = ground_period(tuning);
        let size = IVec2::new(
            tuning.screen_width + period,
            (tuning.screen_height - tuning.ground_line).max(1),
        );
        let mut img = blank(size, DIRT);
        for x in 0..size.x {
            let c = if (x % period) < period / 2 { GRASS } else { GRASS_LIGHT };
            fill_rect(&mut img, x, 0, 1, 12, c);
            for y in 12..size.y {
                if (x + y).rem_euclid(period) < period / 2 {
                    img.set_pixel(x as u32, y as u32, DIRT_DARK.color());
                }
            }
        }
        img
    }

    fn paint_bird(tuning: &Tuning, frame: usize) -> Image {
        let size = tuning.bird_size;
        let mut img = blank(size, BIRD_Y);
        img.bytes.chunks_exact_mut(4).for_each(|px| px[3] = 0);

        let (w, h) = (size.x, size.y);
        let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
        for y in 0..h {
            for x in 0..w {
                let dx = (x as f32 - cx) / (w as f32 * 0.42);
                let dy = (y as f32 - cy) / (h as f32 * 0.46);
                if dx * dx + dy * dy <= 1.0 {
                    img.set_pixel(x as u32, y as u32, BIRD_Y.color());
                }
            }
        }

        let wing_y = h / 2 + [-h / 5, 0, h / 5][frame % 3];
        fill_rect(&mut img, w / 6, wing_y - 3, w / 3, 7, BIRD_WING);
        fill_rect(&mut img, w * 3 / 5, h / 5, w / 5, h / 4, BIRD_EYE);
        fill_rect(&mut img, w * 3 / 5 + w / 10, h / 5 + 3, w / 10, h / 8, BIRD_PUPIL);
        fill_rect(&mut img, w * 4 / 5, h / 2, w / 5, h / 6, BIRD_BEAK);
        img
    }

    fn paint_pipe(tuning: &Tuning) -> Image {
        let size = tuning.pipe_size;
        let mut img = blank(size, PIPE_L);
        for x in 0..size.x {
            let t = x as f32 / (size.x - 1).max(1) as f32;
            // Bright band left of center, dark at both edges
            let shine = 1.0 - ((t - 0.35).abs() * 2.5).min(1.0);
            fill_rect(&mut img, x, 0, 1, size.y, Rgb::lerp(PIPE_L, PIPE_HI, shine));
        }
        let cap = (size.y / 20).max(4);
        fill_rect(&mut img, 0, 0, size.x, 3, CAP_DARK);
        fill_rect(&mut img, 0, cap, size.x, 3, CAP_DARK);
        img
    }

    fn paint_button(tuning: &Tuning) -> Image {
        let size = tuning.button_size;
        let mut img = blank(size, SHADOW);
        fill_rect(&mut img, 2, 2, size.x - 4, size.y - 4, BUTTON);
        img
    }

    fn texture(img: &Image) -> Texture2D {
        let tex = Texture2D::from_image(img);
        tex.set_filter(FilterMode::Nearest);
        tex
    }

    /// Everything the renderer draws, loaded once at startup
    pub struct Assets {
        background: Texture2D,
        ground: Texture2D,
        birds: Vec<Texture2D>,
        pipe: Texture2D,
        button: Texture2D,
        font: Option<Font>,
        /// Procedural button has no baked-in label
        label_button: bool,
    }

    impl Assets {
        /// Load PNGs (and an optional font) from `dir`
        pub async fn load(dir: &Path, bird_frames: usize) -> Result<Self, macroquad::Error> {
            let path = |name: &str| dir.join(name).to_string_lossy().into_owned();

            let background = load_texture(&path("bg.png")).await?;
            let ground = load_texture(&path("ground.png")).await?;
            let mut birds = Vec::with_capacity(bird_frames);
            for n in 1..=bird_frames.max(1) {
                birds.push(load_texture(&path(&format!("bird{}.png", n))).await?);
            }
            let pipe = load_texture(&path("pipe.png")).await?;
            let button = load_texture(&path("restart.png")).await?;

            let font = match load_ttf_font(&path("font.ttf")).await {
                Ok(font) => Some(font),
                Err(e) => {
                    log::info!("No font.ttf ({}), using the built-in font", e);
                    None
                }
            };

            log::info!("Loaded assets from {}", dir.display());
            Ok(Self {
                background,
                ground,
                birds,
                pipe,
                button,
                font,
                label_button: false,
            })
        }

        /// Generate art matching the sprite sizes in `tuning`
        pub fn procedural(tuning: &Tuning) -> Self {
            let birds = (0..tuning.bird_frames.max(1))
                .map(|frame| texture(&paint_bird(tuning, frame)))
                .collect();

            log::info!("Using procedural art");
            Self {
                background: texture(&paint_background(tuning)),
                ground: texture(&paint_ground(tuning)),
                birds,
                pipe: texture(&paint_pipe(tuning)),
                button: texture(&paint_button(tuning)),
                font: None,
                label_button: true,
            }
        }

        /// Collision boxes follow the real image sizes
        pub fn apply_sizes(&self, tuning: &mut Tuning) {
            let size = |tex: &Texture2D| IVec2::new(tex.width() as i32, tex.height() as i32);
            tuning.bird_size = size(&self.birds[0]);
            tuning.pipe_size = size(&self.pipe);
            tuning.button_size = size(&self.button);
            tuning.bird_frames = self.birds.len();
        }

        fn texture(&self, sprite: Sprite) -> (&Texture2D, bool) {
            match sprite {
                Sprite::Background => (&self.background, false),
                Sprite::Ground => (&self.ground, false),
                Sprite::Bird(frame) => (&self.birds[frame % self.birds.len()], false),
                Sprite::PipeTop => (&self.pipe, true),
                Sprite::PipeBottom => (&self.pipe, false),
                Sprite::RestartButton => (&self.button, false),
            }
        }
    }

    // ── Renderer / input ────────────────────────────────────────────────────

    struct ScreenRenderer<'a> {
        assets: &'a Assets,
        fps: Option<i32>,
    }

    impl Renderer for ScreenRenderer<'_> {
        fn blit(&mut self, sprite: Sprite, pos: IVec2, rotation_deg: f32) {
            let assets = self.assets;
            let (texture, flip_y) = assets.texture(sprite);
            draw_texture_ex(
                texture,
                pos.x as f32,
                pos.y as f32,
                WHITE,
                DrawTextureParams {
                    // Screen y points down, so counter-clockwise is negative
                    rotation: -rotation_deg.to_radians(),
                    flip_y,
                    ..Default::default()
                },
            );

            if sprite == Sprite::RestartButton && assets.label_button {
                let label = "RESTART";
                let dims = measure_text(label, None, 28, 1.0);
                let x = pos.x + (texture.width() as i32 - dims.width as i32) / 2;
                let y = pos.y + (texture.height() as i32 - dims.height as i32) / 2;
                self.draw_text(label, IVec2::new(x, y), 28, Rgba::WHITE);
            }
        }

        fn draw_text(&mut self, text: &str, pos: IVec2, size: u16, color: Rgba) {
            let font = self.assets.font.as_ref();
            let dims = measure_text(text, font, size, 1.0);
            draw_text_ex(
                text,
                pos.x as f32,
                pos.y as f32 + dims.offset_y,
                TextParams {
                    font,
                    font_size: size,
                    color: Color::from_rgba(color.0, color.1, color.2, color.3),
                    ..Default::default()
                },
            );
        }

        fn present(&mut self) {
            if let Some(fps) = self.fps {
                self.draw_text(&format!("{} FPS", fps), IVec2::new(8, 8), 20, Rgba::WHITE);
            }
        }
    }

    struct MouseInput;

    impl InputSource for MouseInput {
        fn primary_button_pressed(&self) -> bool {
            is_mouse_button_down(MouseButton::Left)
        }

        fn pointer_position(&self) -> IVec2 {
            let (x, y) = mouse_position();
            IVec2::new(x as i32, y as i32)
        }

        fn poll_events(&mut self) -> Vec<InputEvent> {
            let mut events = Vec::new();
            if is_mouse_button_pressed(MouseButton::Left) {
                events.push(InputEvent::PrimaryDown);
            }
            if is_quit_requested() {
                events.push(InputEvent::Close);
            }
            events
        }
    }

    // ── Game ────────────────────────────────────────────────────────────────

    /// Game instance holding all state
    pub struct Game {
        state: GameState,
        clock: SimClock,
        step: FixedStep,
        latch: InputLatch,
        input: MouseInput,
        show_fps: bool,
    }

    impl Game {
        pub fn new(seed: u64, tuning: Tuning, settings: &Settings) -> Self {
            Self {
                state: GameState::new(seed, tuning),
                clock: SimClock::new(),
                step: FixedStep::default(),
                latch: InputLatch::new(),
                input: MouseInput,
                show_fps: settings.show_fps,
            }
        }

        /// Sample input and run however many ticks this frame owes
        pub fn update(&mut self, frame_dt: f32) {
            self.latch.sample(&mut self.input);

            for _ in 0..self.step.advance(frame_dt) {
                let input = self.latch.take_tick_input(self.clock.now_ms());
                tick(&mut self.state, &input);
                self.clock.advance();
            }

            for event in self.state.drain_events() {
                match event {
                    GameEvent::Crashed { cause, score } => {
                        log::info!("Crashed into {:?}, final score {}", cause, score)
                    }
                    GameEvent::Scored { score } => log::debug!("Score {}", score),
                    other => log::trace!("{:?}", other),
                }
            }
        }

        pub fn render(&self, assets: &Assets) {
            clear_background(BLACK);
            let mut renderer = ScreenRenderer {
                assets,
                fps: self.show_fps.then(get_fps),
            };
            draw_scene(&self.state, &mut renderer);
            renderer.present();
        }

        pub fn should_quit(&self) -> bool {
            self.latch.close_requested()
        }
    }

    pub async fn run(settings: &Settings) {
        let mut tuning = settings.tuning.clone();

        let assets = match &settings.assets_dir {
            Some(dir) => match Assets::load(dir, tuning.bird_frames).await {
                Ok(assets) => assets,
                Err(e) => {
                    log::error!("Failed to load assets from {}: {}", dir.display(), e);
                    std::process::exit(1);
                }
            },
            None => Assets::procedural(&tuning),
        };
        assets.apply_sizes(&mut tuning);

        let seed = settings.resolve_seed();
        log::info!("Flappy starting (seed {})", seed);

        let mut game = Game::new(seed, tuning, settings);

        // Closing the window ends the loop after the frame in flight
        prevent_quit();
        loop {
            game.update(get_frame_time());
            game.render(&assets);
            next_frame().await;
            if game.should_quit() {
                break;
            }
        }
        log::info!("Window closed");
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    native_game::run(settings()).await;
}
