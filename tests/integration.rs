// Integration tests (native) for the `starfield-runner` crate.
// These drive whole frames through GameState with recording Surface/Hud
// doubles, so they run under `cargo test` on the host without a browser.

use std::collections::HashSet;

use starfield_runner::game::entities::Collectible;
use starfield_runner::{
    Asset, GameConfig, GameState, Hud, LifecycleEvent, Paint, Phase, Shape, Surface, Viewport,
};

#[derive(Default)]
struct Canvas {
    draws: usize,
    shapes: Vec<Shape>,
    ready: HashSet<Asset>,
}

impl Surface for Canvas {
    fn draw(&mut self, shape: Shape, _at: (f64, f64), _paint: Paint) {
        self.draws += 1;
        self.shapes.push(shape);
    }
    fn is_ready(&self, asset: Asset) -> bool {
        self.ready.contains(&asset)
    }
}

#[derive(Default)]
struct Page {
    score_text: String,
    pulses: u32,
    overlay: Option<String>,
}

impl Hud for Page {
    fn show_score(&mut self, score: u32) {
        self.score_text = format!("Score: {}", score);
    }
    fn pulse_score(&mut self) {
        self.pulses += 1;
    }
    fn show_instructions(&mut self, text: &str) {
        self.overlay = Some(text.to_string());
    }
    fn hide_instructions(&mut self) {
        self.overlay = None;
    }
}

fn new_game(config: GameConfig) -> GameState {
    GameState::new(config, Viewport::new(800.0), 2024)
}

#[test]
fn click_spawn_and_collect() {
    let mut game = new_game(GameConfig::sprite());
    let mut canvas = Canvas::default();
    let mut page = Page::default();

    assert_eq!(game.click(&mut page), LifecycleEvent::Started);
    game.frame(1600.0, &mut canvas, &mut page);
    assert_eq!(game.collectibles.len(), 1);
    let c = game.collectibles[0];
    assert_eq!(c.x, 800.0);

    game.player.x = c.x;
    game.player.y = c.y;
    let report = game.frame(1616.0, &mut canvas, &mut page);
    assert_eq!(report.collected, 1);
    assert!(game.collectibles.is_empty());
    assert_eq!(game.score(), 10);
    assert_eq!(page.score_text, "Score: 10");
    assert_eq!(page.pulses, 1);
}

#[test]
fn coin_drifts_off_screen_without_scoring() {
    let mut game = new_game(GameConfig::sprite());
    let mut canvas = Canvas::default();
    let mut page = Page::default();
    game.click(&mut page);

    // Far corner, away from the ship's lane.
    game.player.y = 45.0;
    game.collectibles.push(Collectible { x: 10.0, y: 330.0, size: 40.0, speed: 2.0 });
    let mut culled = 0;
    for i in 0..40 {
        culled += game.frame(i as f64, &mut canvas, &mut page).culled;
    }
    assert_eq!(culled, 1);
    assert!(game.collectibles.is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(page.pulses, 0);
}

#[test]
fn x_only_decreases_between_spawn_and_removal() {
    let mut game = new_game(GameConfig::sprite());
    let mut canvas = Canvas::default();
    let mut page = Page::default();
    game.click(&mut page);
    game.player.y = 45.0;

    // Spawn y is random, so it identifies a coin across frames.
    let mut last: Vec<Collectible> = Vec::new();
    for i in 0..600 {
        game.frame(i as f64 * 16.0, &mut canvas, &mut page);
        for now in &game.collectibles {
            if let Some(prev) = last.iter().find(|p| p.y == now.y) {
                assert!(now.x < prev.x);
            }
        }
        // Removal keeps order, so older coins stay to the left.
        assert!(game.collectibles.windows(2).all(|w| w[0].x < w[1].x));
        last = game.collectibles.clone();
        for p in &game.particles {
            assert!(p.alpha > 0.0 && p.alpha <= 1.0);
        }
    }
}

#[test]
fn reset_restores_everything_regardless_of_state() {
    let mut game = new_game(GameConfig::sprite());
    let mut canvas = Canvas::default();
    let mut page = Page::default();
    game.click(&mut page);
    game.key_down("ArrowDown");
    game.key_down("d");
    for i in 0..200 {
        game.frame(i as f64 * 50.0, &mut canvas, &mut page);
    }
    game.collectibles.push(Collectible { x: game.player.x, y: game.player.y, size: 40.0, speed: 0.0 });
    game.frame(10_050.0, &mut canvas, &mut page);
    assert!(game.score() > 0);
    assert!(!game.particles.is_empty());

    assert_eq!(game.click(&mut page), LifecycleEvent::Reset);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.score(), 0);
    assert!(game.collectibles.is_empty());
    assert!(game.particles.is_empty());
    assert_eq!((game.player.x, game.player.y), (100.0, 175.0));
    assert_eq!((game.player.dx, game.player.dy), (0.0, 0.0));
    assert_eq!(page.score_text, "Score: 0");
    assert!(page.overlay.as_deref().is_some_and(|t| t.starts_with("Click anywhere")));

    // Idle after reset: nothing spawns, ship stays put.
    for i in 0..100 {
        game.frame(20_000.0 + i as f64 * 100.0, &mut canvas, &mut page);
    }
    assert!(game.collectibles.is_empty());
    assert_eq!(game.player.x, 100.0);
}

#[test]
fn sprite_profile_uses_images_once_loaded() {
    let mut game = new_game(GameConfig::sprite());
    let mut canvas = Canvas::default();
    let mut page = Page::default();
    game.frame(0.0, &mut canvas, &mut page);
    assert!(canvas.shapes.contains(&Shape::Rect { w: 90.0, h: 90.0 }));

    canvas.ready.extend(Asset::ALL);
    canvas.shapes.clear();
    game.frame(16.0, &mut canvas, &mut page);
    assert!(canvas.shapes.contains(&Shape::Sprite { asset: Asset::Ship, w: 90.0, h: 90.0 }));
}

#[test]
fn every_frame_draws_fade_and_all_stars() {
    let mut game = new_game(GameConfig::vector());
    let mut canvas = Canvas::default();
    let mut page = Page::default();
    game.frame(0.0, &mut canvas, &mut page);
    // fade + stars + idle ship
    assert_eq!(canvas.draws, 1 + game.starfield().len() + 1);
    assert_eq!(canvas.shapes[0], Shape::Rect { w: 800.0, h: 350.0 });
}
