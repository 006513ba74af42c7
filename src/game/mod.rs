//! Game core: one owned aggregate advanced once per animation frame.
//!
//! Everything the loop mutates lives in [`GameState`]. Drawing and DOM
//! effects go through the [`Surface`] and [`Hud`] capabilities so the whole
//! frame can run headless with an injected timestamp.

pub mod collision;
pub mod entities;
pub mod input;
pub mod lifecycle;
pub mod spawner;
pub mod starfield;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{CANVAS_HEIGHT, GameConfig, STAR_COUNT};
use crate::render::{Hud, Paint, Shape, Surface, TRAIL_ALPHA, TRAIL_COLOR};
use collision::Sweep;
use entities::{Collectible, Particle, Player};
use input::KeyState;
use lifecycle::Phase;
use spawner::SpawnTimer;
use starfield::Starfield;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Window-wide viewport at the fixed banner height.
    pub fn new(width: f64) -> Self {
        Self { width, height: CANVAS_HEIGHT }
    }
}

/// Per-frame outcome, for hosts that want more than the HUD callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub collected: u32,
    pub culled: u32,
    pub spawned: bool,
}

pub struct GameState {
    pub config: GameConfig,
    pub viewport: Viewport,
    pub player: Player,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,
    pub keys: KeyState,
    phase: Phase,
    score: u32,
    starfield: Starfield,
    collectible_timer: SpawnTimer,
    particle_timer: SpawnTimer,
    rng: Pcg32,
}

impl GameState {
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let starfield = Starfield::new(STAR_COUNT, viewport, &mut rng);
        Self {
            player: Player::new(&config, viewport),
            collectibles: Vec::new(),
            particles: Vec::new(),
            keys: KeyState::default(),
            phase: Phase::Idle,
            score: 0,
            starfield,
            collectible_timer: SpawnTimer::new(config.collectible_interval_ms),
            particle_timer: SpawnTimer::new(config.particle_interval_ms),
            rng,
            config,
            viewport,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Width follows the window; height stays fixed.
    pub fn resize(&mut self, width: f64) {
        self.viewport.width = width;
        log::debug!("viewport resized to {}x{}", self.viewport.width, self.viewport.height);
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.press(key);
        self.player.steer(self.keys.direction());
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.release(key);
        self.player.steer(self.keys.direction());
    }

    /// Advance and draw one animation frame at timestamp `now` (ms).
    pub fn frame<S: Surface, H: Hud>(&mut self, now: f64, surface: &mut S, hud: &mut H) -> FrameReport {
        let vp = self.viewport;
        surface.draw(
            Shape::Rect { w: vp.width, h: vp.height },
            (0.0, 0.0),
            Paint::faded(TRAIL_COLOR, TRAIL_ALPHA),
        );
        self.starfield.advance_and_draw(surface, vp, &mut self.rng);

        if !self.is_active() {
            self.player.draw(surface, self.config.profile);
            return FrameReport::default();
        }

        if self.config.particles {
            if self.particle_timer.ready(now) {
                self.spawn_particle();
            }
            self.update_particles(surface);
        }

        self.player.integrate(vp);
        self.player.draw(surface, self.config.profile);

        let sweep = self.update_collectibles(surface);
        if sweep.collected > 0 {
            self.score += sweep.collected * self.config.reward;
            hud.show_score(self.score);
            hud.pulse_score();
        }

        let spawned = self.collectible_timer.ready(now);
        if spawned {
            self.spawn_collectible();
        }

        FrameReport { collected: sweep.collected, culled: sweep.culled, spawned }
    }

    fn spawn_particle(&mut self) {
        let (hw, _) = self.player.half_extents();
        let jitter = (self.rng.random::<f64>() - 0.5) * self.config.particle_jitter;
        self.particles.push(Particle {
            x: self.player.x - hw,
            y: self.player.y + jitter,
            size: self.config.particle_size,
            speed: self.config.particle_speed,
            alpha: 1.0,
        });
    }

    fn update_particles<S: Surface>(&mut self, surface: &mut S) {
        let fade = self.config.particle_fade;
        let cull_x = self.config.cull_x;
        self.particles.retain_mut(|p| {
            p.draw(surface);
            p.advance(fade);
            !p.is_spent(cull_x)
        });
    }

    fn spawn_collectible(&mut self) {
        let margin = self.config.spawn_margin;
        let span = (self.viewport.height - 2.0 * margin).max(0.0);
        let c = Collectible {
            x: self.viewport.width,
            y: self.rng.random::<f64>() * span + margin,
            size: self.config.collectible_size,
            speed: self.config.collectible_speed,
        };
        log::debug!("collectible spawned at ({:.0}, {:.0})", c.x, c.y);
        self.collectibles.push(c);
    }

    fn update_collectibles<S: Surface>(&mut self, surface: &mut S) -> Sweep {
        for c in &mut self.collectibles {
            c.draw(surface, self.config.profile);
            c.advance();
        }
        collision::sweep(&self.player, &mut self.collectibles, self.config.cull_x)
    }
}
