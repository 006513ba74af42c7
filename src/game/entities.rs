//! Player ship, collectibles and exhaust particles.

use super::Viewport;
use crate::config::{GameConfig, Profile};
use crate::render::{Asset, COIN_COLOR, COIN_FALLBACK_RADIUS, Paint, SHIP_COLOR, Shape, Surface};

/// Alpha at or below this counts as fully faded; absorbs float drift from
/// repeated subtraction of the fade step.
const ALPHA_EPSILON: f64 = 1e-6;

/// The single player ship. Position is the centre of its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Player {
    pub fn new(config: &GameConfig, viewport: Viewport) -> Self {
        Self {
            x: config.player_start_x,
            y: viewport.height / 2.0,
            width: config.player_width,
            height: config.player_height,
            speed: config.player_speed,
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Collision radius.
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    /// Set velocity from a direction with components in {-1, 0, 1}.
    pub fn steer(&mut self, (sx, sy): (f64, f64)) {
        self.dx = sx * self.speed;
        self.dy = sy * self.speed;
    }

    pub fn integrate(&mut self, viewport: Viewport) {
        self.x += self.dx;
        self.y += self.dy;
        self.clamp_to(viewport);
    }

    /// Keep the bounding box inside the viewport. Lower bound first, so a
    /// viewport narrower than the ship pins it to the far edge.
    pub fn clamp_to(&mut self, viewport: Viewport) {
        let (hw, hh) = self.half_extents();
        self.x = self.x.max(hw).min(viewport.width - hw);
        self.y = self.y.max(hh).min(viewport.height - hh);
    }

    pub fn reset(&mut self, config: &GameConfig, viewport: Viewport) {
        self.x = config.player_start_x;
        self.y = viewport.height / 2.0;
        self.dx = 0.0;
        self.dy = 0.0;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, profile: Profile) {
        match profile {
            Profile::Sprite if surface.is_ready(Asset::Ship) => surface.draw(
                Shape::Sprite { asset: Asset::Ship, w: self.width, h: self.height },
                (self.x, self.y),
                Paint::solid(SHIP_COLOR),
            ),
            Profile::Sprite => {
                let (hw, hh) = self.half_extents();
                surface.draw(
                    Shape::Rect { w: self.width, h: self.height },
                    (self.x - hw, self.y - hh),
                    Paint::solid(SHIP_COLOR),
                );
            }
            Profile::Vector => surface.draw(
                Shape::Triangle { r: self.radius() },
                (self.x, self.y),
                Paint::solid(SHIP_COLOR),
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collectible {
    pub x: f64,
    pub y: f64,
    /// Diameter.
    pub size: f64,
    pub speed: f64,
}

impl Collectible {
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, profile: Profile) {
        match profile {
            Profile::Sprite if surface.is_ready(Asset::Coin) => surface.draw(
                Shape::Sprite { asset: Asset::Coin, w: self.size, h: self.size },
                (self.x, self.y),
                Paint::solid(COIN_COLOR),
            ),
            Profile::Sprite => surface.draw(
                Shape::Circle { r: COIN_FALLBACK_RADIUS },
                (self.x, self.y),
                Paint::solid(COIN_COLOR),
            ),
            Profile::Vector => surface.draw(
                Shape::Circle { r: self.radius() },
                (self.x, self.y),
                Paint::solid(COIN_COLOR),
            ),
        }
    }
}

/// Exhaust puff trailing the ship. Purely visual.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub alpha: f64,
}

impl Particle {
    pub fn advance(&mut self, fade: f64) {
        self.x -= self.speed;
        self.alpha -= fade;
    }

    pub fn is_spent(&self, cull_x: f64) -> bool {
        self.x < cull_x || self.alpha <= ALPHA_EPSILON
    }

    /// Drawn only once the fire image is loaded; there is no fallback shape.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if surface.is_ready(Asset::Fire) {
            surface.draw(
                Shape::Sprite { asset: Asset::Fire, w: self.size, h: self.size },
                (self.x, self.y),
                Paint::faded(SHIP_COLOR, self.alpha.clamp(0.0, 1.0)),
            );
        }
    }
}
