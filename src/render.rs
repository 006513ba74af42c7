//! Drawing and HUD capabilities the game core writes to.
//!
//! The core never touches the canvas or the DOM directly; the browser host
//! implements these traits over web-sys, tests implement them with recorders.

/// Image assets loaded asynchronously by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Ship,
    Coin,
    Fire,
}

impl Asset {
    pub const ALL: [Asset; 3] = [Asset::Ship, Asset::Coin, Asset::Fire];

    pub fn path(&self) -> &'static str {
        match self {
            Asset::Ship => "../images/game/ship.png",
            Asset::Coin => "../images/game/coin.png",
            Asset::Fire => "../images/game/fire.png",
        }
    }
}

/// Primitive drawn by a [`Surface`]. `Rect` is anchored at its top-left
/// corner, every other shape is centred on the draw point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect { w: f64, h: f64 },
    Circle { r: f64 },
    /// Ship outline pointing right, inscribed in a circle of radius `r`.
    Triangle { r: f64 },
    Sprite { asset: Asset, w: f64, h: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: &'static str,
    pub alpha: f64,
}

impl Paint {
    pub const fn solid(color: &'static str) -> Self {
        Self { color, alpha: 1.0 }
    }

    pub const fn faded(color: &'static str, alpha: f64) -> Self {
        Self { color, alpha }
    }
}

pub const SHIP_COLOR: &str = "#6366f1";
pub const COIN_COLOR: &str = "#fbbf24";
pub const STAR_COLOR: &str = "#fff";
pub const TRAIL_COLOR: &str = "#000";
/// Alpha of the per-frame fade that leaves motion trails.
pub const TRAIL_ALPHA: f64 = 0.1;
/// Radius of the coin fallback circle while the coin image loads.
pub const COIN_FALLBACK_RADIUS: f64 = 15.0;

pub trait Surface {
    fn draw(&mut self, shape: Shape, at: (f64, f64), paint: Paint);
    fn is_ready(&self, asset: Asset) -> bool;
}

/// Display sinks outside the canvas.
pub trait Hud {
    fn show_score(&mut self, score: u32);
    /// Transient visual pulse on the score display.
    fn pulse_score(&mut self);
    fn show_instructions(&mut self, text: &str);
    fn hide_instructions(&mut self);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashSet;

    /// Records every draw call; assets listed in `ready` report as loaded.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<(Shape, (f64, f64), Paint)>,
        pub ready: HashSet<Asset>,
    }

    impl Surface for RecordingSurface {
        fn draw(&mut self, shape: Shape, at: (f64, f64), paint: Paint) {
            self.calls.push((shape, at, paint));
        }
        fn is_ready(&self, asset: Asset) -> bool {
            self.ready.contains(&asset)
        }
    }

    #[derive(Default)]
    pub struct RecordingHud {
        pub score: Option<u32>,
        pub pulses: u32,
        pub instructions: Option<String>,
    }

    impl Hud for RecordingHud {
        fn show_score(&mut self, score: u32) {
            self.score = Some(score);
        }
        fn pulse_score(&mut self) {
            self.pulses += 1;
        }
        fn show_instructions(&mut self, text: &str) {
            self.instructions = Some(text.to_string());
        }
        fn hide_instructions(&mut self) {
            self.instructions = None;
        }
    }
}
