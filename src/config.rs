//! Game tuning and profile selection.
//!
//! Two rendering/collision profiles share one core: `Sprite` draws image
//! assets with exhaust particles behind the ship, `Vector` draws primitive
//! shapes and has no particles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Logical canvas height; width follows the window.
pub const CANVAS_HEIGHT: f64 = 350.0;
/// Stars generated once at startup and kept for the life of the page.
pub const STAR_COUNT: usize = 150;
/// Duration of the score pulse class in the DOM.
pub const PULSE_MS: i32 = 200;
/// Overlay text shown while idle.
pub const INSTRUCTIONS: &str = "Click anywhere to start • Use arrow keys or WASD to move";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Profile {
    #[default]
    Sprite,
    Vector,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Sprite => "sprite",
            Profile::Vector => "vector",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sprite" | "image" => Some(Profile::Sprite),
            "vector" | "shape" => Some(Profile::Vector),
            _ => None,
        }
    }
}

/// Every tunable the game core reads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub profile: Profile,

    // === Player ===
    /// Rest x position; rest y is the vertical centre of the viewport.
    pub player_start_x: f64,
    pub player_width: f64,
    pub player_height: f64,
    /// Pixels per frame while a movement key is held.
    pub player_speed: f64,

    // === Collectibles ===
    /// Diameter; the collision radius is half of it.
    pub collectible_size: f64,
    pub collectible_speed: f64,
    /// Vertical inset from both edges for spawn y.
    pub spawn_margin: f64,
    pub collectible_interval_ms: f64,
    pub reward: u32,

    // === Exhaust particles ===
    pub particles: bool,
    pub particle_size: f64,
    pub particle_speed: f64,
    pub particle_fade: f64,
    /// Full span of the vertical jitter around the ship centre.
    pub particle_jitter: f64,
    pub particle_interval_ms: f64,

    /// Entities with x below this are culled.
    pub cull_x: f64,
}

impl GameConfig {
    pub fn sprite() -> Self {
        Self {
            profile: Profile::Sprite,
            player_start_x: 100.0,
            player_width: 90.0,
            player_height: 90.0,
            player_speed: 5.0,
            collectible_size: 40.0,
            collectible_speed: 2.0,
            spawn_margin: 40.0,
            collectible_interval_ms: 1500.0,
            reward: 10,
            particles: true,
            particle_size: 45.0,
            particle_speed: 3.0,
            particle_fade: 0.02,
            particle_jitter: 20.0,
            particle_interval_ms: 250.0,
            cull_x: -50.0,
        }
    }

    pub fn vector() -> Self {
        Self {
            profile: Profile::Vector,
            player_width: 30.0,
            player_height: 30.0,
            collectible_size: 20.0,
            particles: false,
            cull_x: -20.0,
            ..Self::sprite()
        }
    }

    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Sprite => Self::sprite(),
            Profile::Vector => Self::vector(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::sprite()
    }
}
