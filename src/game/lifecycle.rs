//! Click-driven start/reset.

use super::GameState;
use crate::config::INSTRUCTIONS;
use crate::render::Hud;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Active,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Started,
    Reset,
}

impl GameState {
    /// First click starts the game; any click while active resets to idle.
    pub fn click<H: Hud>(&mut self, hud: &mut H) -> LifecycleEvent {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Active;
                hud.hide_instructions();
                log::info!("game started ({} profile)", self.config.profile.as_str());
                LifecycleEvent::Started
            }
            Phase::Active => {
                self.reset(hud);
                LifecycleEvent::Reset
            }
        }
    }

    /// Back to idle with score, entities and ship restored. Spawn timers
    /// keep their last firing time.
    pub fn reset<H: Hud>(&mut self, hud: &mut H) {
        log::info!("game reset at score {}", self.score);
        self.phase = Phase::Idle;
        self.score = 0;
        self.collectibles.clear();
        self.particles.clear();
        self.player.reset(&self.config, self.viewport);
        hud.show_score(0);
        hud.show_instructions(INSTRUCTIONS);
    }
}
