//! Player/collectible hit tests and off-screen culling.

use super::entities::{Collectible, Player};

/// Tally of one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sweep {
    pub collected: u32,
    pub culled: u32,
}

pub fn hits(player: &Player, c: &Collectible) -> bool {
    let dx = player.x - c.x;
    let dy = player.y - c.y;
    dx.hypot(dy) < player.radius() + c.radius()
}

/// Remove every collectible touching the player or left of `cull_x`.
///
/// `retain` visits each element exactly once and compacts in place, so a
/// removal never skips or revisits a neighbour. A hit takes precedence over
/// the cull for the same element.
pub fn sweep(player: &Player, collectibles: &mut Vec<Collectible>, cull_x: f64) -> Sweep {
    let mut out = Sweep::default();
    collectibles.retain(|c| {
        if hits(player, c) {
            out.collected += 1;
            false
        } else if c.x < cull_x {
            out.culled += 1;
            false
        } else {
            true
        }
    });
    out
}
