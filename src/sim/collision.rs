//! Axis-aligned collision detection and response
//!
//! Everything here is the standard 4-inequality rectangle test; the
//! interesting part is the response rules: barrels block sideways but carry
//! the player on top, apples are collected-and-removed in one step, puddles
//! muddy the sheep without ever blocking.

use glam::Vec2;
use rand::Rng;

use super::state::{Barrel, GamePhase, GameState, Player, Puddle};
use crate::consts::*;

/// An axis-aligned bounding rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// World x of the trailing (right) edge
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// World y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Standard 4-inequality overlap test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Clamp a candidate horizontal position against every live barrel.
///
/// A player whose bottom edge is within [`LANDING_TOLERANCE`] of a barrel's
/// top is treated as standing on it and passes freely; otherwise the position
/// snaps to the barrel's near edge in the direction of travel.
pub fn clamp_horizontal(player: &Player, new_x: f32, barrels: &[Barrel]) -> f32 {
    for barrel in barrels {
        let b = barrel.aabb();
        let would_overlap = new_x < b.right()
            && new_x + PLAYER_W > b.pos.x
            && player.pos.y < b.bottom()
            && player.bottom() > b.pos.y;
        if would_overlap {
            let on_top = player.bottom() <= b.pos.y + LANDING_TOLERANCE;
            if !on_top {
                return if player.vel.x > 0.0 {
                    b.pos.x - PLAYER_W
                } else {
                    b.right()
                };
            }
        }
    }
    new_x
}

/// Landing check against barrel tops. A falling player whose bottom edge is
/// within tolerance of a barrel top snaps onto it, zeroed and grounded.
/// Returns whether any barrel caught the player.
pub fn try_land_on_barrel(player: &mut Player, barrels: &[Barrel]) -> bool {
    let mut landed = false;
    for barrel in barrels {
        let b = barrel.aabb();
        if player.pos.x < b.right()
            && player.pos.x + PLAYER_W > b.pos.x
            && player.bottom() >= b.pos.y
            && player.bottom() <= b.pos.y + LANDING_TOLERANCE
            && player.vel.y >= 0.0
        {
            player.pos.y = b.pos.y - PLAYER_H;
            player.vel.y = 0.0;
            player.grounded = true;
            player.jumping = false;
            landed = true;
        }
    }
    landed
}

/// Is the player's bottom edge inside this puddle's splash band?
pub fn puddle_contact(player: &Player, puddle: &Puddle) -> bool {
    player.pos.x < puddle.pos.x + puddle.size.x
        && player.pos.x + PLAYER_W > puddle.pos.x
        && player.bottom() >= puddle.pos.y
        && player.bottom() <= puddle.pos.y + puddle.size.y + PUDDLE_CONTACT_SLACK
}

/// Resolve player-vs-entity overlaps for one tick: apple collection (with the
/// win trigger) and puddle mud. Barrel blocking and landing run inside the
/// integrator since they shape the position update itself.
pub fn resolve(state: &mut GameState) {
    // Apple collection; frozen once the reunion sequence starts
    if state.phase == GamePhase::Running {
        let player_box = state.player.aabb();
        let mut collected = 0u32;
        state.apples.retain_mut(|apple| {
            if !apple.collected && player_box.overlaps(&apple.aabb()) {
                // Removal is the collection event; there is no despawn path
                // for a collected apple.
                apple.collected = true;
                collected += 1;
                false
            } else {
                true
            }
        });
        if collected > 0 {
            state.apples_collected += collected;
            state.score += state.tuning.scoring.apple * collected as u64;
            log::debug!(
                "collected {} apple(s), total {}",
                collected,
                state.apples_collected
            );
            if let Some(win) = state.tuning.win {
                if state.apples_collected >= win.apple_goal {
                    state.trigger_victory();
                }
            }
        }
    }

    // Puddles: probabilistic mud, no blocking, no despawn
    let mud_chance = state.tuning.mud_chance;
    for puddle in &state.puddles {
        if puddle_contact(&state.player, puddle) && state.rng.random_bool(mud_chance) {
            state.player.add_mud_splotch(&mut state.rng);
        }
    }
}
