//! Entity lifecycle: off-screen pruning and the cloud pool
//!
//! Barrels, apples and puddles are removed once their trailing edge falls
//! [`PRUNE_MARGIN`] behind the camera. A pruned barrel was cleared by the
//! player and pays out; a pruned apple was missed and pays nothing. Clouds
//! never die; they wrap back past the right edge.

use crate::consts::*;

use super::state::GameState;

/// Drop everything the camera has left behind, scoring passed barrels.
pub fn prune(state: &mut GameState) {
    let cutoff = state.camera.offset - PRUNE_MARGIN;

    let before = state.barrels.len();
    state.barrels.retain(|b| b.pos.x + BARREL_W >= cutoff);
    let passed = (before - state.barrels.len()) as u64;
    if passed > 0 {
        state.score += passed * state.tuning.scoring.barrel_pass;
        log::debug!("cleared {} barrel(s), score {}", passed, state.score);
    }

    state.apples.retain(|a| a.pos.x + APPLE_SIZE >= cutoff);
    state.puddles.retain(|p| p.pos.x + p.size.x >= cutoff);
}

/// Drift the cloud pool leftward in screen space, recycling any cloud that
/// fully exits the left edge.
pub fn drift_clouds(state: &mut GameState) {
    for cloud in &mut state.clouds {
        cloud.pos.x -= cloud.speed;
        if cloud.pos.x + cloud.size.x < 0.0 {
            cloud.recycle(&mut state.rng);
        }
    }
}
