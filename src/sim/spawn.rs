//! Time-gated random spawning ahead of the camera
//!
//! Each spawnable class runs an independent timer against its entry in the
//! tuning table. On trigger, one entity is placed a random lead distance past
//! the right viewport edge and the class timer resets to the current tick.

use glam::Vec2;
use rand::Rng;

use super::state::{Apple, Barrel, GamePhase, GameState, Puddle};
use crate::consts::VIEW_W;
use crate::tuning::{SpawnClass, SpawnRule, VerticalRule};

/// Run every class's spawn gate for this tick. Suspended outside of normal
/// play so the reunion stretch stays clear.
pub fn run(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    for class in SpawnClass::ALL {
        let rule = *state.tuning.spawn.rule(class);
        // Jitter is re-rolled on every check; the gate opens on the first
        // tick the elapsed time beats it.
        let jitter = state.rng.random_range(0.0..=rule.jitter);
        let elapsed = (state.time_ticks - state.last_spawn[class.index()]) as f32;
        if elapsed > rule.base_interval + jitter {
            spawn_one(state, class, &rule);
            state.last_spawn[class.index()] = state.time_ticks;
        }
    }
}

fn spawn_one(state: &mut GameState, class: SpawnClass, rule: &SpawnRule) {
    let x = state.camera.offset + VIEW_W + state.rng.random_range(0.0..=rule.lead);
    let y = match rule.vertical {
        VerticalRule::Fixed(top) => top,
        VerticalRule::Band { base, range } => base - state.rng.random_range(0.0..=range),
    };

    match class {
        SpawnClass::Barrel => state.barrels.push(Barrel {
            pos: Vec2::new(x, y),
        }),
        SpawnClass::Apple => state.apples.push(Apple {
            pos: Vec2::new(x, y),
            collected: false,
        }),
        SpawnClass::Puddle => {
            // Puddles vary in footprint as well as placement
            let size = Vec2::new(
                60.0 + state.rng.random_range(0.0..40.0),
                20.0 + state.rng.random_range(0.0..10.0),
            );
            state.puddles.push(Puddle {
                pos: Vec2::new(x, y),
                size,
            });
        }
    }
    log::trace!("spawned {:?} at x={:.0} (tick {})", class, x, state.time_ticks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BARREL_Y, PUDDLE_Y};
    use crate::tuning::Tuning;

    /// Drive only the spawner for `n` ticks
    fn run_ticks(state: &mut GameState, n: u64) {
        for _ in 0..n {
            state.time_ticks += 1;
            run(state);
        }
    }

    #[test]
    fn test_spawns_land_ahead_of_camera_within_lead() {
        let mut state = GameState::new(42, Tuning::default());
        state.camera.offset = 250.0;
        run_ticks(&mut state, 600);

        assert!(!state.barrels.is_empty());
        assert!(!state.apples.is_empty());
        for barrel in &state.barrels {
            assert!(barrel.pos.x >= state.camera.offset + VIEW_W);
            assert_eq!(barrel.pos.y, BARREL_Y);
        }
        let lead = state.tuning.spawn.barrel.lead;
        assert!(state.barrels[0].pos.x <= state.camera.offset + VIEW_W + lead);
    }

    #[test]
    fn test_gate_respects_base_interval() {
        let mut state = GameState::new(7, Tuning::default());
        run_ticks(&mut state, 140);
        // Nothing can clear its gate before its base interval has elapsed
        assert!(state.barrels.is_empty());
        assert!(state.apples.is_empty());
        assert!(state.puddles.is_empty());

        run_ticks(&mut state, 200);
        assert!(!state.barrels.is_empty());
        // Timer reset on trigger
        assert!(state.last_spawn[crate::tuning::SpawnClass::Barrel.index()] > 0);
    }

    #[test]
    fn test_apples_spawn_in_elevated_band() {
        let mut state = GameState::new(9, Tuning::default());
        run_ticks(&mut state, 2000);
        assert!(!state.apples.is_empty());
        for apple in &state.apples {
            assert!(apple.pos.y <= 280.0);
            assert!(apple.pos.y >= 180.0);
            assert!(!apple.collected);
        }
        for puddle in &state.puddles {
            assert_eq!(puddle.pos.y, PUDDLE_Y);
            assert!(puddle.size.x >= 60.0 && puddle.size.x <= 100.0);
        }
    }

    #[test]
    fn test_spawning_suspended_after_victory() {
        let mut state = GameState::new(5, Tuning::default());
        state.trigger_victory();
        run_ticks(&mut state, 2000);
        assert!(state.barrels.is_empty());
        assert!(state.apples.is_empty());
        assert!(state.puddles.is_empty());
    }
}
