//! Per-frame simulation tick
//!
//! One tick is an atomic pass: integrate the player and camera, drift the
//! clouds, maybe spawn, resolve overlaps, prune the stale, then advance the
//! victory sequence and the difficulty ramp. The sim never touches the
//! keyboard; it consumes a [`TickInput`] snapshot built by the front end.

use glam::Vec2;
use rand::Rng;

use super::state::{GamePhase, GameState, Heart};
use super::{collision, lifecycle, spawn};
use crate::consts::*;

/// Input command snapshot for a single tick
///
/// Movement is level-triggered (held state read each tick); `jump`,
/// `restart` and `end_run` are edge-triggered by the input adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub restart: bool,
    pub end_run: bool,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    // Terminal phases freeze the final frame
    match state.phase {
        GamePhase::Complete | GamePhase::GameOver => return,
        GamePhase::Running | GamePhase::Won => {}
    }

    if input.end_run {
        log::info!(
            "run ended at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::GameOver;
        return;
    }

    state.time_ticks += 1;

    integrate(state, input);
    lifecycle::drift_clouds(state);
    spawn::run(state);
    collision::resolve(state);
    lifecycle::prune(state);
    reunion(state);

    let ramp_interval = state.tuning.difficulty.interval;
    if state.phase == GamePhase::Running
        && ramp_interval > 0
        && state.time_ticks % ramp_interval == 0
    {
        state.difficulty += state.tuning.difficulty.step;
        log::debug!("difficulty ramped to {:.2}", state.difficulty);
    }
}

/// Move the player and camera for one tick
fn integrate(state: &mut GameState, input: &TickInput) {
    let physics = state.tuning.physics;
    let player = &mut state.player;

    // Jump impulse fires only from the ground
    if input.jump && player.grounded && !player.jumping {
        player.vel.y = physics.jump_impulse;
        player.jumping = true;
        player.grounded = false;
    }

    // Horizontal: accelerate toward the cap, or decay to a stop
    if input.move_right {
        player.vel.x = (player.vel.x + physics.walk_accel).min(physics.max_speed);
    } else if input.move_left {
        player.vel.x = (player.vel.x - physics.walk_accel).max(-physics.max_speed);
    } else {
        player.vel.x *= physics.friction;
        if player.vel.x.abs() < physics.stop_threshold {
            player.vel.x = 0.0;
        }
    }

    let new_x = player.pos.x + player.vel.x;
    let clamped = collision::clamp_horizontal(player, new_x, &state.barrels);
    if clamped != new_x {
        player.vel.x = 0.0;
    }
    player.pos.x = clamped.max(0.0);

    state.camera.follow(player.pos.x);

    // Vertical: gravity only while airborne
    if !player.grounded {
        player.vel.y += physics.gravity;
    }
    player.pos.y += player.vel.y;

    // Landing resolution: barrel tops first, then the ground line
    if !collision::try_land_on_barrel(player, &state.barrels) {
        if player.pos.y >= GROUND_Y {
            player.pos.y = GROUND_Y;
            player.vel.y = 0.0;
            player.grounded = true;
            player.jumping = false;
        } else {
            player.grounded = false;
        }
    }
}

/// Victory sequence: drift the hearts, maybe spawn one, and finish the run
/// once the sheep reaches mama.
fn reunion(state: &mut GameState) {
    if state.phase != GamePhase::Won {
        return;
    }

    // Hearts rise and fade out on independent lifetimes
    for heart in &mut state.hearts {
        heart.pos.y -= heart.rise_speed;
        heart.opacity -= HEART_FADE;
    }
    state.hearts.retain(|h| h.opacity > 0.0);

    let Some(mama) = state.mama else { return };

    if state.rng.random_bool(state.tuning.heart_chance) {
        let mid = (state.player.pos + mama.pos) / 2.0;
        let jitter = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * 100.0,
            (state.rng.random::<f32>() - 0.5) * 50.0,
        );
        state.hearts.push(Heart {
            pos: mid + jitter,
            size: 8.0 + state.rng.random_range(0.0..8.0),
            rise_speed: 0.5 + state.rng.random_range(0.0..1.0),
            opacity: 1.0,
        });
    }

    if let Some(win) = state.tuning.win {
        if (state.player.pos.x - mama.pos.x).abs() < win.reunion_distance {
            log::info!(
                "reunited with mama at tick {}; final score {}",
                state.time_ticks,
                state.score
            );
            state.phase = GamePhase::Complete;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Apple, Barrel};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn held_right() -> TickInput {
        TickInput {
            move_right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_blocked_at_barrel_near_edge() {
        let mut state = GameState::new(1, Tuning::default());
        state.player.pos.x = 480.0;
        state.player.vel.x = state.tuning.physics.max_speed;
        state.barrels.push(Barrel {
            pos: Vec2::new(500.0, BARREL_Y),
        });

        tick(&mut state, &held_right());
        assert!(state.player.pos.x <= 500.0 - PLAYER_W);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_falling_player_lands_on_ground_line() {
        let mut state = GameState::new(1, Tuning::default());
        state.player.pos.y = GROUND_Y - 1.0;
        state.player.vel.y = 5.0;
        state.player.grounded = false;
        state.player.jumping = true;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.pos.y, GROUND_Y);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(state.player.grounded);
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_jump_only_fires_from_the_ground() {
        let mut state = GameState::new(1, Tuning::default());
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        tick(&mut state, &jump);
        assert!(!state.player.grounded);
        assert!(state.player.jumping);
        let airborne_vel = state.player.vel.y;

        // A second jump press mid-air must not re-impulse
        tick(&mut state, &jump);
        assert!(state.player.vel.y > airborne_vel);
    }

    #[test]
    fn test_released_keys_decay_velocity_to_zero() {
        let mut state = GameState::new(1, Tuning::default());
        for _ in 0..20 {
            tick(&mut state, &held_right());
        }
        assert_eq!(state.player.vel.x, state.tuning.physics.max_speed);

        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_restart_equals_fresh_state() {
        let tuning = Tuning::default();
        let mut state = GameState::new(77, tuning.clone());
        for i in 0..500 {
            let input = TickInput {
                move_right: true,
                jump: i % 60 == 0,
                ..Default::default()
            };
            tick(&mut state, &input);
        }
        assert!(state.time_ticks > 0);

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &restart);
        assert_eq!(state, GameState::new(77, tuning));
    }

    #[test]
    fn test_determinism_same_seed_same_script() {
        let mut a = GameState::new(99, Tuning::default());
        let mut b = GameState::new(99, Tuning::default());
        for i in 0..600u32 {
            let input = TickInput {
                move_right: i % 3 != 0,
                move_left: i % 7 == 0,
                jump: i % 45 == 0,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_difficulty_ramps_on_interval() {
        let mut state = GameState::new(1, Tuning::default());
        let ramp = state.tuning.difficulty;
        for _ in 0..ramp.interval {
            tick(&mut state, &TickInput::default());
        }
        assert!((state.difficulty - (ramp.initial + ramp.step)).abs() < 1e-5);
    }

    #[test]
    fn test_game_over_freezes_the_sim() {
        let mut state = GameState::new(1, Tuning::default());
        let end = TickInput {
            end_run: true,
            ..Default::default()
        };
        tick(&mut state, &end);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen_at = state.time_ticks;
        for _ in 0..10 {
            tick(&mut state, &held_right());
        }
        assert_eq!(state.time_ticks, frozen_at);

        // Restart thaws it
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_won_phase_freezes_collection_but_not_movement() {
        let mut state = GameState::new(1, Tuning::default());
        state.trigger_victory();
        state.apples.push(Apple {
            pos: state.player.pos,
            collected: false,
        });

        let x_before = state.player.pos.x;
        for _ in 0..30 {
            tick(&mut state, &held_right());
        }
        // Still walking toward mama, but the overlapping apple stays uncollected
        assert!(state.player.pos.x > x_before);
        assert_eq!(state.apples_collected, 0);
        assert_eq!(state.apples.len(), 1);
    }

    #[test]
    fn test_reaching_mama_completes_the_run() {
        let mut state = GameState::new(1, Tuning::default());
        state.player.pos.x = 2000.0;
        state.trigger_victory();

        // Walk right until within reunion distance of mama (400 units ahead)
        for _ in 0..2000 {
            tick(&mut state, &held_right());
            if state.phase == GamePhase::Complete {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::Complete);
    }

    #[test]
    fn test_hearts_fade_out_and_die() {
        let mut state = GameState::new(1, Tuning::default());
        state.trigger_victory();
        state.hearts.push(Heart {
            pos: Vec2::new(100.0, 100.0),
            size: 10.0,
            rise_speed: 1.0,
            opacity: HEART_FADE / 2.0,
        });

        tick(&mut state, &TickInput::default());
        assert!(state.hearts.iter().all(|h| h.opacity > 0.0));

        // The shower keeps hearts bounded by their lifetime
        for _ in 0..300 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.hearts.len() <= (1.0 / HEART_FADE) as usize);
    }

    proptest! {
        #[test]
        fn prop_player_and_camera_never_negative(
            seed in any::<u64>(),
            script in prop::collection::vec(0u8..8, 1..300),
        ) {
            let mut state = GameState::new(seed, Tuning::default());
            for step in script {
                let input = TickInput {
                    move_left: step & 1 != 0,
                    move_right: step & 2 != 0,
                    jump: step & 4 != 0,
                    ..Default::default()
                };
                tick(&mut state, &input);
                prop_assert!(state.player.pos.x >= 0.0);
                prop_assert!(state.camera.offset >= 0.0);
            }
        }

        #[test]
        fn prop_mud_splotches_never_exceed_cap(seed in any::<u64>(), ticks in 1usize..400) {
            let mut state = GameState::new(seed, Tuning::default());
            // Park the sheep in a puddle wide enough to guarantee contact
            state.puddles.push(crate::sim::state::Puddle {
                pos: Vec2::new(0.0, PUDDLE_Y),
                size: Vec2::new(10_000.0, 25.0),
            });
            for _ in 0..ticks {
                tick(&mut state, &TickInput::default());
                prop_assert!(state.player.splotches.len() <= MAX_MUD_SPLOTCHES);
                prop_assert!(state.player.muddiness as usize >= state.player.splotches.len());
            }
        }
    }
}
