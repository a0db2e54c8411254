//! Game state and core simulation types
//!
//! One `GameState` owns everything a tick needs: the player, the camera, all
//! live entity lists, the seeded RNG, and the balance table. Subsystems take
//! it by reference; there is no ambient state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Normal play: spawning, scoring and physics all live
    Running,
    /// Apple goal reached: spawning and collection frozen, reunion sequence playing
    Won,
    /// Player reached mama; final frame frozen under the victory overlay
    Complete,
    /// Run ended early; final frame frozen under the game-over overlay
    GameOver,
}

/// A mud splotch stuck to the player sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MudSplotch {
    /// Offset from the player's top-left corner, within sprite bounds
    pub offset: Vec2,
    pub size: f32,
}

/// The player-controlled sheep
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner, world coordinates
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
    pub jumping: bool,
    /// Total splotches ever picked up this run (not capped)
    pub muddiness: u32,
    /// Visible splotches, oldest first, capped at [`MAX_MUD_SPLOTCHES`]
    pub splotches: Vec<MudSplotch>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, GROUND_Y),
            vel: Vec2::ZERO,
            grounded: true,
            jumping: false,
            muddiness: 0,
            splotches: Vec::new(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(PLAYER_W, PLAYER_H))
    }

    /// World y of the player's bottom edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + PLAYER_H
    }

    /// Stick a splotch at a random spot on the sprite, evicting the oldest
    /// once the cap is hit.
    pub fn add_mud_splotch(&mut self, rng: &mut Pcg32) {
        let splotch = MudSplotch {
            offset: Vec2::new(
                15.0 + rng.random_range(0.0..40.0),
                10.0 + rng.random_range(0.0..30.0),
            ),
            size: 2.0 + rng.random_range(0.0..4.0),
        };
        self.splotches.push(splotch);
        self.muddiness += 1;
        if self.splotches.len() > MAX_MUD_SPLOTCHES {
            self.splotches.remove(0);
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A barrel obstacle, sitting on the ground strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barrel {
    pub pos: Vec2,
}

impl Barrel {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(BARREL_W, BARREL_H))
    }
}

/// An apple pickup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apple {
    pub pos: Vec2,
    /// Set in the instant of collection; collected apples leave the list
    /// immediately, so live apples always have this false.
    pub collected: bool,
}

impl Apple {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(APPLE_SIZE))
    }
}

/// A mud puddle hazard. Inert terrain: never blocks, never despawns on contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puddle {
    pub pos: Vec2,
    pub size: Vec2,
}

/// A background cloud. Screen-space decoration on a recycled pool: exiting the
/// left edge wraps it back past the right edge at a new height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Cloud {
    fn spawn(rng: &mut Pcg32, x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 20.0 + rng.random_range(0.0..100.0)),
            size: Vec2::new(
                60.0 + rng.random_range(0.0..40.0),
                30.0 + rng.random_range(0.0..20.0),
            ),
            speed: 0.5 + rng.random_range(0.0..0.5),
        }
    }

    /// Wrap back past the right viewport edge with a fresh height
    pub fn recycle(&mut self, rng: &mut Pcg32) {
        self.pos.x = VIEW_W + rng.random_range(0.0..200.0);
        self.pos.y = 20.0 + rng.random_range(0.0..100.0);
    }
}

/// A floating heart particle from the reunion sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heart {
    pub pos: Vec2,
    pub size: f32,
    pub rise_speed: f32,
    /// 1.0 at spawn, faded by [`HEART_FADE`] per tick, removed at 0
    pub opacity: f32,
}

/// A one-shot scenery entity from the victory trigger (mama sheep, finish flag)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub pos: Vec2,
}

/// Horizontal scroll camera, smoothed toward the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: f32,
}

impl Camera {
    /// Move a fraction of the remaining distance toward the follow target,
    /// never scrolling left of the world origin.
    pub fn follow(&mut self, player_x: f32) {
        let target = player_x - CAMERA_LEAD;
        self.offset += (target - self.offset) * CAMERA_SMOOTHING;
        if self.offset < 0.0 {
            self.offset = 0.0;
        }
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub apples_collected: u32,
    /// Ramped scalar, surfaced to the HUD
    pub difficulty: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub camera: Camera,
    pub barrels: Vec<Barrel>,
    pub apples: Vec<Apple>,
    pub puddles: Vec<Puddle>,
    pub clouds: Vec<Cloud>,
    pub hearts: Vec<Heart>,
    pub mama: Option<Landmark>,
    pub finish_line: Option<Landmark>,
    /// Tick of the most recent spawn, indexed by `SpawnClass::index()`
    pub last_spawn: [u64; 3],
}

impl GameState {
    /// Create a fresh run with the given seed and balance table
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| {
                let x = rng.random_range(0.0..VIEW_W);
                Cloud::spawn(&mut rng, x)
            })
            .collect();

        Self {
            seed,
            rng,
            difficulty: tuning.difficulty.initial,
            tuning,
            phase: GamePhase::Running,
            score: 0,
            apples_collected: 0,
            time_ticks: 0,
            player: Player::new(),
            camera: Camera { offset: 0.0 },
            barrels: Vec::new(),
            apples: Vec::new(),
            puddles: Vec::new(),
            clouds,
            hearts: Vec::new(),
            mama: None,
            finish_line: None,
            last_spawn: [0; 3],
        }
    }

    /// Full in-memory reinitialization: restarting equals a fresh run
    /// with the same seed and tuning.
    pub fn restart(&mut self) {
        log::info!("restarting run (seed {})", self.seed);
        *self = Self::new(self.seed, self.tuning.clone());
    }

    /// Apple goal reached: freeze spawning/collection, plant mama and the
    /// finish flag ahead of the player, start the heart shower.
    pub fn trigger_victory(&mut self) {
        log::info!(
            "apple goal reached at tick {} (score {})",
            self.time_ticks,
            self.score
        );
        self.phase = GamePhase::Won;
        self.mama = Some(Landmark {
            pos: Vec2::new(self.player.pos.x + 400.0, VIEW_H - 100.0),
        });
        self.finish_line = Some(Landmark {
            pos: Vec2::new(self.player.pos.x + 350.0, VIEW_H - GROUND_H),
        });
    }
}
