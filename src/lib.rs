//! Lamb Dash - a side-scrolling sheep runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `render`: macroquad drawing from read-only state snapshots
//! - `hud`: score readout and terminal-state overlays
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical viewport dimensions (world units; pixels at 1x)
    pub const VIEW_W: f32 = 800.0;
    pub const VIEW_H: f32 = 400.0;

    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_H: f32 = 30.0;

    /// Player (sheep) sprite size
    pub const PLAYER_W: f32 = 60.0;
    pub const PLAYER_H: f32 = 50.0;
    /// Player spawn position (top-left corner)
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    /// y of the player's top edge when standing on the ground
    pub const GROUND_Y: f32 = VIEW_H - GROUND_H - PLAYER_H;

    /// Barrel obstacle size; barrels sit on the ground strip
    pub const BARREL_W: f32 = 40.0;
    pub const BARREL_H: f32 = 50.0;
    pub const BARREL_Y: f32 = VIEW_H - GROUND_H - BARREL_H;

    /// Apple pickup size
    pub const APPLE_SIZE: f32 = 30.0;

    /// Puddle top edge (puddles overlap the ground strip slightly)
    pub const PUDDLE_Y: f32 = VIEW_H - 50.0;
    /// Extra depth below a puddle's band that still counts as contact
    pub const PUDDLE_CONTACT_SLACK: f32 = 5.0;

    /// Vertical tolerance for standing on / landing atop a barrel
    pub const LANDING_TOLERANCE: f32 = 10.0;

    /// Entities whose trailing edge falls this far behind the camera are pruned
    pub const PRUNE_MARGIN: f32 = 100.0;

    /// Camera keeps the player a third of the viewport from the left edge
    pub const CAMERA_LEAD: f32 = VIEW_W / 3.0;
    /// Exponential smoothing factor for camera follow (per tick)
    pub const CAMERA_SMOOTHING: f32 = 0.1;

    /// Mud splotch cap on the player sprite (oldest evicted first)
    pub const MAX_MUD_SPLOTCHES: usize = 15;

    /// Number of recycled background clouds
    pub const CLOUD_COUNT: usize = 5;

    /// Heart particle opacity loss per tick during the reunion sequence
    pub const HEART_FADE: f32 = 0.01;
}
