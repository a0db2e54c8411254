//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only, owned by the game state
//! - No rendering or platform dependencies

pub mod collision;
pub mod lifecycle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    Apple, Barrel, Camera, Cloud, GamePhase, GameState, Heart, Landmark, MudSplotch, Player, Puddle,
};
pub use tick::{TickInput, tick};
