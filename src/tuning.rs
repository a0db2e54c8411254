//! Data-driven game balance
//!
//! Every magic number that shapes gameplay lives here rather than inline in the
//! simulation: the spawner's per-class schedule, player physics, scoring, and
//! the optional win condition. Defaults reproduce the classic balance; a JSON
//! file can override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::{BARREL_Y, PUDDLE_Y, VIEW_H};

/// Spawnable entity classes driven by the spawn table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnClass {
    Barrel,
    Apple,
    Puddle,
}

impl SpawnClass {
    pub const ALL: [SpawnClass; 3] = [SpawnClass::Barrel, SpawnClass::Apple, SpawnClass::Puddle];

    /// Stable index into per-class timer arrays
    pub fn index(self) -> usize {
        match self {
            SpawnClass::Barrel => 0,
            SpawnClass::Apple => 1,
            SpawnClass::Puddle => 2,
        }
    }
}

/// Vertical placement policy for a spawned entity's top edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VerticalRule {
    /// Fixed top edge (ground-level classes)
    Fixed(f32),
    /// Elevated band: top = base - uniform(0..range)
    Band { base: f32, range: f32 },
}

/// Spawn schedule for one entity class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRule {
    /// Minimum ticks between spawns of this class
    pub base_interval: f32,
    /// Uniform random extension of the interval, in ticks
    pub jitter: f32,
    /// Uniform random horizontal offset past the right viewport edge
    pub lead: f32,
    /// Vertical placement policy
    pub vertical: VerticalRule,
}

/// Per-class spawn schedule table, enumerated once and consumed uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTable {
    pub barrel: SpawnRule,
    pub apple: SpawnRule,
    pub puddle: SpawnRule,
}

impl SpawnTable {
    pub fn rule(&self, class: SpawnClass) -> &SpawnRule {
        match class {
            SpawnClass::Barrel => &self.barrel,
            SpawnClass::Apple => &self.apple,
            SpawnClass::Puddle => &self.puddle,
        }
    }
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self {
            barrel: SpawnRule {
                base_interval: 140.0,
                jitter: 80.0,
                lead: 200.0,
                vertical: VerticalRule::Fixed(BARREL_Y),
            },
            apple: SpawnRule {
                base_interval: 180.0,
                jitter: 120.0,
                lead: 300.0,
                vertical: VerticalRule::Band {
                    base: VIEW_H - 120.0,
                    range: 100.0,
                },
            },
            puddle: SpawnRule {
                base_interval: 300.0,
                jitter: 200.0,
                lead: 400.0,
                vertical: VerticalRule::Fixed(PUDDLE_Y),
            },
        }
    }
}

/// Player movement numbers, all per-tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Downward acceleration while airborne
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_impulse: f32,
    /// Horizontal acceleration while a direction is held
    pub walk_accel: f32,
    /// Horizontal speed cap
    pub max_speed: f32,
    /// Multiplicative decay when no direction is held
    pub friction: f32,
    /// Speeds below this snap to zero
    pub stop_threshold: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -16.0,
            walk_accel: 0.5,
            max_speed: 5.0,
            friction: 0.8,
            stop_threshold: 0.1,
        }
    }
}

/// Score awards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Awarded when a barrel is left behind
    pub barrel_pass: u64,
    /// Awarded per apple collected
    pub apple: u64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            barrel_pass: 10,
            apple: 50,
        }
    }
}

/// Difficulty ramp: the scalar starts at `initial` and gains `step`
/// every `interval` ticks while the run is live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyRamp {
    pub initial: f32,
    pub interval: u64,
    pub step: f32,
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self {
            initial: 2.0,
            interval: 800,
            step: 0.15,
        }
    }
}

/// Win condition: collect `apple_goal` apples, then walk within
/// `reunion_distance` of the mama-sheep landmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinRules {
    pub apple_goal: u32,
    pub reunion_distance: f32,
}

impl Default for WinRules {
    fn default() -> Self {
        Self {
            apple_goal: 20,
            reunion_distance: 100.0,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: Physics,
    pub spawn: SpawnTable,
    pub scoring: Scoring,
    pub difficulty: DifficultyRamp,
    /// Per-tick chance of picking up a mud splotch while in a puddle
    pub mud_chance: f64,
    /// Per-tick chance of a heart particle during the reunion sequence
    pub heart_chance: f64,
    /// `None` = endless variant (no victory sequence)
    pub win: Option<WinRules>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            spawn: SpawnTable::default(),
            scoring: Scoring::default(),
            difficulty: DifficultyRamp::default(),
            mud_chance: 0.3,
            heart_chance: 0.1,
            // The classic build ships the victory variant; endless mode is
            // an override away (`"win": null`).
            win: Some(WinRules::default()),
        }
    }
}

impl Tuning {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load a tuning override file, falling back to defaults if it is
    /// missing or malformed. A bad file is a warning, never a crash.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::from_json(&text) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.spawn.barrel.base_interval, 140.0);
        assert_eq!(tuning.spawn.rule(SpawnClass::Puddle).jitter, 200.0);
        assert_eq!(tuning.scoring.apple, 50);
        assert_eq!(tuning.win, Some(WinRules::default()));
        assert!(tuning.physics.jump_impulse < 0.0);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let tuning =
            Tuning::from_json(r#"{"win": {"apple_goal": 5, "reunion_distance": 100.0}}"#).unwrap();
        assert_eq!(tuning.win.unwrap().apple_goal, 5);
        assert_eq!(tuning.physics, Physics::default());
        assert_eq!(tuning.mud_chance, 0.3);
    }

    #[test]
    fn test_endless_variant_override() {
        let tuning = Tuning::from_json(r#"{"win": null}"#).unwrap();
        assert_eq!(tuning.win, None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{nope").is_err());
    }
}
