//! Paper Trail - a dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, scoring)
//! - `ui`: DOM rendering adapter (wasm only)
//!
//! The simulation never touches the DOM; the adapter never makes gameplay
//! decisions. The shell in `main.rs` wires the two together with browser
//! timers and drains the sim's event queue into the adapter.

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod ui;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of a session
    pub const START_LIVES: u8 = 3;
    /// Session length in seconds
    pub const SESSION_SECS: u32 = 60;

    /// Countdown cadence (ms)
    pub const COUNTDOWN_INTERVAL_MS: u32 = 1_000;
    /// Spawn cadence (ms)
    pub const SPAWN_INTERVAL_MS: u32 = 650;

    /// Player movement per frame while a direction key is held (px)
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Player sprite dimensions (px)
    pub const PLAYER_WIDTH: f32 = 52.0;
    pub const PLAYER_HEIGHT: f32 = 52.0;
    /// Gap between the player sprite and the arena floor (px)
    pub const PLAYER_FLOOR_GAP: f32 = 16.0;

    /// Falling object dimensions (px)
    pub const OBJECT_WIDTH: f32 = 52.0;
    pub const OBJECT_HEIGHT: f32 = 56.0;
    /// How far past the arena floor an object must fall before removal (px)
    pub const EXIT_MARGIN: f32 = 56.0;

    /// Probability that a spawned object is a bonus
    pub const BONUS_CHANCE: f64 = 0.28;
    /// Score for collecting a bonus
    pub const BONUS_SCORE: u32 = 10;
    /// Score for an enemy that falls past without hitting the player
    pub const DODGE_SCORE: u32 = 2;

    /// Bonus fall speed range (px/frame, half-open)
    pub const BONUS_SPEED_MIN: f32 = 2.8;
    pub const BONUS_SPEED_MAX: f32 = 4.8;
    /// Enemy fall speed range (px/frame, half-open). Wider spread than bonus:
    /// slower floor, faster ceiling.
    pub const ENEMY_SPEED_MIN: f32 = 2.5;
    pub const ENEMY_SPEED_MAX: f32 = 5.3;
}
