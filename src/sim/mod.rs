//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Driven entirely by explicit calls (countdown, spawn, frame) so tests can
//!   step simulated time without real timers

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{
    BONUS_LABEL, ENEMY_LINES, FallingObject, GameEvent, GamePhase, GameState, LEFT_KEYS,
    ObjectKind, RIGHT_KEYS,
};
pub use tick::{
    countdown_tick, end, final_message, frame_tick, reset, resize, spawn_object, start,
};
