//! Session lifecycle and the three recurring callbacks
//!
//! The shell owns the real timers; this module owns what happens when they
//! fire. `countdown_tick` runs at 1 Hz, `spawn_object` on the spawn cadence,
//! `frame_tick` once per animation frame. All three are no-ops outside a
//! running session, so a stale callback can never mutate a finished game.

use glam::Vec2;
use rand::Rng;

use super::state::{
    BONUS_LABEL, ENEMY_LINES, FallingObject, GameEvent, GamePhase, GameState, ObjectKind,
};
use crate::consts::*;

/// Return the state to its pre-session values. No-op while running.
pub fn reset(state: &mut GameState) {
    if state.is_running() {
        return;
    }
    state.score = 0;
    state.lives = START_LIVES;
    state.time_left = SESSION_SECS;
    state.held.clear();
    state.objects.clear();
    state.clear_events();
    state.center_player();
}

/// Begin a session. No-op while one is already running.
pub fn start(state: &mut GameState) {
    if state.is_running() {
        return;
    }
    reset(state);
    state.phase = GamePhase::Running;
    state.push_event(GameEvent::Started);
}

/// End the running session. No-op otherwise, so a double trigger can never
/// produce two terminal messages.
pub fn end(state: &mut GameState, won: bool) {
    if !state.is_running() {
        return;
    }
    state.phase = GamePhase::Over { won };
    state.push_event(GameEvent::Ended { won });
}

/// One second elapsed. Ends the session with a win at zero.
pub fn countdown_tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.time_left = state.time_left.saturating_sub(1);
    if state.time_left == 0 {
        end(state, true);
    }
}

/// Create one falling object just above the visible top edge.
pub fn spawn_object(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    let kind = if state.rng.random_bool(BONUS_CHANCE) {
        ObjectKind::Bonus
    } else {
        ObjectKind::Enemy
    };

    let limit = (state.arena.x - OBJECT_WIDTH).max(0.0);
    let x = if limit > 0.0 {
        state.rng.random_range(0.0..limit)
    } else {
        0.0
    };
    let speed = match kind {
        ObjectKind::Bonus => state.rng.random_range(BONUS_SPEED_MIN..BONUS_SPEED_MAX),
        ObjectKind::Enemy => state.rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
    };
    let label = match kind {
        ObjectKind::Bonus => BONUS_LABEL,
        ObjectKind::Enemy => ENEMY_LINES[state.rng.random_range(0..ENEMY_LINES.len())],
    };

    let id = state.next_object_id();
    state.objects.push(FallingObject {
        id,
        kind,
        pos: Vec2::new(x, -OBJECT_HEIGHT),
        speed,
        label,
    });
    state.push_event(GameEvent::Spawned { id });
}

/// Advance one animation frame: move the player, advance every object,
/// resolve collisions and exits, queue the matching presentation events.
///
/// Collision wins over the off-screen check: an object that overlaps the
/// player on the same frame it would exit is a collision, not a miss. Each
/// removed object scores or damages exactly once.
pub fn frame_tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    // Both directions may be held at once; the deltas cancel.
    if state.left_held() {
        state.player_x -= PLAYER_SPEED;
    }
    if state.right_held() {
        state.player_x += PLAYER_SPEED;
    }
    state.clamp_player();

    let player_box = state.player_rect();
    let exit_line = state.arena.y + EXIT_MARGIN;

    let mut objects = std::mem::take(&mut state.objects);
    objects.retain_mut(|obj| {
        // A fatal hit mid-pass freezes the rest of the field; the shell
        // tears the leftovers down at the next session start.
        if !state.is_running() {
            return true;
        }

        obj.pos.y += obj.speed;

        if player_box.intersects(&obj.rect()) {
            match obj.kind {
                ObjectKind::Bonus => {
                    state.score += BONUS_SCORE;
                    state.push_event(GameEvent::BonusCollected { id: obj.id });
                }
                ObjectKind::Enemy => {
                    state.lives = state.lives.saturating_sub(1);
                    state.push_event(GameEvent::PlayerHit { id: obj.id });
                    if state.lives == 0 {
                        end(state, false);
                    }
                }
            }
            return false;
        }

        if obj.pos.y > exit_line {
            match obj.kind {
                ObjectKind::Enemy => {
                    state.score += DODGE_SCORE;
                    state.push_event(GameEvent::Dodged { id: obj.id });
                }
                ObjectKind::Bonus => {
                    state.push_event(GameEvent::Expired { id: obj.id });
                }
            }
            return false;
        }

        true
    });
    state.objects = objects;
}

/// The arena changed size. Recenter while idle, re-clamp while running.
pub fn resize(state: &mut GameState, width: f32, height: f32) {
    state.arena = Vec2::new(width, height);
    if state.is_running() {
        state.clamp_player();
    } else {
        state.center_player();
    }
}

/// Terminal status line: headline, final score, and a tip.
pub fn final_message(won: bool, score: u32) -> String {
    let headline = if won {
        "You held out for the full 60 seconds!"
    } else {
        "Worn down by the spin..."
    };
    let tip = if won {
        "You kept your receipts. Time to negotiate."
    } else {
        "Don't give up. Gather more paperwork and try again."
    };
    format!("{headline} Final score: {score}. {tip}")
}
