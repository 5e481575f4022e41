// Property tests for the simulation invariants.
//
// Drives arbitrary interleavings of the shell's callbacks (key events,
// frames, countdown ticks, spawns, resizes) against the pure sim and checks
// the session invariants after every step. These run natively; no browser
// involved.

use std::collections::HashSet;

use proptest::prelude::*;

use paper_trail::consts::*;
use paper_trail::sim::{self, GameEvent, GamePhase, GameState};

#[derive(Debug, Clone)]
enum Action {
    Press(String),
    Release(String),
    Frame,
    Countdown,
    Spawn,
    Resize(f32, f32),
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ArrowLeft".to_owned()),
        Just("ArrowRight".to_owned()),
        Just("a".to_owned()),
        Just("A".to_owned()),
        Just("d".to_owned()),
        Just("D".to_owned()),
        // A key with no movement binding
        Just("x".to_owned()),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        2 => key_strategy().prop_map(Action::Press),
        2 => key_strategy().prop_map(Action::Release),
        8 => Just(Action::Frame),
        2 => Just(Action::Countdown),
        3 => Just(Action::Spawn),
        1 => (120.0f32..800.0, 300.0f32..900.0).prop_map(|(w, h)| Action::Resize(w, h)),
    ]
}

fn apply(state: &mut GameState, action: &Action) {
    match action {
        Action::Press(key) => state.press(key),
        Action::Release(key) => state.release(key),
        Action::Frame => sim::frame_tick(state),
        Action::Countdown => sim::countdown_tick(state),
        Action::Spawn => sim::spawn_object(state),
        Action::Resize(w, h) => sim::resize(state, *w, *h),
    }
}

proptest! {
    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..300),
    ) {
        let mut state = GameState::new(seed, 480.0, 640.0);
        sim::start(&mut state);
        let _ = state.take_events();

        let mut removed = HashSet::new();
        let mut last_time = state.time_left;
        let mut last_score = state.score;

        for action in &actions {
            apply(&mut state, action);

            // Player stays inside the arena after every operation
            prop_assert!(state.player_x >= 0.0);
            prop_assert!(state.player_x <= state.player_limit());

            // The clock never goes up, the score never goes down
            prop_assert!(state.time_left <= last_time);
            prop_assert!(state.score >= last_score);
            last_time = state.time_left;
            last_score = state.score;

            // The session ends exactly when a terminal condition holds
            if state.time_left == 0 || state.lives == 0 {
                prop_assert!(!state.is_running());
            }
            if let GamePhase::Over { won } = state.phase {
                prop_assert_eq!(won, state.lives > 0);
            }

            // Each object is removed at most once, and removal really
            // drops it from the live list
            for event in state.take_events() {
                let id = match event {
                    GameEvent::BonusCollected { id }
                    | GameEvent::PlayerHit { id }
                    | GameEvent::Dodged { id }
                    | GameEvent::Expired { id } => id,
                    _ => continue,
                };
                prop_assert!(removed.insert(id), "object {} removed twice", id);
                prop_assert!(state.object(id).is_none());
            }
        }
    }

    #[test]
    fn restart_after_game_over_is_fresh(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..200),
    ) {
        let mut state = GameState::new(seed, 480.0, 640.0);
        sim::start(&mut state);

        for action in &actions {
            apply(&mut state, action);
        }
        sim::end(&mut state, false);

        sim::start(&mut state);
        prop_assert!(state.is_running());
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.lives, START_LIVES);
        prop_assert_eq!(state.time_left, SESSION_SECS);
        prop_assert!(state.objects.is_empty());
        prop_assert!(state.held.is_empty());
    }
}
