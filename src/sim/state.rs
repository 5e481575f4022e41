//! Game state and core simulation types
//!
//! One `GameState` per session host. Everything that affects gameplay lives
//! here so tests can drive a whole session without a browser.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use super::collision::Rect;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start (or after a reset)
    Idle,
    /// Active session
    Running,
    /// Session ended; `won` is true when the clock ran out
    Over { won: bool },
}

/// The two kinds of falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Costs a life on contact, worth a small score when dodged
    Enemy,
    /// Worth score on contact, harmless when missed
    Bonus,
}

impl ObjectKind {
    /// Glyph shown inside the object's element
    pub fn glyph(&self) -> &'static str {
        match self {
            ObjectKind::Enemy => "\u{1F4AC}",  // speech balloon
            ObjectKind::Bonus => "\u{1F4C1}",  // file folder
        }
    }

    /// CSS class the adapter applies to the object's element
    pub fn css_class(&self) -> &'static str {
        match self {
            ObjectKind::Enemy => "enemy",
            ObjectKind::Bonus => "bonus",
        }
    }
}

/// Tooltip lines carried by enemy objects, drawn uniformly at spawn
pub const ENEMY_LINES: [&str; 5] = [
    "Empty promises",
    "Unpaid overtime",
    "Emotional blackmail",
    "Maybe next quarter",
    "You're just not trying",
];

/// Tooltip carried by every bonus object
pub const BONUS_LABEL: &str = "Signed paperwork";

/// A transient falling entity
#[derive(Debug, Clone, PartialEq)]
pub struct FallingObject {
    /// Stable handle; the DOM adapter keys its element map on this
    pub id: u32,
    pub kind: ObjectKind,
    /// Top-left corner, y increases downward
    pub pos: Vec2,
    /// Fall speed (px per frame)
    pub speed: f32,
    /// Tooltip text
    pub label: &'static str,
}

impl FallingObject {
    /// Bounding box for collision checks
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, OBJECT_WIDTH, OBJECT_HEIGHT)
    }
}

/// Things the presentation layer needs to mirror
///
/// Every object removal emits exactly one event, so the adapter can destroy
/// the matching element in the same callback that dropped the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A session started (state was just reset)
    Started,
    /// A new object exists; look it up by id while applying the event
    Spawned { id: u32 },
    /// Bonus consumed by the player
    BonusCollected { id: u32 },
    /// Enemy hit the player (flash feedback)
    PlayerHit { id: u32 },
    /// Enemy fell past the player untouched
    Dodged { id: u32 },
    /// Bonus fell past uncollected
    Expired { id: u32 },
    /// Session ended
    Ended { won: bool },
}

/// Key names that move the player left / right (matches browser `event.key`)
pub const LEFT_KEYS: [&str; 3] = ["ArrowLeft", "a", "A"];
pub const RIGHT_KEYS: [&str; 3] = ["ArrowRight", "d", "D"];

/// Complete game state for one session host
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed used for this host's RNG, kept for logging/restarts
    pub seed: u64,
    /// Seeded RNG; all spawn randomness flows through here
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// Seconds remaining on the countdown
    pub time_left: u32,
    /// Player sprite left edge (px from arena left)
    pub player_x: f32,
    /// Currently depressed key names
    pub held: BTreeSet<String>,
    /// Live falling objects in spawn order
    pub objects: Vec<FallingObject>,
    /// Arena size in px (width, height); updated by resize
    pub arena: Vec2,
    /// Pending presentation events, drained by the shell
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a state for an arena of the given size
    pub fn new(seed: u64, arena_width: f32, arena_height: f32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            lives: START_LIVES,
            time_left: SESSION_SECS,
            player_x: 0.0,
            held: BTreeSet::new(),
            objects: Vec::new(),
            arena: Vec2::new(arena_width, arena_height),
            events: Vec::new(),
            next_id: 1,
        };
        state.center_player();
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new object ID
    pub fn next_object_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a live object by its handle
    pub fn object(&self, id: u32) -> Option<&FallingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain pending presentation events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Record a key press
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_owned());
    }

    /// Record a key release
    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn left_held(&self) -> bool {
        LEFT_KEYS.iter().any(|k| self.held.contains(*k))
    }

    pub fn right_held(&self) -> bool {
        RIGHT_KEYS.iter().any(|k| self.held.contains(*k))
    }

    /// Largest valid `player_x` for the current arena
    pub fn player_limit(&self) -> f32 {
        (self.arena.x - PLAYER_WIDTH).max(0.0)
    }

    /// Clamp the player into the arena
    pub fn clamp_player(&mut self) {
        self.player_x = self.player_x.clamp(0.0, self.player_limit());
    }

    /// Center the player horizontally
    pub fn center_player(&mut self) {
        self.player_x = (self.arena.x - PLAYER_WIDTH) / 2.0;
        self.clamp_player();
    }

    /// Player bounding box; the sprite sits just above the arena floor
    pub fn player_rect(&self) -> Rect {
        let top = self.arena.y - PLAYER_FLOOR_GAP - PLAYER_HEIGHT;
        Rect::new(self.player_x, top, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}
