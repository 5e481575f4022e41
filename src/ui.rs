//! DOM rendering adapter
//!
//! A pure state-to-visual mirror: every value written here originates in
//! `sim::GameState`, and nothing is decided here. Object elements are keyed
//! by the simulation's object id, so a removal event always destroys the
//! matching element in the same callback that dropped the object.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::sim::{FallingObject, GameState};

/// Handles to the fixed DOM surface plus the live object elements
pub struct Stage {
    document: Document,
    arena: HtmlElement,
    player: HtmlElement,
    time: Element,
    score: Element,
    lives: Element,
    message: Element,
    start_btn: Element,
    objects: HashMap<u32, HtmlElement>,
}

impl Stage {
    /// Resolve the fixed DOM surface. Panics when the page is missing a
    /// required element; the page and the adapter ship together.
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            arena: require_html(document, "arena"),
            player: require_html(document, "player"),
            time: require(document, "time"),
            score: require(document, "score"),
            lives: require(document, "lives"),
            message: require(document, "message"),
            start_btn: require(document, "start-btn"),
            objects: HashMap::new(),
        }
    }

    /// Current arena client size in px
    pub fn arena_size(&self) -> (f32, f32) {
        (
            self.arena.client_width() as f32,
            self.arena.client_height() as f32,
        )
    }

    /// Mirror time/score/lives into the HUD
    pub fn render_hud(&self, state: &GameState) {
        self.time.set_text_content(Some(&state.time_left.to_string()));
        self.score.set_text_content(Some(&state.score.to_string()));
        self.lives.set_text_content(Some(&state.lives.to_string()));
    }

    /// Mirror the player's horizontal position
    pub fn render_player(&self, state: &GameState) {
        set_px(&self.player, "left", state.player_x);
    }

    /// Mirror every live object's vertical position
    pub fn render_objects(&self, state: &GameState) {
        for obj in &state.objects {
            if let Some(el) = self.objects.get(&obj.id) {
                set_px(el, "top", obj.pos.y);
            }
        }
    }

    /// Create the element for a newly spawned object
    pub fn spawn_visual(&mut self, obj: &FallingObject) {
        let el: HtmlElement = self
            .document
            .create_element("div")
            .expect("failed to create element")
            .dyn_into()
            .expect("not an HtmlElement");
        el.set_class_name(obj.kind.css_class());
        el.set_text_content(Some(obj.kind.glyph()));
        let _ = el.set_attribute("title", obj.label);
        set_px(&el, "left", obj.pos.x);
        set_px(&el, "top", obj.pos.y);
        let _ = self.arena.append_child(&el);
        self.objects.insert(obj.id, el);
    }

    /// Destroy the element for a removed object
    pub fn remove_visual(&mut self, id: u32) {
        if let Some(el) = self.objects.remove(&id) {
            el.remove();
        }
    }

    /// Drop every object element (session restart)
    pub fn clear_objects(&mut self) {
        for (_, el) in self.objects.drain() {
            el.remove();
        }
    }

    /// Restart the damage flash animation on the arena
    pub fn flash(&self) {
        let class_list = self.arena.class_list();
        let _ = class_list.remove_1("flash");
        // Reading offsetWidth forces a reflow so the animation restarts
        let _ = self.arena.offset_width();
        let _ = class_list.add_1("flash");
    }

    /// Free-text status line
    pub fn set_message(&self, text: &str) {
        self.message.set_text_content(Some(text));
    }

    /// Start/restart control label
    pub fn set_start_label(&self, text: &str) {
        self.start_btn.set_text_content(Some(text));
    }
}

fn require(document: &Document, id: &str) -> Element {
    document
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing element #{id}"))
}

fn require_html(document: &Document, id: &str) -> HtmlElement {
    require(document, id)
        .dyn_into()
        .unwrap_or_else(|_| panic!("element #{id} is not an HtmlElement"))
}

fn set_px(el: &HtmlElement, property: &str, value: f32) {
    let _ = el.style().set_property(property, &format!("{value}px"));
}
