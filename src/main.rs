//! Paper Trail entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use paper_trail::consts::*;
    use paper_trail::sim::{self, GameEvent, GameState};
    use paper_trail::ui::Stage;

    /// Browser scheduler handles for the running session. All three are
    /// cancelled together in the callback that observes the session end, so
    /// no orphaned callback can fire after the terminal message.
    #[derive(Default)]
    struct Timers {
        countdown: Option<i32>,
        spawn: Option<i32>,
        frame: Option<i32>,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        stage: Stage,
        timers: Timers,
    }

    impl Game {
        /// Mirror pending sim events into the DOM
        fn apply_events(&mut self) {
            for event in self.state.take_events() {
                match event {
                    GameEvent::Started => {
                        self.stage.clear_objects();
                        self.stage
                            .set_message("Hold the line! Grab the paperwork, dodge the spin!");
                        self.stage.set_start_label("Restart");
                    }
                    GameEvent::Spawned { id } => {
                        if let Some(obj) = self.state.object(id) {
                            self.stage.spawn_visual(obj);
                        }
                    }
                    GameEvent::BonusCollected { id }
                    | GameEvent::Dodged { id }
                    | GameEvent::Expired { id } => {
                        self.stage.remove_visual(id);
                    }
                    GameEvent::PlayerHit { id } => {
                        self.stage.remove_visual(id);
                        self.stage.flash();
                    }
                    GameEvent::Ended { won } => {
                        let message = sim::final_message(won, self.state.score);
                        self.stage.set_message(&message);
                        log::info!("Session over (won: {}, score: {})", won, self.state.score);
                    }
                }
            }
        }

        /// Full visual refresh from current state
        fn render(&self) {
            self.stage.render_player(&self.state);
            self.stage.render_objects(&self.state);
            self.stage.render_hud(&self.state);
        }

        /// Cancel both intervals and any pending animation frame
        fn stop_timers(&mut self) {
            let window = web_sys::window().expect("no window");
            if let Some(handle) = self.timers.countdown.take() {
                window.clear_interval_with_handle(handle);
            }
            if let Some(handle) = self.timers.spawn.take() {
                window.clear_interval_with_handle(handle);
            }
            if let Some(handle) = self.timers.frame.take() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Paper Trail starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let stage = Stage::new(&document);
        let (arena_w, arena_h) = stage.arena_size();

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, arena_w, arena_h);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            stage,
            timers: Timers::default(),
        }));
        game.borrow().render();

        setup_input_handlers(game.clone());
        setup_start_button(game.clone());
        setup_resize_handler(game.clone());

        log::info!("Paper Trail ready - press Space or the start button");
    }

    /// Begin a session and arm the three schedulers. Safe to call at any
    /// time; the sim makes it a no-op while a session is running.
    fn start_session(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.state.is_running() {
                return;
            }
            g.stop_timers();
            let (w, h) = g.stage.arena_size();
            sim::resize(&mut g.state, w, h);
            sim::start(&mut g.state);
            g.apply_events();
            g.render();
            log::info!("Session started (seed {})", g.state.seed);
        }

        let window = web_sys::window().expect("no window");

        // Countdown: 1 Hz
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                sim::countdown_tick(&mut g.state);
                g.apply_events();
                g.stage.render_hud(&g.state);
                if !g.state.is_running() {
                    g.stop_timers();
                }
            });
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    COUNTDOWN_INTERVAL_MS as i32,
                )
                .expect("failed to arm countdown timer");
            game.borrow_mut().timers.countdown = Some(handle);
            closure.forget();
        }

        // Spawner
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                sim::spawn_object(&mut g.state);
                g.apply_events();
            });
            let handle = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    SPAWN_INTERVAL_MS as i32,
                )
                .expect("failed to arm spawn timer");
            game.borrow_mut().timers.spawn = Some(handle);
            closure.forget();
        }

        schedule_frame(game);
    }

    fn schedule_frame(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let frame_game = game.clone();
        let closure = Closure::once(move |_time: f64| {
            frame_step(frame_game);
        });
        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("failed to request animation frame");
        game.borrow_mut().timers.frame = Some(handle);
        closure.forget();
    }

    fn frame_step(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.timers.frame = None;
            if !g.state.is_running() {
                return;
            }
            sim::frame_tick(&mut g.state);
            g.apply_events();
            g.render();
            if !g.state.is_running() {
                g.stop_timers();
                return;
            }
        }
        schedule_frame(&game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: track held keys; Space also starts a session when idle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    let running = game.borrow().state.is_running();
                    if !running {
                        start_session(&game);
                    }
                }
                game.borrow_mut().state.press(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().state.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_session(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            let (w, h) = g.stage.arena_size();
            sim::resize(&mut g.state, w, h);
            g.stage.render_player(&g.state);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paper_trail::sim::{self, GamePhase, GameState};

    env_logger::init();
    log::info!("Paper Trail (native) starting...");
    log::info!("Native mode is a headless smoke run - build with wasm-pack for the web version");

    let mut state = GameState::new(42, 480.0, 640.0);
    sim::start(&mut state);
    state.press("ArrowRight");

    // Roughly real cadence: 60 frames per simulated second, a spawn about
    // every 0.65 s, one countdown tick per second.
    while state.is_running() {
        for frame in 0..60 {
            if frame % 39 == 0 {
                sim::spawn_object(&mut state);
            }
            sim::frame_tick(&mut state);
        }
        sim::countdown_tick(&mut state);
        let _ = state.take_events();
    }

    let won = matches!(state.phase, GamePhase::Over { won: true });
    println!("{}", sim::final_message(won, state.score));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
