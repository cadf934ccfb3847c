//! Orbit Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, TouchEvent};

    use orbit_dodge::backdrop::{self, Backdrop};
    use orbit_dodge::sim::{Bounds, Direction, GamePhase, Snapshot};
    use orbit_dodge::{Game, Tuning};

    const HAZARD_COLOR: &str = "#00d4ff";
    const PLAYER_COLOR: &str = "#ff4444";

    /// Browser host: owns the game plus the DOM handles it draws into
    struct Host {
        game: Game,
        backdrop: Backdrop,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        document: Document,
        /// A requestAnimationFrame callback is pending
        loop_armed: bool,
    }

    impl Host {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
        }

        fn update_hud(&self, snap: &Snapshot) {
            match snap.phase {
                GamePhase::Playing => {
                    self.set_text("score-val", &snap.score.to_string());
                    self.set_text("level-val", &snap.level.to_string());
                }
                GamePhase::GameOver => {
                    if let Some(result) = snap.final_result {
                        self.set_text("final-score-val", &result.score.to_string());
                        self.set_text("final-level-val", &result.level.to_string());
                    }
                    self.set_hidden("hud", true);
                    self.set_hidden("game-over", false);
                }
                GamePhase::Menu => {}
            }
        }

        fn draw(&self, snap: &Snapshot) {
            let ctx = &self.ctx;
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;

            ctx.set_shadow_blur(0.0);
            let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
            let _ = gradient.add_color_stop(0.0, backdrop::GRADIENT_TOP);
            let _ = gradient.add_color_stop(1.0, backdrop::GRADIENT_BOTTOM);
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.fill_rect(0.0, 0.0, w, h);

            ctx.set_shadow_color(backdrop::GLOW_COLOR);
            ctx.set_shadow_blur(15.0);
            ctx.set_fill_style_str(backdrop::GLOW_COLOR);
            for particle in self.backdrop.particles() {
                ctx.set_global_alpha(particle.opacity as f64);
                fill_circle(ctx, particle.pos, particle.radius);
            }
            ctx.set_global_alpha(1.0);

            ctx.set_shadow_color(HAZARD_COLOR);
            ctx.set_shadow_blur(35.0);
            ctx.set_fill_style_str(HAZARD_COLOR);
            for hazard in &snap.hazards {
                fill_circle(ctx, hazard.pos, hazard.radius);
            }

            ctx.set_shadow_color(PLAYER_COLOR);
            ctx.set_shadow_blur(40.0);
            ctx.set_fill_style_str(PLAYER_COLOR);
            fill_circle(ctx, snap.player.pos, snap.player.radius);
        }

        fn resize(&mut self) {
            let wrapper = self.document.query_selector(".photo-wrap").ok().flatten();
            if let Some(wrapper) = wrapper {
                self.canvas.set_width(wrapper.client_width().max(0) as u32);
                self.canvas.set_height(wrapper.client_height().max(0) as u32);
            }
            self.game.resize(canvas_bounds(&self.canvas));
        }
    }

    fn fill_circle(ctx: &CanvasRenderingContext2d, pos: Vec2, radius: f32) {
        ctx.begin_path();
        if ctx
            .arc(pos.x as f64, pos.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }

    fn canvas_bounds(canvas: &HtmlCanvasElement) -> Bounds {
        Bounds::new(canvas.width() as f32, canvas.height() as f32)
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn fresh_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    /// Optional tuning overrides from `<canvas data-tuning='{...}'>`
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        match canvas.get_attribute("data-tuning") {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring invalid data-tuning: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::info!("Orbit Dodge starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #game-canvas element");
            return;
        };
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("2D canvas context unavailable");
            return;
        };

        reveal_fade_ins(&document);

        let tuning = load_tuning(&canvas);
        let seed = fresh_seed();
        let game = Game::new(canvas_bounds(&canvas), tuning, seed);
        let backdrop = Backdrop::new(canvas_bounds(&canvas), seed);
        let host = Rc::new(RefCell::new(Host {
            game,
            backdrop,
            canvas: canvas.clone(),
            ctx,
            document: document.clone(),
            loop_armed: false,
        }));
        host.borrow_mut().resize();

        setup_resize(host.clone());
        setup_input_handlers(&canvas, host.clone());
        setup_start_buttons(host.clone());

        let snap = host.borrow().game.snapshot();
        host.borrow().draw(&snap);
        log::info!("Orbit Dodge ready");
    }

    /// Start the CSS fade-in transitions on page elements
    fn reveal_fade_ins(document: &Document) {
        let Ok(list) = document.query_selector_all(".fade-in") else {
            return;
        };
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = el.class_list().add_1("visible");
            }
        }
    }

    fn setup_resize(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            host.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Arrow keys
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    event.prevent_default();
                    host.borrow_mut().game.set_key(dir, true);
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    host.borrow_mut().game.set_key(dir, false);
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move: steer toward the first touch point
        for name in ["touchstart", "touchmove"] {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f64 - rect.left();
                    let y = touch.client_y() as f64 - rect.top();
                    host.borrow_mut()
                        .game
                        .set_pointer(Some(Vec2::new(x as f32, y as f32)));
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events are lost, release everything
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                host.borrow_mut().game.input.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                host.borrow_mut().game.set_pointer(None);
            });
            let _ = canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_buttons(host: Rc<RefCell<Host>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["play-btn", "restart-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("No #{} element", id);
                continue;
            };
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_session(host.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_session(host: Rc<RefCell<Host>>) {
        let arm = {
            let mut h = host.borrow_mut();
            let seed = fresh_seed();
            h.game.start(now_ms(), seed);
            let bounds = h.game.state.bounds;
            h.backdrop.reset(bounds);
            h.set_text("score-val", "0");
            h.set_text("level-val", "1");
            h.set_hidden("hud", false);
            h.set_hidden("game-over", true);
            !std::mem::replace(&mut h.loop_armed, true)
        };
        if arm {
            request_animation_frame(host);
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        let keep_going = {
            let mut h = host.borrow_mut();
            let keep_going = h.game.frame(time);
            let bounds = h.game.state.bounds;
            h.backdrop.step(bounds);
            let snap = h.game.snapshot();
            h.update_hud(&snap);
            h.draw(&snap);
            h.loop_armed = keep_going;
            keep_going
        };

        if keep_going {
            request_animation_frame(host);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orbit Dodge (native) starting...");
    log::info!("Native mode runs a headless session - serve the wasm build for the playable version");

    let tuning = match std::env::var("ORBIT_DODGE_TUNING") {
        Ok(json) => match orbit_dodge::Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring invalid ORBIT_DODGE_TUNING: {}", e);
                orbit_dodge::Tuning::default()
            }
        },
        Err(_) => orbit_dodge::Tuning::default(),
    };

    headless::run(tuning);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot run: steers away from the nearest hazard each frame
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use orbit_dodge::consts::FRAME_DT;
    use orbit_dodge::sim::Bounds;
    use orbit_dodge::{Game, Tuning};

    /// Ten minutes at 60 Hz
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    const SEED: u64 = 0x0D0D_6E;

    pub fn run(tuning: Tuning) {
        let bounds = Bounds::new(800.0, 600.0);
        let mut game = Game::new(bounds, tuning, SEED);
        game.start(0.0, SEED);

        let frame_ms = FRAME_DT as f64 * 1000.0;
        let mut frames = 0;
        while frames < MAX_FRAMES {
            frames += 1;
            game.set_pointer(evasive_target(&game, bounds));
            if !game.frame(frames as f64 * frame_ms) {
                break;
            }
        }

        let snap = game.snapshot();
        match serde_json::to_string(&snap.final_result) {
            Ok(json) => log::info!("Finished after {} frames: {}", frames, json),
            Err(e) => log::warn!("Could not serialize result: {}", e),
        }
        println!("score {} level {} ({:?})", snap.score, snap.level, snap.phase);
    }

    /// Point away from the closest hazard, pulled toward the playfield center
    fn evasive_target(game: &Game, bounds: Bounds) -> Option<Vec2> {
        let snap = game.snapshot();
        let player = snap.player.pos;
        let nearest = snap.hazards.iter().min_by(|a, b| {
            let da = (a.pos - player).length() - a.radius;
            let db = (b.pos - player).length() - b.radius;
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })?;
        let away = orbit_dodge::direction(nearest.pos, player);
        let home = orbit_dodge::direction(player, bounds.center()) * 0.3;
        Some(player + (away + home) * 50.0)
    }
}
