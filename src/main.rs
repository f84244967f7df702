//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
        TouchEvent,
    };

    use canvas_pong::GameConfig;
    use canvas_pong::input::{Intent, to_surface_y};
    use canvas_pong::platform::{ButtonRestart, FrameScheduler};
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::session::Session;

    type Game = Session<FrameScheduler, CanvasSurface, ButtonRestart>;

    /// Build the config from the canvas size plus optional `data-config` JSON
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;
        let fallback = GameConfig::with_surface(width, height);

        let Some(json) = canvas.get_attribute("data-config") else {
            if let Err(e) = fallback.validate() {
                log::warn!("Canvas size unsuitable: {}", e);
            }
            return fallback;
        };

        match GameConfig::from_json_with_surface(&json, width, height) {
            Ok(config) => {
                log::info!("Loaded config overrides: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Ignoring data-config: {}", e);
                fallback
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pongCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let button: HtmlElement = document
            .get_element_by_id("replayButton")
            .expect("no replay button")
            .dyn_into()
            .expect("replay button is not an HTML element");

        let config = load_config(&canvas);
        let scheduler = FrameScheduler::new(window.clone());
        let game: Rc<RefCell<Game>> = Rc::new(RefCell::new(Session::new(
            config,
            scheduler.clone(),
            CanvasSurface::new(&canvas, ctx),
            ButtonRestart::new(button.clone()),
        )));

        // Every scheduled frame runs one tick
        {
            let game = game.clone();
            scheduler.set_callback(move |_time: f64| {
                game.borrow_mut().on_frame();
            });
        }

        setup_input_handlers(&document, &canvas, game.clone());
        setup_restart_button(&button, game.clone());

        game.borrow_mut().start();

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(intent) = Intent::key_down(&event.key()) {
                    game.borrow_mut().handle_intent(intent);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(intent) = Intent::key_up(&event.key()) {
                    game.borrow_mut().handle_intent(intent);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - paddle center follows the cursor
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = to_surface_y(event.client_y() as f32, rect.top() as f32);
                game.borrow_mut().handle_intent(Intent::PointerMove { y });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - anchor relative drag
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = to_surface_y(touch.client_y() as f32, rect.top() as f32);
                    game.borrow_mut().handle_intent(Intent::TouchStart { y });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = to_surface_y(touch.client_y() as f32, rect.top() as f32);
                    game.borrow_mut().handle_intent(Intent::TouchMove { y });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(button: &HtmlElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().reset();
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Tick cap for the headless run
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_TICKS: u64 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::input::Intent;
    use canvas_pong::renderer::Recorder;
    use canvas_pong::session::{ManualScheduler, RestartFlag, Session};
    use canvas_pong::{GameConfig, RenderPhase};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let config = GameConfig::default();
    let mut session = Session::new(
        config,
        ManualScheduler::new(),
        Recorder::new(config.width, config.height),
        RestartFlag::default(),
    );
    session.start();

    // Player paddle follows the ball like a pointer would
    while session.state().time_ticks < MAX_HEADLESS_TICKS {
        let ball_y = session.state().ball.pos.y;
        session.handle_intent(Intent::PointerMove { y: ball_y });
        if !session.run_pending() {
            break;
        }
    }

    let state = session.state();
    match session.phase() {
        RenderPhase::GameOverShown => log::info!(
            "Game over after {} ticks, ball at ({:.1}, {:.1})",
            state.time_ticks,
            state.ball.pos.x,
            state.ball.pos.y
        ),
        RenderPhase::Playing => log::info!("Still playing after {} ticks", state.time_ticks),
    }
    log::info!("Draw commands issued: {}", session.surface().total());
    if let Ok(json) = serde_json::to_string(state) {
        log::debug!("Final state: {}", json);
    }

    session.reset();
    log::info!(
        "After reset: phase {:?}, {} frame(s) pending",
        session.phase(),
        session.scheduler().outstanding()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
