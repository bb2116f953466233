//! Arkanoid entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use arkanoid::consts::CANVAS_ID;
    use arkanoid::renderer::CanvasSurface;
    use arkanoid::sim::Key;
    use arkanoid::{BootError, FrameOutcome, Game, GameConfig};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    impl App {
        fn frame(&mut self) -> FrameOutcome {
            self.game.frame(&mut self.surface)
        }
    }

    pub fn run() -> Result<(), BootError> {
        console_error_panic_hook::set_once();
        // Only fails if a logger is already installed
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Arkanoid starting...");

        let window = web_sys::window().ok_or(BootError::NoWindow)?;
        let document = window.document().ok_or(BootError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| BootError::CanvasNotFound(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| BootError::NotACanvas(CANVAS_ID.to_string()))?;

        let config = GameConfig::load_or_default(canvas.get_attribute("data-config").as_deref());
        let field = glam::Vec2::new(config.field_width, config.field_height);
        let surface = CanvasSurface::new(&canvas, field)?;

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, seed),
            surface,
        }));

        setup_input_handlers(&window, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Arkanoid running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), BootError> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            let key = event.key();
            #[allow(deprecated)]
            let code = event.key_code();
            if let Some(key) = Key::from_dom(&key, code) {
                a.game.handle_key(key);
            } else if key.eq_ignore_ascii_case("i") {
                a.game.toggle_autopilot();
            }
        });
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|_| BootError::Listener("keydown"))?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone; stopping game loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("requestAnimationFrame failed; stopping game loop");
            return;
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let outcome = app.borrow_mut().frame();

        match outcome {
            FrameOutcome::Continue => request_animation_frame(app),
            FrameOutcome::Finished => log::info!("Game loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().map_err(|e| {
        log::error!("Boot failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arkanoid::renderer::CommandBuffer;
    use arkanoid::{FrameOutcome, Game, GameConfig};

    env_logger::init();
    log::info!("Arkanoid (native) starting...");
    log::info!("The browser build draws to a canvas - run with `trunk serve` for the web version");

    // Headless demo: autopilot plays until the ball is lost or the cap is hit
    const MAX_FRAMES: u64 = 60 * 60 * 5;
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    let mut game = Game::new(GameConfig::default(), seed);
    game.autopilot = true;

    let mut surface = CommandBuffer::new();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        // Only the latest frame matters headless
        surface.reset();
        frames += 1;
        if game.frame(&mut surface) == FrameOutcome::Finished {
            break;
        }
    }

    log::info!(
        "Headless run over after {} frames: {:?}, {} of {} tiles left",
        frames,
        game.state.status,
        game.state.tiles.alive_count(),
        game.state.tiles.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
