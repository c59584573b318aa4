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
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::platform::PlatformError;
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::sim::{Playfield, SeededRng};
    use canvas_pong::{FrameDriver, PongConfig};

    const CANVAS_ID: &str = "pong";
    const CONFIG_ATTR: &str = "data-config";

    /// Game instance shared between the frame loop and input callbacks
    struct Game {
        driver: FrameDriver<SeededRng>,
        surface: CanvasSurface,
    }

    impl Game {
        fn frame(&mut self) {
            self.driver.frame(&mut self.surface);
        }
    }

    pub fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or(PlatformError::MissingWindow)?;
        let document = window.document().ok_or(PlatformError::MissingWindow)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| PlatformError::MissingCanvas(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| PlatformError::MissingCanvas(CANVAS_ID.to_string()))?;

        // Size the drawing buffer to the displayed area
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let field = Playfield::new(width as f32, height as f32);

        let config = PongConfig::load(canvas.get_attribute(CONFIG_ATTR).as_deref());
        let surface = CanvasSurface::new(&canvas)?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(field, &config, SeededRng::new(seed)),
            surface,
        }));

        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        setup_input_handlers(&canvas, game.clone())?;

        // Start game loop
        request_animation_frame(game)?;

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), PlatformError> {
        // Mouse move - absolute position relative to the canvas top
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = event.client_y() as f32 - rect.top() as f32;
            game.borrow_mut().driver.pointer_moved(y);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::MissingWindow)?;
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();

        if let Err(e) = request_animation_frame(game) {
            log::error!("Frame loop stopped: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Pong failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::consts::HEADLESS_FRAMES;
    use canvas_pong::renderer::DrawList;
    use canvas_pong::sim::{Playfield, SeededRng};
    use canvas_pong::{FrameDriver, PongConfig};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let seed: u64 = rand::random();
    let config = PongConfig::default();
    let mut driver = FrameDriver::new(Playfield::new(800.0, 500.0), &config, SeededRng::new(seed));
    let mut surface = DrawList::new();

    let (mut hits, mut resets) = (0u32, 0u32);
    for _ in 0..HEADLESS_FRAMES {
        surface.clear();
        let report = driver.frame(&mut surface);
        hits += report.paddle_hits.len() as u32;
        if report.conceded.is_some() {
            resets += 1;
        }
    }

    let state = driver.state();
    log::info!(
        "Ran {} frames (seed {}): {} paddle hits, {} resets, ball at ({:.1}, {:.1})",
        state.frame,
        seed,
        hits,
        resets,
        state.ball.pos.x,
        state.ball.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
