#![cfg(target_arch = "wasm32")]
use crate::core::{FieldConfig, FrameDriver, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod core;
mod dom;
mod frame;

thread_local! {
    // Instance mounted by `start`, kept so the page can stop it later.
    static AUTO_BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
}

/// Handle to a running particle backdrop.
#[wasm_bindgen]
pub struct ParticleBackground {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    handle: frame::LoopHandle,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Stop the animation loop and detach the resize listener. Idempotent.
    pub fn stop(&mut self) {
        self.handle.stop();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.control().is_stopped()
    }

    pub fn particle_count(&self) -> usize {
        self.frame_ctx.borrow().driver.field.len()
    }

    pub fn frames(&self) -> f64 {
        self.handle.control().frames() as f64
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("hero-particles starting");

    match init(constants::HERO_CANVAS_ID) {
        Ok(Some(bg)) => AUTO_BACKGROUND.with(|slot| *slot.borrow_mut() = Some(bg)),
        Ok(None) => {}
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Mount a backdrop on the canvas with the given id. Returns `undefined` when
/// the page has no such canvas.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<Option<ParticleBackground>, JsValue> {
    init(canvas_id).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Stop the backdrop started automatically on load.
#[wasm_bindgen]
pub fn stop_background() {
    AUTO_BACKGROUND.with(|slot| {
        if let Some(mut bg) = slot.borrow_mut().take() {
            bg.stop();
        }
    });
}

fn init(canvas_id: &str) -> anyhow::Result<Option<ParticleBackground>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // No canvas on this page: the backdrop simply does not apply.
    let Some(canvas) = dom::find_canvas(&document, canvas_id) else {
        return Ok(None);
    };

    let (width, height) = dom::sync_canvas_to_viewport(&canvas);
    let surface = canvas::Canvas2dSurface::from_canvas(&canvas)?;
    let seed: u64 = rand::random();
    let field = ParticleField::new(width, height, FieldConfig::default(), seed);
    log::info!(
        "[particles] initialised n={} size={}x{} seed={:#x}",
        field.len(),
        field.width(),
        field.height(),
        seed
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver: FrameDriver::new(field),
        surface,
        canvas,
    }));
    let handle = frame::start_loop(frame_ctx.clone());
    Ok(Some(ParticleBackground { frame_ctx, handle }))
}
