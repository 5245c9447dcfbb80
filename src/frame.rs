use crate::canvas::Canvas2dSurface;
use crate::constants::RESIZE_EVENT;
use crate::core::{FrameDriver, LoopControl, LoopGuard};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: FrameDriver,
    pub surface: Canvas2dSurface,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) -> bool {
        self.driver.tick(&mut self.surface)
    }

    pub fn on_resize(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
        if self.driver.resize(w, h) {
            log::debug!("[particles] resize -> {}x{}", w, h);
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the browser-side callbacks of a running loop and tears them down,
/// either on `stop` or when dropped.
pub struct LoopHandle {
    guard: LoopGuard,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
    resize: Option<Closure<dyn FnMut()>>,
}

impl LoopHandle {
    pub fn control(&self) -> &LoopControl {
        self.guard.control()
    }

    pub fn stop(&mut self) {
        let control = self.guard.control();
        if control.is_stopped() && self.resize.is_none() {
            return;
        }
        control.stop();
        if let Some(w) = web::window() {
            if let Some(id) = self.raf_id.take() {
                _ = w.cancel_animation_frame(id);
            }
            if let Some(resize) = self.resize.take() {
                _ = w.remove_event_listener_with_callback(
                    RESIZE_EVENT,
                    resize.as_ref().unchecked_ref(),
                );
            }
        }
        // Break the closure's self-reference so it can be dropped.
        self.tick.borrow_mut().take();
        log::info!(
            "[particles] loop stopped after {} frames",
            control.frames()
        );
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        // The resize listener must be detached before its closure is freed.
        self.stop();
    }
}

fn request_frame(tick: &TickClosure, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

fn wire_resize(frame_ctx: &Rc<RefCell<FrameContext>>) -> Option<Closure<dyn FnMut()>> {
    let window = web::window()?;
    let ctx = frame_ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
        .ok()?;
    Some(closure)
}

/// Start the requestAnimationFrame loop and the resize listener.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let guard = frame_ctx.borrow().driver.control().guard();
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone, &raf_id_tick);
        }
    }) as Box<dyn FnMut()>));

    let resize = wire_resize(&frame_ctx);
    request_frame(&tick, &raf_id);

    LoopHandle {
        guard,
        raf_id,
        tick,
        resize,
    }
}
