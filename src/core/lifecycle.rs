// Host-agnostic frame driving with an explicit stop handle.
// The browser loop, native hosts and tests all drive a `FrameDriver`; the
// loop keeps rescheduling only while `FrameDriver::tick` returns `true`.

use super::particles::ParticleField;
use super::surface::DrawSurface;
use std::cell::Cell;
use std::rc::Rc;

/// Cloneable cancellation handle shared between a driver and its owner.
#[derive(Clone, Debug, Default)]
pub struct LoopControl {
    stopped: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Frames completed since the loop started.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Guard that stops the loop when dropped.
    pub fn guard(&self) -> LoopGuard {
        LoopGuard {
            control: self.clone(),
        }
    }

    fn record_frame(&self) {
        self.frames.set(self.frames.get().wrapping_add(1));
    }
}

/// Owner-side token: dropping it stops the loop it was taken from.
#[derive(Debug)]
pub struct LoopGuard {
    control: LoopControl,
}

impl LoopGuard {
    pub fn control(&self) -> &LoopControl {
        &self.control
    }
}

impl Drop for LoopGuard {
    fn drop(&mut self) {
        self.control.stop();
    }
}

pub struct FrameDriver {
    pub field: ParticleField,
    control: LoopControl,
}

impl FrameDriver {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            control: LoopControl::new(),
        }
    }

    pub fn control(&self) -> LoopControl {
        self.control.clone()
    }

    /// Step then render one frame. Returns `false` without touching the field
    /// or the surface once the loop has been stopped.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.control.is_stopped() {
            return false;
        }
        self.field.step();
        self.field.render(surface);
        self.control.record_frame();
        true
    }

    /// Re-seed the field for new dimensions. Ignored after stop.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.control.is_stopped() {
            return false;
        }
        self.field.resize(width, height);
        true
    }
}
