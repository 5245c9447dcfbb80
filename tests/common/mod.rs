// Shared include of the pure-Rust core for host-side tests.
// The main crate is wasm-only, so the modules are pulled in by path.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod particles {
        include!("../../src/core/particles.rs");
    }
    pub mod lifecycle {
        include!("../../src/core/lifecycle.rs");
    }
}

use self::core::surface::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(f64, f64, f64, f64),
    Fill(String),
    Circle(f64, f64, f64),
    Stroke(String),
    LineWidth(f64),
    Line(f64, f64, f64, f64),
}

/// Records every drawing call in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Circle(..)))
            .count()
    }

    pub fn lines(&self) -> Vec<(f64, f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Line(a, b, c, d) => Some((*a, *b, *c, *d)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(Call::Clear(x, y, w, h));
    }
    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(Call::Fill(color.to_string()));
    }
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(Call::Circle(x, y, radius));
    }
    fn set_stroke_color(&mut self, color: &str) {
        self.calls.push(Call::Stroke(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::LineWidth(width));
    }
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.calls.push(Call::Line(x0, y0, x1, y1));
    }
}
