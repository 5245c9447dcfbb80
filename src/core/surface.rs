/// Minimal 2D immediate-mode drawing interface needed by the particle field.
///
/// The web frontend implements this over `CanvasRenderingContext2d`; tests
/// implement it with a recorder so rendering can be checked on the host.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill_color(&mut self, color: &str);
    /// Filled disc centred on (x, y).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
}
