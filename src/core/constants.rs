// Particle field tuning shared by the web frontend and host-side tests.

// Population
pub const PARTICLE_COUNT: usize = 80;

// Pairs closer than this (strictly) are joined by a line
pub const LINK_DISTANCE: f64 = 120.0;

// Disc radius range, half-open [min, max)
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_MAX: f64 = 4.0;

// Per-axis velocity drawn from [-SPEED_MAX, SPEED_MAX), in px per frame
pub const SPEED_MAX: f64 = 0.5;

// Colors and stroke
pub const PARTICLE_COLOR: &str = "#00d4ff";
pub const LINK_COLOR: &str = "rgba(0,212,255,0.2)";
pub const LINK_WIDTH: f64 = 1.0;
