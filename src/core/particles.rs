use super::constants::*;
use super::surface::DrawSurface;
use glam::DVec2;
use rand::prelude::*;

/// How a particle is turned around at the field edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Move first, then flip the velocity component if the new position is
    /// outside `[0, bound]`. The particle may be drawn up to one step out of
    /// bounds.
    #[default]
    ReflectAfterMove,
    /// Same flip rule, but the position is also clamped back into the field.
    Clamp,
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub link_distance: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub speed_max: f64,
    pub boundary: Boundary,
    pub particle_color: &'static str,
    pub link_color: &'static str,
    pub link_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            speed_max: SPEED_MAX,
            boundary: Boundary::default(),
            particle_color: PARTICLE_COLOR,
            link_color: LINK_COLOR,
            link_width: LINK_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
}

impl Particle {
    fn random(rng: &mut StdRng, size: DVec2, cfg: &FieldConfig) -> Self {
        Self {
            position: DVec2::new(uniform(rng, 0.0, size.x), uniform(rng, 0.0, size.y)),
            velocity: DVec2::new(
                uniform(rng, -cfg.speed_max, cfg.speed_max),
                uniform(rng, -cfg.speed_max, cfg.speed_max),
            ),
            radius: uniform(rng, cfg.radius_min, cfg.radius_max),
        }
    }

    /// Advance by one frame of velocity and reflect on each axis that left
    /// `[0, size]`. Each axis flips at most once per call.
    pub fn step(&mut self, size: DVec2, boundary: Boundary) {
        self.position += self.velocity;
        for axis in 0..2 {
            let p = self.position[axis];
            let bound = size[axis];
            if p > bound || p < 0.0 {
                self.velocity[axis] = -self.velocity[axis];
                if boundary == Boundary::Clamp {
                    self.position[axis] = p.clamp(0.0, bound);
                }
            }
        }
    }
}

// Half-open uniform draw; an empty range collapses to `lo`.
#[inline]
fn uniform(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Fixed-size set of drifting particles plus the proximity links between them.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub config: FieldConfig,
    size: DVec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, config: FieldConfig, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(config.count),
            config,
            size: DVec2::ZERO,
            rng: StdRng::seed_from_u64(seed),
        };
        field.initialize(width, height);
        field
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Discard every particle and populate a fresh set over `width` x `height`.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(sanitize_extent(width), sanitize_extent(height));
        self.particles.clear();
        for _ in 0..self.config.count {
            let p = Particle::random(&mut self.rng, self.size, &self.config);
            self.particles.push(p);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.initialize(width, height);
    }

    pub fn step(&mut self) {
        let size = self.size;
        let boundary = self.config.boundary;
        for p in &mut self.particles {
            p.step(size, boundary);
        }
    }

    /// Index pairs `(a, b)` with `a < b` whose distance is below the link distance.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let max_sq = self.config.link_distance * self.config.link_distance;
        let mut out = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
                if pa.position.distance_squared(pb.position) < max_sq {
                    out.push((a, b));
                }
            }
        }
        out
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.size.x, self.size.y);

        surface.set_fill_color(self.config.particle_color);
        for p in &self.particles {
            surface.fill_circle(p.position.x, p.position.y, p.radius);
        }

        let links = self.links();
        if links.is_empty() {
            return;
        }
        surface.set_stroke_color(self.config.link_color);
        surface.set_line_width(self.config.link_width);
        for (a, b) in links {
            let pa = self.particles[a].position;
            let pb = self.particles[b].position;
            surface.stroke_line(pa.x, pa.y, pb.x, pb.y);
        }
    }
}
