use crate::core::{Canvas, Rgba};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_ordered_range, validate_positive_number, validate_range, Validate,
};
use kurbo::{Point, Size, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

const MAX_RADIUS: f64 = 100.0;
const MAX_LINK_DISTANCE: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    /// Per-axis velocity is drawn from `[-max_speed, max_speed]`.
    pub max_speed: f64,
    pub radius: (f64, f64),
    pub opacity: (f64, f64),
    pub link_distance: f64,
    /// Link alpha at distance 0; fades linearly to 0 at `link_distance`.
    pub link_opacity: f64,
    pub link_width: f64,
    pub color: [u8; 3],
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 80,
            max_speed: 0.5,
            radius: (1.0, 3.0),
            opacity: (0.2, 0.7),
            link_distance: 120.0,
            link_opacity: 0.2,
            link_width: 1.0,
            color: [99, 102, 241],
        }
    }
}

impl Validate for ParticleSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("particles.count", self.count, 1)?;
        validate_range("particles.max_speed", self.max_speed, 0.0, 100.0)?;
        validate_ordered_range("particles.radius", self.radius)?;
        validate_range("particles.radius", self.radius.0, 0.0, MAX_RADIUS)?;
        validate_range("particles.radius", self.radius.1, 0.0, MAX_RADIUS)?;
        validate_ordered_range("particles.opacity", self.opacity)?;
        validate_range("particles.opacity", self.opacity.0, 0.0, 1.0)?;
        validate_range("particles.opacity", self.opacity.1, 0.0, 1.0)?;
        validate_range("particles.link_distance", self.link_distance, 0.0, MAX_LINK_DISTANCE)?;
        validate_range("particles.link_opacity", self.link_opacity, 0.0, 1.0)?;
        validate_range("particles.link_width", self.link_width, 0.0, MAX_RADIUS)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Vec2,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// 移動一步；超出範圍的軸反轉速度，位置不夾回
    fn advance(&mut self, extent: Size) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > extent.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > extent.height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// A proximity edge between two particles, `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum FieldState {
    Uninitialized,
    Running { extent: Size, particles: Vec<Particle> },
}

/// The decorative background: a fixed set of drifting points joined by fading lines.
#[derive(Debug, Clone)]
pub struct ParticleField {
    settings: ParticleSettings,
    state: FieldState,
}

impl ParticleField {
    pub fn new(settings: ParticleSettings) -> Self {
        Self {
            settings,
            state: FieldState::Uninitialized,
        }
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, FieldState::Running { .. })
    }

    /// Allocates the particle set for `viewport`. Only the first call has an effect.
    pub fn start<R: Rng>(&mut self, viewport: Size, rng: &mut R) {
        if self.is_running() {
            tracing::warn!("Particle field already running, ignoring start");
            return;
        }

        let s = &self.settings;
        let particles = (0..s.count)
            .map(|_| Particle {
                position: Point::new(
                    rng.gen_range(0.0..=viewport.width.max(0.0)),
                    rng.gen_range(0.0..=viewport.height.max(0.0)),
                ),
                velocity: Vec2::new(
                    rng.gen_range(-s.max_speed..=s.max_speed),
                    rng.gen_range(-s.max_speed..=s.max_speed),
                ),
                radius: rng.gen_range(s.radius.0..=s.radius.1),
                opacity: rng.gen_range(s.opacity.0..=s.opacity.1),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Particle field started: {} particles on {}x{}",
            particles.len(),
            viewport.width,
            viewport.height
        );
        self.state = FieldState::Running {
            extent: viewport,
            particles,
        };
    }

    /// Updates the bounds only; particle state is left as is.
    pub fn resize(&mut self, viewport: Size) {
        if let FieldState::Running { extent, .. } = &mut self.state {
            *extent = viewport;
        }
    }

    pub fn extent(&self) -> Option<Size> {
        match &self.state {
            FieldState::Running { extent, .. } => Some(*extent),
            FieldState::Uninitialized => None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        match &self.state {
            FieldState::Running { particles, .. } => particles,
            FieldState::Uninitialized => &[],
        }
    }

    pub fn advance(&mut self) {
        if let FieldState::Running { extent, particles } = &mut self.state {
            for particle in particles.iter_mut() {
                particle.advance(*extent);
            }
        }
    }

    /// O(n²) over all unordered pairs closer than `link_distance`.
    pub fn links(&self) -> Vec<Link> {
        let particles = self.particles();
        let threshold = self.settings.link_distance;
        let mut links = Vec::new();

        for (a, pa) in particles.iter().enumerate() {
            for (offset, pb) in particles[a + 1..].iter().enumerate() {
                let distance = pa.position.distance(pb.position);
                if distance < threshold {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        opacity: self.settings.link_opacity * (1.0 - distance / threshold),
                    });
                }
            }
        }

        links
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        let [r, g, b] = self.settings.color;
        let particles = self.particles();

        for particle in particles {
            canvas.fill_circle(
                particle.position,
                particle.radius,
                Rgba::new(r, g, b, particle.opacity),
            );
        }

        for link in self.links() {
            canvas.stroke_line(
                particles[link.a].position,
                particles[link.b].position,
                self.settings.link_width,
                Rgba::new(r, g, b, link.opacity),
            );
        }
    }

    /// One display frame: clear, move, draw.
    pub fn step<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.clear();
        self.advance();
        self.draw(canvas);
    }
}
