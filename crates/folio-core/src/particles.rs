use crate::constants::*;
use crate::theme::Theme;
use glam::Vec2;
use rand::prelude::*;

/// Visual flavour of a particle. Light worlds get petals and leaves, dark
/// worlds get magic orbs; both share sparkles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Petal,
    Sparkle,
    Leaf,
    MagicOrb,
}

/// A single decorative particle in canvas pixel space.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub velocity: Vec2,
    pub opacity: f32,
    pub kind: ParticleKind,
}

/// Theme-dependent seeding parameters.
///
/// - `count`: number of live particles
/// - `size_span`: sizes are drawn from `PARTICLE_MIN_SIZE + [0, size_span)`
/// - `kinds`: uniformly sampled kind table (repeats weight a kind)
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub size_span: f32,
    pub kinds: &'static [ParticleKind],
}

impl FieldParams {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                count: LIGHT_PARTICLE_COUNT,
                size_span: LIGHT_PARTICLE_SIZE_SPAN,
                kinds: &[ParticleKind::Petal, ParticleKind::Sparkle, ParticleKind::Leaf],
            },
            Theme::Dark => Self {
                count: DARK_PARTICLE_COUNT,
                size_span: DARK_PARTICLE_SIZE_SPAN,
                kinds: &[
                    ParticleKind::MagicOrb,
                    ParticleKind::Sparkle,
                    ParticleKind::MagicOrb,
                ],
            },
        }
    }
}

/// Owned particle collection plus the canvas bounds it lives in.
///
/// The field never deletes particles: anything falling off the bottom is
/// recycled above the top edge and horizontal overflow wraps around.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    theme: Theme,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(theme: Theme, width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width: width.max(0.0),
            height: height.max(0.0),
            theme,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed(theme);
        field
    }

    /// Throw away the current particles and seed a fresh set for `theme`.
    pub fn reseed(&mut self, theme: Theme) {
        self.theme = theme;
        let params = FieldParams::for_theme(theme);
        self.particles.clear();
        for _ in 0..params.count {
            let particle = Particle {
                position: Vec2::new(self.random_x(), self.random_y()),
                size: self.rng.gen::<f32>() * params.size_span + PARTICLE_MIN_SIZE,
                velocity: Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT_X_SPAN,
                    self.rng.gen::<f32>() * PARTICLE_FALL_SPAN + PARTICLE_FALL_MIN,
                ),
                opacity: self.rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_MIN,
                kind: *params.kinds.choose(&mut self.rng).unwrap_or(&ParticleKind::Sparkle),
            };
            self.particles.push(particle);
        }
        log::info!(
            "[particles] seeded {} particles for {} theme",
            self.particles.len(),
            theme.name()
        );
    }

    /// Track new canvas bounds. Running particles are kept as they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance every particle by one frame, in collection order.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for i in 0..self.particles.len() {
            let mut pos = {
                let p = &self.particles[i];
                p.position + p.velocity
            };
            pos.x += (pos.y * SWAY_FREQUENCY + i as f32).sin() * SWAY_AMPLITUDE;

            if pos.y > h + PARTICLE_EDGE_MARGIN {
                pos.y = -PARTICLE_EDGE_MARGIN;
                pos.x = self.random_x();
            }
            if pos.x > w + PARTICLE_EDGE_MARGIN {
                pos.x = -PARTICLE_EDGE_MARGIN;
            } else if pos.x < -PARTICLE_EDGE_MARGIN {
                pos.x = w + PARTICLE_EDGE_MARGIN;
            }
            self.particles[i].position = pos;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn random_x(&mut self) -> f32 {
        if self.width > 0.0 {
            self.rng.gen_range(0.0..self.width)
        } else {
            0.0
        }
    }

    fn random_y(&mut self) -> f32 {
        if self.height > 0.0 {
            self.rng.gen_range(0.0..self.height)
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Ellipse { rx: f32, ry: f32, rotation: f32 },
    Circle { radius: f32 },
}

/// Soft halo drawn behind a particle (canvas shadow blur).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: &'static str,
    pub blur: f32,
}

/// How a particle is painted this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    pub shape: Shape,
    pub fill: &'static str,
    pub glow: Option<Glow>,
    pub alpha: f32,
}

pub fn draw_style(particle: &Particle, theme: Theme) -> DrawStyle {
    let size = particle.size;
    let (shape, fill, glow) = match particle.kind {
        ParticleKind::Petal => (
            Shape::Ellipse {
                rx: size,
                ry: size * 0.6,
                rotation: std::f32::consts::FRAC_PI_4,
            },
            "#FFB7C5",
            None,
        ),
        ParticleKind::Sparkle => {
            let (fill, glow) = if theme.is_dark() {
                ("#e0aaff", Glow { color: "#9d4edd", blur: 15.0 })
            } else {
                ("#FFD700", Glow { color: "#FFD700", blur: 10.0 })
            };
            (Shape::Circle { radius: size * 0.5 }, fill, Some(glow))
        }
        ParticleKind::Leaf => (
            Shape::Ellipse {
                rx: size * 0.8,
                ry: size * 1.2,
                rotation: 0.0,
            },
            "#98D8C8",
            None,
        ),
        ParticleKind::MagicOrb => (
            Shape::Circle { radius: size * 0.6 },
            "#9d4edd",
            Some(Glow {
                color: "#e0aaff",
                blur: 20.0,
            }),
        ),
    };
    DrawStyle {
        shape,
        fill,
        glow,
        alpha: particle.opacity,
    }
}
