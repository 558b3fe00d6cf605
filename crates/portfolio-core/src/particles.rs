//! Drifting particle field with pointer repulsion and optional connection lines.
//!
//! The field is pure state: the web frontend owns the canvas and calls
//! [`ParticleField::step`] once per animation frame before drawing
//! [`ParticleField::particles`]. Positions are in canvas pixel space.

use crate::constants::*;
use crate::error::ConfigError;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::str::FromStr;

/// How the previous frame is cleared before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClearMode {
    Full,
    /// Black overlay with this alpha; leaves a short motion trail.
    Trail(f32),
}

/// Pairwise connection lines between nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connections {
    pub distance: f32,
    pub max_opacity: f32,
    pub rgb: [u8; 3],
    /// Lines are drawn on every n-th frame only (1 = every frame).
    pub every_n_frames: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub particle_count: usize,
    pub colors: Vec<String>,
    pub speed: f32,
    /// Sizes are seeded in `min_size..min_size + base_size`.
    pub base_size: f32,
    pub min_size: f32,
    /// Alphas are seeded in `alpha_min..alpha_min + alpha_span` when `use_alpha`.
    pub alpha_min: f32,
    pub alpha_span: f32,
    pub pointer_repulsion: bool,
    pub use_alpha: bool,
    pub glow: bool,
    pub clear: ClearMode,
    pub connections: Option<Connections>,
    pub vignette_every: Option<u32>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            colors: vec!["#ffffff".to_string()],
            speed: 0.5,
            base_size: 3.0,
            min_size: PARTICLE_MIN_SIZE,
            alpha_min: PARTICLE_ALPHA_MIN,
            alpha_span: PARTICLE_ALPHA_SPAN,
            pointer_repulsion: true,
            use_alpha: true,
            glow: true,
            clear: ClearMode::Trail(PARTICLE_TRAIL_ALPHA),
            connections: None,
            vignette_every: None,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !(self.base_size.is_finite() && self.base_size > 0.0) {
            return Err(ConfigError::InvalidBaseSize(self.base_size));
        }
        if !(self.min_size.is_finite() && self.min_size >= 0.0) {
            return Err(ConfigError::InvalidMinSize(self.min_size));
        }
        let (min, span) = (self.alpha_min, self.alpha_span);
        if !(min >= 0.0 && span >= 0.0 && min + span <= 1.0) {
            return Err(ConfigError::InvalidAlphaRange { min, span });
        }
        if let Some(c) = &self.connections {
            if !(c.distance.is_finite() && c.distance > 0.0) {
                return Err(ConfigError::InvalidConnectionDistance(c.distance));
            }
        }
        Ok(())
    }

    pub fn preset(preset: Preset) -> Self {
        let white = || vec!["rgba(255, 255, 255, 1)".to_string()];
        match preset {
            Preset::Hero => Self {
                particle_count: 200,
                colors: white(),
                speed: 0.4,
                base_size: 2.5,
                ..Self::default()
            },
            Preset::Skills => Self {
                particle_count: 150,
                colors: white(),
                speed: 0.5,
                base_size: 2.0,
                ..Self::default()
            },
            Preset::Projects => Self {
                particle_count: 250,
                colors: white(),
                speed: 0.6,
                base_size: 1.8,
                ..Self::default()
            },
            Preset::Gallery => Self {
                particle_count: 180,
                colors: white(),
                speed: 0.7,
                base_size: 1.5,
                ..Self::default()
            },
            Preset::Interactive => Self {
                particle_count: 100,
                colors: ["#9333EA", "#A855F7", "#6366F1", "#8B5CF6"]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                speed: 0.3,
                base_size: 2.0,
                use_alpha: false,
                glow: false,
                clear: ClearMode::Trail(INTERACTIVE_TRAIL_ALPHA),
                connections: Some(Connections {
                    distance: CONNECTION_DISTANCE,
                    max_opacity: 1.0,
                    rgb: [147, 51, 234],
                    every_n_frames: 1,
                }),
                ..Self::default()
            },
            Preset::Ambient => Self {
                particle_count: 30,
                colors: vec!["#ffffff".to_string()],
                speed: 0.1,
                base_size: 1.0,
                min_size: AMBIENT_MIN_SIZE,
                alpha_min: AMBIENT_ALPHA_MIN,
                alpha_span: AMBIENT_ALPHA_SPAN,
                pointer_repulsion: false,
                glow: false,
                clear: ClearMode::Trail(INTERACTIVE_TRAIL_ALPHA),
                connections: Some(Connections {
                    distance: AMBIENT_CONNECTION_DISTANCE,
                    max_opacity: AMBIENT_CONNECTION_OPACITY,
                    rgb: [255, 255, 255],
                    every_n_frames: AMBIENT_CONNECTION_EVERY,
                }),
                vignette_every: Some(AMBIENT_VIGNETTE_EVERY),
                ..Self::default()
            },
        }
    }
}

/// Named parameter sets used by the page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Hero,
    Skills,
    Projects,
    Gallery,
    Interactive,
    Ambient,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Hero,
        Preset::Skills,
        Preset::Projects,
        Preset::Gallery,
        Preset::Interactive,
        Preset::Ambient,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Hero => "hero",
            Preset::Skills => "skills",
            Preset::Projects => "projects",
            Preset::Gallery => "gallery",
            Preset::Interactive => "interactive",
            Preset::Ambient => "ambient",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub base: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub alpha: f32,
    /// Index into the field's palette.
    pub color: usize,
}

/// Last known pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub active: bool,
}

impl PointerState {
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            active: true,
        }
    }
}

/// One connection line between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Displacement pushing a particle at `pos` away from `pointer`.
///
/// Zero at or beyond [`REPULSION_RADIUS`], rising quadratically to
/// [`REPULSION_MAX`] when the pointer sits exactly on the particle. In that
/// degenerate case the push follows `fallback_dir` (the particle's drift).
#[inline]
pub fn repulsion_offset(pos: Vec2, pointer: Vec2, fallback_dir: Vec2) -> Vec2 {
    let away = pos - pointer;
    let dist = away.length();
    if dist >= REPULSION_RADIUS {
        return Vec2::ZERO;
    }
    let falloff = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
    let strength = falloff * falloff * REPULSION_MAX;
    let dir = if dist > 1e-4 {
        away / dist
    } else {
        fallback_dir.try_normalize().unwrap_or(Vec2::X)
    };
    dir * strength
}

/// Opacity of a connection line of length `dist`; zero at `max_dist` and beyond.
#[inline]
pub fn connection_opacity(dist: f32, max_dist: f32, max_opacity: f32) -> f32 {
    if dist >= max_dist {
        0.0
    } else {
        max_opacity * (1.0 - dist / max_dist)
    }
}

#[inline]
fn wrap(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        extent
    } else if v > extent {
        0.0
    } else {
        v
    }
}

pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    frame: u64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        config: ParticleConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            particles: Vec::with_capacity(config.particle_count),
            config,
            width: 0.0,
            height: 0.0,
            frame: 0,
        };
        field.resize(width, height, rng);
        Ok(field)
    }

    /// Reseed every particle inside the new bounds.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let cfg = &self.config;
        self.particles.clear();
        for _ in 0..cfg.particle_count {
            let base = Vec2::new(rng.gen::<f32>() * self.width, rng.gen::<f32>() * self.height);
            let velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * cfg.speed,
                (rng.gen::<f32>() - 0.5) * cfg.speed,
            );
            let alpha = if cfg.use_alpha {
                cfg.alpha_min + rng.gen::<f32>() * cfg.alpha_span
            } else {
                1.0
            };
            self.particles.push(Particle {
                position: base,
                base,
                velocity,
                size: rng.gen::<f32>() * cfg.base_size + cfg.min_size,
                alpha,
                color: rng.gen_range(0..cfg.colors.len()),
            });
        }
        log::debug!(
            "[particles] reseeded {} particles in {:.0}x{:.0}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    /// Advance one frame: drift, wrap, then apply the pointer push.
    pub fn step(&mut self, pointer: PointerState) {
        self.frame = self.frame.wrapping_add(1);
        let repel = pointer.active && self.config.pointer_repulsion;
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.base += p.velocity;
            p.base.x = wrap(p.base.x, w);
            p.base.y = wrap(p.base.y, h);
            p.position = p.base;
            if repel {
                p.position += repulsion_offset(p.base, pointer.pos, p.velocity);
            }
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[inline]
    pub fn color(&self, particle: &Particle) -> &str {
        &self.config.colors[particle.color]
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn connections_due(&self) -> bool {
        match &self.config.connections {
            Some(c) => self.frame % u64::from(c.every_n_frames.max(1)) == 0,
            None => false,
        }
    }

    pub fn vignette_due(&self) -> bool {
        match self.config.vignette_every {
            Some(n) => self.frame % u64::from(n.max(1)) == 0,
            None => false,
        }
    }

    /// Collect every pair closer than the connection distance, each pair once.
    ///
    /// Particles are bucketed into cells one connection distance wide, so each
    /// particle is only compared with the occupants of its 3x3 neighbourhood.
    pub fn connections(&self, out: &mut Vec<Link>) {
        out.clear();
        let Some(conn) = self.config.connections else {
            return;
        };
        let cell = conn.distance;
        let key = |v: Vec2| ((v.x / cell).floor() as i32, (v.y / cell).floor() as i32);

        let mut buckets: FnvHashMap<(i32, i32), SmallVec<[usize; 8]>> = FnvHashMap::default();
        for (i, p) in self.particles.iter().enumerate() {
            buckets.entry(key(p.position)).or_default().push(i);
        }

        for (i, p) in self.particles.iter().enumerate() {
            let (cx, cy) = key(p.position);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let Some(bucket) = buckets.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &j in bucket.iter().filter(|&&j| j > i) {
                        let dist = p.position.distance(self.particles[j].position);
                        if dist < conn.distance {
                            out.push(Link {
                                a: i,
                                b: j,
                                opacity: connection_opacity(dist, conn.distance, conn.max_opacity),
                            });
                        }
                    }
                }
            }
        }
    }
}
