//! Vertical "thread" lines that wobble on independent sine waves.
//!
//! Each frame a thread only contributes the segment from its previous to its
//! current y; the trail-fade clear turns those segments into strokes.

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct ThreadConfig {
    pub count: usize,
    /// Scales the pointer influence radius.
    pub amplitude: f32,
    pub rgb: [u8; 3],
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            count: THREAD_DEFAULT_COUNT,
            amplitude: 1.0,
            rgb: THREAD_DEFAULT_COLOR,
        }
    }
}

impl ThreadConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoThreads);
        }
        Ok(())
    }
}

/// Parse `"r,g,b"` (whitespace tolerant) into a color triple.
pub fn parse_rgb(s: &str) -> Result<[u8; 3], ConfigError> {
    let parts: Vec<u8> = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::InvalidColor(s.to_string()))?;
    match parts.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(ConfigError::InvalidColor(s.to_string())),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thread {
    pub x: f32,
    pub y: f32,
    pub last_y: f32,
    pub speed: f32,
    pub amplitude: f32,
    pub phase: f32,
    pub width: f32,
    pub opacity: f32,
}

pub struct ThreadField {
    config: ThreadConfig,
    threads: Vec<Thread>,
    width: f32,
    height: f32,
    time: f32,
}

impl ThreadField {
    pub fn new<R: Rng + ?Sized>(
        config: ThreadConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let threads = (0..config.count)
            .map(|_| Thread {
                x: 0.0,
                y: 0.0,
                last_y: 0.0,
                speed: rng.gen::<f32>() * 0.1 + 0.05,
                amplitude: rng.gen::<f32>() * 30.0 + 20.0,
                phase: rng.gen::<f32>() * TAU,
                width: rng.gen::<f32>() * 2.0 + 1.0,
                opacity: rng.gen::<f32>() * 0.5 + 0.2,
            })
            .collect();
        let mut field = Self {
            config,
            threads,
            width: 0.0,
            height: 0.0,
            time: 0.0,
        };
        field.resize(width, height);
        Ok(field)
    }

    /// Respace threads across the new width and recentre them vertically.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let total = self.threads.len() as f32;
        let mid = self.height * 0.5;
        for (i, t) in self.threads.iter_mut().enumerate() {
            t.x = i as f32 / total * self.width;
            t.y = mid;
            t.last_y = mid;
        }
    }

    #[inline]
    pub fn influence_radius(&self) -> f32 {
        THREAD_INFLUENCE_BASE * self.config.amplitude
    }

    /// Advance one frame. `pointer` is normalized to the canvas (0..1 on both
    /// axes); `None` means the pointer is elsewhere and acts as the centre.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        self.time += THREAD_TIME_STEP;
        let pointer = pointer.unwrap_or(Vec2::splat(0.5));
        let pointer_px = pointer * Vec2::new(self.width, self.height);
        let influence = self.influence_radius();
        let mid = self.height * 0.5;
        for t in &mut self.threads {
            let effect = if influence > 0.0 {
                let dist = Vec2::new(t.x, t.y).distance(pointer_px);
                (1.0 - dist / influence).max(0.0)
            } else {
                0.0
            };
            t.last_y = t.y;
            t.y = mid
                + (self.time * t.speed + t.phase).sin() * t.amplitude
                + effect * influence * (pointer.y - 0.5);
        }
    }

    #[inline]
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    #[inline]
    pub fn config(&self) -> &ThreadConfig {
        &self.config
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
