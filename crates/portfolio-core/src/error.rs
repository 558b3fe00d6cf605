use thiserror::Error;

/// Rejected renderer configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be greater than zero")]
    NoParticles,
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
    #[error("base size must be finite and positive, got {0}")]
    InvalidBaseSize(f32),
    #[error("minimum size must be finite and non-negative, got {0}")]
    InvalidMinSize(f32),
    #[error("alpha range {min} + {span} must lie within 0..=1")]
    InvalidAlphaRange { min: f32, span: f32 },
    #[error("connection distance must be finite and positive, got {0}")]
    InvalidConnectionDistance(f32),
    #[error("thread count must be greater than zero")]
    NoThreads,
    #[error("unknown particle preset `{0}`")]
    UnknownPreset(String),
    #[error("could not parse `{0}` as a color triple")]
    InvalidColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("pager needs at least one section")]
    NoSections,
    #[error("duplicate section id `{0}`")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("please fill in the {0} field")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    Busy,
}
