use thiserror::Error;

/// Authored rope data that cannot be turned into a chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rope needs at least one link")]
    NoLinks,
    #[error("link distance must be positive and finite, got {0}")]
    InvalidLinkDistance(f32),
    #[error("end segment mass must be positive and finite, got {0}")]
    InvalidEndMass(f32),
    #[error("end segment gravity scale must be positive and finite, got {0}")]
    InvalidGravityScale(f32),
    #[error("breakable index {index} is outside a rope of {links} links")]
    BreakableOutOfRange { index: usize, links: usize },
    #[error("breakable index {0} is the end segment")]
    BreakableIsEnd(usize),
    #[error("breakable index {0} is declared more than once")]
    DuplicateBreakable(usize),
    #[error("breakable index {index} has invalid time to break {time}")]
    InvalidTimeToBreak { index: usize, time: f32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RopeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A pending break needs a segment that was already severed or never existed.
    #[error("segment {index} is not live (needed to break segment {breaking})")]
    DeadSegment { index: usize, breaking: usize },
    #[error("rope is already generated; rebuild it instead")]
    AlreadyGenerated,
}
