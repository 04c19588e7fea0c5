use bevy::prelude::*;
use rope_core::LinkKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("style needs at least one ordinary link variant")]
    NoVariants,
    #[error("link width must be positive and finite, got {0}")]
    InvalidWidth(f32),
}

/// Look and collider width of one link prefab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStyle {
    /// sRGB, 0..1.
    pub color: [f32; 3],
    pub width: f32,
}

impl LinkStyle {
    pub const fn new(color: [f32; 3], width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

/// Prefab pools for a rope: random ordinary variants plus the end and break links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeStyle {
    pub variants: Vec<LinkStyle>,
    pub end: LinkStyle,
    pub breaker: LinkStyle,
}

impl Default for RopeStyle {
    fn default() -> Self {
        Self {
            variants: vec![
                LinkStyle::new([0.55, 0.40, 0.22], 0.12),
                LinkStyle::new([0.62, 0.47, 0.27], 0.12),
                LinkStyle::new([0.48, 0.34, 0.18], 0.10),
            ],
            end: LinkStyle::new([0.25, 0.25, 0.28], 0.30),
            breaker: LinkStyle::new([0.80, 0.30, 0.20], 0.11),
        }
    }
}

impl RopeStyle {
    /// Prefab for a link kind. Ordinary variants wrap around the pool.
    ///
    /// # Panics
    ///
    /// On an ordinary link when the variant pool is empty; [`RopeStyle::validate`]
    /// rejects such a style.
    pub fn link(&self, kind: LinkKind) -> &LinkStyle {
        match kind {
            LinkKind::End => &self.end,
            LinkKind::Break => &self.breaker,
            LinkKind::Ordinary { variant } => &self.variants[variant % self.variants.len()],
        }
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.variants.is_empty() {
            return Err(StyleError::NoVariants);
        }
        match self
            .all()
            .find(|link| !link.width.is_finite() || link.width <= 0.0)
        {
            Some(bad) => Err(StyleError::InvalidWidth(bad.width)),
            None => Ok(()),
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &LinkStyle> {
        self.variants
            .iter()
            .chain([&self.end, &self.breaker])
    }
}
