use bevy::prelude::*;
use rope_core::{LinkKind, RopeChain, RopeConfig};

use crate::style::{RopeStyle, StyleError};

/// Marker for the fixed body a rope hangs from.
#[derive(Component)]
pub struct RopeHook;

/// Owns the chain state for one rope. Segment bodies are separate entities.
///
/// The style is checked on construction and stays read-only, so every ordinary
/// link has a variant to draw from.
#[derive(Component)]
pub struct Rope {
    pub chain: RopeChain<Entity>,
    pub(crate) style: RopeStyle,
}

impl Rope {
    pub fn new(
        config: RopeConfig,
        style: RopeStyle,
        hook: Entity,
        hook_position: Vec2,
    ) -> Result<Self, StyleError> {
        style.validate()?;
        Ok(Self {
            chain: RopeChain::new(config, hook, hook_position),
            style,
        })
    }

    pub fn style(&self) -> &RopeStyle {
        &self.style
    }
}

/// Back-reference from a segment body to its rope, so triggers can report which
/// segment an actor touched.
#[derive(Component, Debug, Clone, Copy)]
pub struct RopeLink {
    pub rope: Entity,
    pub index: usize,
    pub kind: LinkKind,
}

/// Child entity of a segment carrying its distance joint.
#[derive(Component, Debug, Clone, Copy)]
pub struct RopeTether {
    pub enabled: bool,
}
