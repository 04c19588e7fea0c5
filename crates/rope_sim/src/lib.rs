//! Bevy + Rapier 2D runtime for [`rope_core`] chains.
//!
//! Add [`RopePlugin`], spawn a [`Rope`](components::Rope) (see
//! [`spawn_hooked_rope`](systems::spawn_hooked_rope)), and drive occupancy with
//! [`RopeOccupancy`](events::RopeOccupancy).

use bevy::prelude::*;

pub mod backend;
pub mod components;
pub mod config;
pub mod debug;
pub mod events;
pub mod random;
pub mod style;
pub mod systems;

/// Rope systems run in this set, in order: occupancy, rebuild, generate, tick.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RopeSet;

/// Registers rope events, the variant RNG and the per-frame rope systems.
pub struct RopePlugin;

impl Plugin for RopePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<random::RopeRandom>()
            .add_event::<events::RopeOccupancy>()
            .add_event::<events::RebuildRope>()
            .add_event::<events::RopeSnapped>()
            .configure_sets(Update, RopeSet)
            .add_systems(
                Update,
                (
                    systems::apply_occupancy,
                    systems::rebuild_ropes,
                    systems::generate_ropes,
                    systems::tick_ropes,
                )
                    .chain()
                    .in_set(RopeSet),
            );
    }
}

pub mod prelude {
    pub use super::{RopePlugin, RopeSet};
    pub use crate::backend::CommandsBackend;
    pub use crate::components::{Rope, RopeHook, RopeLink, RopeTether};
    pub use crate::config::{SceneConfig, SceneConfigError};
    pub use crate::debug::RopeDebugPlugin;
    pub use crate::events::{RebuildRope, RopeOccupancy, RopeSnapped};
    pub use crate::random::RopeRandom;
    pub use crate::style::{LinkStyle, RopeStyle};
    pub use crate::systems::spawn_hooked_rope;
}
