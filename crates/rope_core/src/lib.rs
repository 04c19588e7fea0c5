//! Breakable rope chain logic, independent of any engine.
//!
//! A [`RopeChain`] spawns its segments through a [`RopeBackend`], tracks which
//! ones are breakable, and severs the topmost eligible segment once an actor has
//! hung on long enough.

pub mod backend;
pub mod chain;
pub mod config;
pub mod error;
pub mod gizmo;

pub use glam::Vec2;

pub mod prelude {
    pub use crate::backend::{LinkKind, RopeBackend};
    pub use crate::chain::{BreakEvent, ROPE_DOWN, RopeChain, Segment, SegmentState};
    pub use crate::config::{BreakableSpec, RopeConfig};
    pub use crate::error::{ConfigError, RopeError};
}

pub use prelude::*;
