use bevy::prelude::*;

/// Actor occupancy signals, applied in the order they were written.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopeOccupancy {
    /// An actor attaches at `segment`.
    Grab { rope: Entity, segment: usize },
    /// The attached actor moved to another segment.
    MoveTo { rope: Entity, segment: usize },
    Release { rope: Entity },
}

impl RopeOccupancy {
    pub fn rope(&self) -> Entity {
        match *self {
            Self::Grab { rope, .. } | Self::MoveTo { rope, .. } | Self::Release { rope } => rope,
        }
    }
}

/// Tear down and regenerate every segment of `rope`.
#[derive(Event, Debug, Clone, Copy)]
pub struct RebuildRope {
    pub rope: Entity,
}

/// A breakable segment was severed. `released` is the body now hanging free.
#[derive(Event, Debug, Clone, Copy)]
pub struct RopeSnapped {
    pub rope: Entity,
    pub index: usize,
    pub released: Option<Entity>,
}
