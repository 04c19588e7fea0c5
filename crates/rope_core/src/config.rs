use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_LINKS: usize = 7;
pub const DEFAULT_LINK_DISTANCE: f32 = 0.5;
pub const DEFAULT_END_MASS: f32 = 30.0;
pub const DEFAULT_END_GRAVITY_SCALE: f32 = 3.0;

/// Declares that the segment at `index` snaps after `time_to_break` seconds of occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakableSpec {
    pub index: usize,
    pub time_to_break: f32,
}

impl BreakableSpec {
    pub fn new(index: usize, time_to_break: f32) -> Self {
        Self {
            index,
            time_to_break,
        }
    }
}

/// Authored rope layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig {
    /// Number of segments, hook outward.
    pub links: usize,
    /// Spacing between consecutive segment centers.
    pub link_distance: f32,
    /// Mass applied to the terminal segment so the chain hangs with tension.
    pub end_mass: f32,
    pub end_gravity_scale: f32,
    pub breakable: Vec<BreakableSpec>,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            links: DEFAULT_LINKS,
            link_distance: DEFAULT_LINK_DISTANCE,
            end_mass: DEFAULT_END_MASS,
            end_gravity_scale: DEFAULT_END_GRAVITY_SCALE,
            breakable: Vec::new(),
        }
    }
}

impl RopeConfig {
    /// Total resting length from hook to the bottom of the end segment.
    pub fn rest_length(&self) -> f32 {
        self.link_distance * self.links as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.links == 0 {
            return Err(ConfigError::NoLinks);
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(ConfigError::InvalidLinkDistance(self.link_distance));
        }
        if !self.end_mass.is_finite() || self.end_mass <= 0.0 {
            return Err(ConfigError::InvalidEndMass(self.end_mass));
        }
        if !self.end_gravity_scale.is_finite() || self.end_gravity_scale <= 0.0 {
            return Err(ConfigError::InvalidGravityScale(self.end_gravity_scale));
        }
        validate_breakables(&self.breakable, self.links)
    }
}

/// Breakable specs must point at distinct, non-terminal segments with a usable threshold.
pub(crate) fn validate_breakables(specs: &[BreakableSpec], links: usize) -> Result<(), ConfigError> {
    for (i, spec) in specs.iter().enumerate() {
        if spec.index >= links {
            return Err(ConfigError::BreakableOutOfRange {
                index: spec.index,
                links,
            });
        }
        if spec.index == links - 1 {
            return Err(ConfigError::BreakableIsEnd(spec.index));
        }
        if !spec.time_to_break.is_finite() || spec.time_to_break < 0.0 {
            return Err(ConfigError::InvalidTimeToBreak {
                index: spec.index,
                time: spec.time_to_break,
            });
        }
        if specs[..i].iter().any(|other| other.index == spec.index) {
            return Err(ConfigError::DuplicateBreakable(spec.index));
        }
    }
    Ok(())
}
