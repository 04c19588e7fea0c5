use bevy::color::palettes::css::{BLACK, RED};
use bevy::prelude::*;

use crate::components::Rope;

const BREAK_MARKER_RADIUS: f32 = 0.1;

/// Draws each rope's resting line and its pending break points.
pub struct RopeDebugPlugin;

impl Plugin for RopeDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_rope_guides);
    }
}

pub fn draw_rope_guides(mut gizmos: Gizmos, ropes: Query<&Rope>) {
    for rope in &ropes {
        let (start, end) = rope.chain.rest_line();
        gizmos.line_2d(start, end, BLACK);
        for marker in rope.chain.break_markers() {
            gizmos.circle_2d(marker, BREAK_MARKER_RADIUS, RED);
        }
    }
}
