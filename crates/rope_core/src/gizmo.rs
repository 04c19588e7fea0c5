//! Editor-style guide geometry: the resting line and where pending breaks sit.

use glam::Vec2;

use crate::chain::{ROPE_DOWN, RopeChain};

/// Hook to the bottom of a fully extended rope.
pub fn rest_line(hook: Vec2, link_distance: f32, links: usize) -> (Vec2, Vec2) {
    (hook, hook + ROPE_DOWN * (link_distance * links as f32))
}

/// Resting position of the joint just below segment `index`.
pub fn break_marker(hook: Vec2, link_distance: f32, index: usize) -> Vec2 {
    hook + ROPE_DOWN * (link_distance * (index + 1) as f32)
}

impl<H: Copy + Eq + std::fmt::Debug> RopeChain<H> {
    pub fn rest_line(&self) -> (Vec2, Vec2) {
        let cfg = self.config();
        rest_line(self.hook_position(), cfg.link_distance, cfg.links)
    }

    pub fn break_markers(&self) -> impl Iterator<Item = Vec2> + '_ {
        let hook = self.hook_position();
        let spacing = self.config().link_distance;
        self.pending()
            .iter()
            .map(move |spec| break_marker(hook, spacing, spec.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BreakableSpec, RopeConfig};

    #[test]
    fn markers_follow_pending_specs() {
        let cfg = RopeConfig {
            links: 5,
            link_distance: 0.5,
            breakable: vec![BreakableSpec::new(1, 2.0), BreakableSpec::new(3, 1.0)],
            ..Default::default()
        };
        let chain: RopeChain<u32> = RopeChain::new(cfg, 0, Vec2::new(1.0, 4.0));

        let (start, end) = chain.rest_line();
        assert_eq!(start, Vec2::new(1.0, 4.0));
        assert!((end.y - 1.5).abs() < 1e-6);

        let markers: Vec<Vec2> = chain.break_markers().collect();
        assert_eq!(markers.len(), 2);
        // Pending list is sorted descending, so index 3 comes first.
        assert!((markers[0].y - 2.0).abs() < 1e-6);
        assert!((markers[1].y - 3.0).abs() < 1e-6);
        assert!(markers.iter().all(|m| m.x == 1.0));
    }
}
