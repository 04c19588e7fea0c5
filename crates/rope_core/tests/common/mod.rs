#![allow(dead_code)]

use std::collections::BTreeMap;

use rope_core::prelude::*;
use rope_core::Vec2;

pub const HOOK: u32 = 0;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Spawn { handle: u32, index: usize, kind: LinkKind, position: Vec2 },
    Hinge { joint: u32, body: u32, anchor: u32, local: Vec2, connected: Vec2 },
    Tether { joint: u32, body: u32, anchor: u32, distance: f32 },
    Mass { body: u32, mass: f32, gravity_scale: f32 },
    Release { joint: u32 },
    Destroy { body: u32 },
}

/// Records every backend call and hands out sequential handles.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub calls: Vec<Call>,
    pub alive: BTreeMap<u32, usize>,
    pub released: Vec<u32>,
    next: u32,
    variants: usize,
    variant_cursor: usize,
}

impl MockBackend {
    pub fn with_variants(variants: usize) -> Self {
        Self {
            next: HOOK + 1,
            variants,
            ..Default::default()
        }
    }

    fn issue(&mut self) -> u32 {
        let handle = self.next;
        self.next += 1;
        handle
    }

    pub fn spawned_kinds(&self) -> Vec<LinkKind> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Spawn { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl RopeBackend for MockBackend {
    type Handle = u32;

    fn choose_variant(&mut self) -> usize {
        // Round-robin stands in for the random pick.
        let variant = self.variant_cursor % self.variants.max(1);
        self.variant_cursor += 1;
        variant
    }

    fn spawn_link(&mut self, index: usize, kind: LinkKind, position: Vec2) -> u32 {
        let handle = self.issue();
        self.alive.insert(handle, index);
        self.calls.push(Call::Spawn {
            handle,
            index,
            kind,
            position,
        });
        handle
    }

    fn attach_hinge(&mut self, body: u32, anchor_body: u32, local: Vec2, connected: Vec2) -> u32 {
        let joint = self.issue();
        self.calls.push(Call::Hinge {
            joint,
            body,
            anchor: anchor_body,
            local,
            connected,
        });
        joint
    }

    fn attach_tether(&mut self, body: u32, anchor_body: u32, distance: f32) -> u32 {
        let joint = self.issue();
        self.calls.push(Call::Tether {
            joint,
            body,
            anchor: anchor_body,
            distance,
        });
        joint
    }

    fn set_mass(&mut self, body: u32, mass: f32, gravity_scale: f32) {
        self.calls.push(Call::Mass {
            body,
            mass,
            gravity_scale,
        });
    }

    fn release_joint(&mut self, joint: u32) {
        self.released.push(joint);
        self.calls.push(Call::Release { joint });
    }

    fn destroy_body(&mut self, body: u32) {
        assert!(
            self.alive.remove(&body).is_some(),
            "destroyed body {body} twice"
        );
        self.calls.push(Call::Destroy { body });
    }
}

pub fn config(links: usize, specs: &[(usize, f32)]) -> RopeConfig {
    RopeConfig {
        links,
        link_distance: 0.5,
        breakable: specs
            .iter()
            .map(|&(index, time)| BreakableSpec::new(index, time))
            .collect(),
        ..Default::default()
    }
}

pub fn generated(links: usize, specs: &[(usize, f32)]) -> (RopeChain<u32>, MockBackend) {
    let mut backend = MockBackend::with_variants(3);
    let mut chain = RopeChain::new(config(links, specs), HOOK, Vec2::new(0.0, 10.0));
    chain.generate(&mut backend).expect("generate rope");
    (chain, backend)
}
