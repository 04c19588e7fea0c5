mod common;

use common::{Call, generated};
use rope_core::prelude::*;

#[test]
fn rebuild_destroys_live_bodies_and_resets_state() {
    let (mut chain, mut backend) = generated(5, &[]);
    chain.grab(3);
    chain.tick(0.75, &mut backend).unwrap();
    let old_bodies: Vec<u32> = (0..5).filter_map(|i| chain.body(i)).collect();
    backend.clear_calls();

    chain.rebuild(&mut backend).unwrap();

    let destroyed: Vec<u32> = backend
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Destroy { body } => Some(*body),
            _ => None,
        })
        .collect();
    assert_eq!(destroyed, old_bodies);
    assert!(chain.is_generated());
    assert_eq!(chain.live_count(), 5);
    assert!(!chain.is_occupied());
    assert_eq!(chain.current_segment(), 0);
    assert_eq!(chain.time_in_rope(), 0.0);
    assert_eq!(backend.alive.len(), 5);
    assert!(old_bodies.iter().all(|b| !backend.alive.contains_key(b)));
}

#[test]
fn rebuild_skips_already_severed_segments() {
    let (mut chain, mut backend) = generated(5, &[(2, 1.0)]);
    chain.grab(4);
    chain.tick(1.0, &mut backend).unwrap().expect("snap");
    backend.clear_calls();

    // MockBackend panics on double destroy, so this also checks severed bodies are left alone.
    chain.rebuild(&mut backend).unwrap();
    assert_eq!(
        backend.count(|c| matches!(c, Call::Destroy { .. })),
        4
    );
    assert_eq!(chain.live_count(), 5);
}

#[test]
fn rebuild_twice_yields_identical_fresh_chain() {
    let (mut chain, mut backend) = generated(6, &[(1, 0.5), (3, 0.5)]);
    chain.grab(5);
    chain.tick(1.0, &mut backend).unwrap().expect("snap 3");
    chain.tick(1.0, &mut backend).unwrap().expect("snap 1");
    assert!(chain.pending().is_empty());

    chain.rebuild(&mut backend).unwrap();
    let first: Vec<(usize, bool)> = chain
        .segments()
        .iter()
        .map(|s| (s.index, s.tether_enabled))
        .collect();
    let first_kinds: Vec<bool> = chain
        .segments()
        .iter()
        .map(|s| s.kind == LinkKind::Break)
        .collect();

    chain.rebuild(&mut backend).unwrap();
    let second: Vec<(usize, bool)> = chain
        .segments()
        .iter()
        .map(|s| (s.index, s.tether_enabled))
        .collect();
    let second_kinds: Vec<bool> = chain
        .segments()
        .iter()
        .map(|s| s.kind == LinkKind::Break)
        .collect();

    assert_eq!(first, second);
    assert_eq!(first_kinds, second_kinds);
    assert_eq!(chain.live_count(), 6);
    assert_eq!(chain.time_in_rope(), 0.0);
    assert!(chain.pending().is_empty());
}

/// Consumed specs are not restored on rebuild; their segments come back as ordinary
/// links and can no longer snap.
#[test]
fn rebuild_keeps_consumed_specs_consumed() {
    let (mut chain, mut backend) = generated(5, &[(2, 1.0), (0, 1.0)]);
    chain.grab(3);
    chain.tick(1.0, &mut backend).unwrap().expect("snap 2");
    assert_eq!(chain.pending().len(), 1);

    chain.rebuild(&mut backend).unwrap();

    assert_eq!(chain.pending(), &[BreakableSpec::new(0, 1.0)]);
    assert!(matches!(
        chain.segment(2).unwrap().kind,
        LinkKind::Ordinary { .. }
    ));
    assert_eq!(chain.segment(0).unwrap().kind, LinkKind::Break);
    // The authored config still lists both.
    assert_eq!(chain.config().breakable.len(), 2);

    chain.grab(4);
    for _ in 0..10 {
        if let Some(event) = chain.tick(0.4, &mut backend).unwrap() {
            assert_eq!(event.index, 0);
        }
    }
    assert!(chain.body(2).is_some());
}
