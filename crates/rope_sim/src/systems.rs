use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::backend::CommandsBackend;
use crate::components::{Rope, RopeHook};
use crate::config::{SceneConfig, SceneConfigError};
use crate::events::{RebuildRope, RopeOccupancy, RopeSnapped};
use crate::random::RopeRandom;

/// Validate `scene`, then spawn a fixed hook and an ungenerated rope hanging from it.
pub fn spawn_hooked_rope(
    commands: &mut Commands,
    scene: &SceneConfig,
) -> Result<(Entity, Entity), SceneConfigError> {
    scene.validate()?;
    let hook_position = scene.hook_position();
    let hook = commands
        .spawn((
            RopeHook,
            Name::new("rope hook"),
            RigidBody::Fixed,
            Collider::ball(scene.rope.link_distance * 0.25),
            Transform::from_translation(hook_position.extend(0.0)),
        ))
        .id();
    let rope = Rope::new(scene.rope.clone(), scene.style.clone(), hook, hook_position)?;
    let rope = commands.spawn((Name::new("rope"), rope)).id();
    Ok((hook, rope))
}

/// Generate any rope that has not been built yet.
pub fn generate_ropes(
    mut commands: Commands,
    mut random: ResMut<RopeRandom>,
    mut ropes: Query<(Entity, &mut Rope)>,
) -> Result {
    for (entity, mut rope) in &mut ropes {
        if rope.chain.is_generated() {
            continue;
        }
        let Rope { chain, style } = &mut *rope;
        let spacing = chain.config().link_distance;
        let mut backend =
            CommandsBackend::new(&mut commands, entity, style, spacing, random.rng());
        chain.generate(&mut backend)?;
        info!(
            "Generated rope {entity}: {} links, {} breakable",
            chain.config().links,
            chain.pending().len()
        );
    }
    Ok(())
}

pub fn apply_occupancy(mut signals: EventReader<RopeOccupancy>, mut ropes: Query<&mut Rope>) {
    for ev in signals.read() {
        let Ok(mut rope) = ropes.get_mut(ev.rope()) else {
            warn!("{ev:?} targets unknown rope {}", ev.rope());
            continue;
        };
        match *ev {
            RopeOccupancy::Grab { segment, .. } => rope.chain.grab(segment),
            RopeOccupancy::MoveTo { segment, .. } => rope.chain.move_to(segment),
            RopeOccupancy::Release { .. } => rope.chain.release(),
        }
    }
}

/// Per-frame breakage evaluation. A dead-segment invariant breach propagates as an error.
pub fn tick_ropes(
    time: Res<Time>,
    mut commands: Commands,
    mut random: ResMut<RopeRandom>,
    mut ropes: Query<(Entity, &mut Rope)>,
    mut snapped: EventWriter<RopeSnapped>,
) -> Result {
    let dt = time.delta_secs();
    for (entity, mut rope) in &mut ropes {
        let Rope { chain, style } = &mut *rope;
        let spacing = chain.config().link_distance;
        let mut backend =
            CommandsBackend::new(&mut commands, entity, style, spacing, random.rng());
        if let Some(event) = chain.tick(dt, &mut backend)? {
            info!(
                "Rope {entity} snapped at segment {} after {:.2}s",
                event.index, event.time_in_rope
            );
            snapped.write(RopeSnapped {
                rope: entity,
                index: event.index,
                released: chain.body(event.released),
            });
        }
    }
    Ok(())
}

pub fn rebuild_ropes(
    mut requests: EventReader<RebuildRope>,
    mut commands: Commands,
    mut random: ResMut<RopeRandom>,
    mut ropes: Query<&mut Rope>,
) -> Result {
    for ev in requests.read() {
        let Ok(mut rope) = ropes.get_mut(ev.rope) else {
            warn!("RebuildRope for unknown rope {}", ev.rope);
            continue;
        };
        let Rope { chain, style } = &mut *rope;
        let spacing = chain.config().link_distance;
        let mut backend = CommandsBackend::new(&mut commands, ev.rope, style, spacing, random.rng());
        chain.rebuild(&mut backend)?;
        info!(
            "Rebuilt rope {}: {} breakable remaining",
            ev.rope,
            chain.pending().len()
        );
    }
    Ok(())
}
