use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;
use rope_core::{LinkKind, RopeBackend};

use crate::components::{RopeLink, RopeTether};
use crate::style::RopeStyle;

/// Link bodies sit in their own group and skip each other; jointed neighbours overlap at rest.
const LINK_GROUP: Group = Group::GROUP_2;

/// [`RopeBackend`] over Bevy `Commands`. Spawns and despawns are queued and land at
/// the end of the current schedule.
pub struct CommandsBackend<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    rope: Entity,
    style: &'a RopeStyle,
    link_distance: f32,
    rng: &'a mut StdRng,
}

impl<'a, 'w, 's> CommandsBackend<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        rope: Entity,
        style: &'a RopeStyle,
        link_distance: f32,
        rng: &'a mut StdRng,
    ) -> Self {
        Self {
            commands,
            rope,
            style,
            link_distance,
            rng,
        }
    }
}

impl RopeBackend for CommandsBackend<'_, '_, '_> {
    type Handle = Entity;

    fn choose_variant(&mut self) -> usize {
        self.rng.random_range(0..self.style.variants.len().max(1))
    }

    fn spawn_link(&mut self, index: usize, kind: LinkKind, position: Vec2) -> Entity {
        let look = self.style.link(kind);
        self.commands
            .spawn((
                RopeLink {
                    rope: self.rope,
                    index,
                    kind,
                },
                Name::new(format!("rope link {index}")),
                Sprite::from_color(look.color(), Vec2::new(look.width, self.link_distance)),
                Transform::from_translation(position.extend(0.0)),
                RigidBody::Dynamic,
                Collider::cuboid(look.width * 0.5, self.link_distance * 0.5),
                CollisionGroups::new(LINK_GROUP, Group::ALL.difference(LINK_GROUP)),
            ))
            .id()
    }

    fn attach_hinge(
        &mut self,
        body: Entity,
        anchor_body: Entity,
        local_anchor: Vec2,
        connected_anchor: Vec2,
    ) -> Entity {
        let joint = RevoluteJointBuilder::new()
            .local_anchor1(connected_anchor)
            .local_anchor2(local_anchor);
        self.commands
            .entity(body)
            .insert(ImpulseJoint::new(anchor_body, joint));
        // The hinge lives on the body itself.
        body
    }

    fn attach_tether(&mut self, body: Entity, anchor_body: Entity, distance: f32) -> Entity {
        // A body carries one ImpulseJoint; extra joints go on child entities.
        self.commands
            .spawn((
                RopeTether { enabled: true },
                ImpulseJoint::new(anchor_body, RopeJointBuilder::new(distance)),
                Transform::default(),
                ChildOf(body),
            ))
            .id()
    }

    fn set_mass(&mut self, body: Entity, mass: f32, gravity_scale: f32) {
        self.commands.entity(body).insert((
            ColliderMassProperties::Mass(mass),
            GravityScale(gravity_scale),
        ));
    }

    fn release_joint(&mut self, joint: Entity) {
        self.commands
            .entity(joint)
            .remove::<ImpulseJoint>()
            .insert(RopeTether { enabled: false });
    }

    fn destroy_body(&mut self, body: Entity) {
        self.commands.entity(body).despawn();
    }
}
