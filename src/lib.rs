pub mod cli;

use anyhow::{Context, ensure};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rope_sim::prelude::*;

use crate::cli::AppArgs;
use crate::cli::seed::{SeedState, resolve_seed};

/// World units per screen pixel for the demo camera.
const CAMERA_SCALE: f32 = 0.01;

/// Segment the scripted actor grabs once the scene is up.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct ScriptedHanger {
    pub segment: Option<usize>,
}

pub fn build_app(headless: bool) -> App {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "breakable rope".into(),
            visible: !headless,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
    .add_plugins(RopePlugin);
    app
}

pub fn run_app(args: AppArgs) -> anyhow::Result<()> {
    let scene = SceneConfig::load(args.config.as_deref()).context("loading rope scene")?;
    if let Some(segment) = args.hang_at {
        ensure!(
            segment < scene.rope.links,
            "--hang-at {segment} is outside a rope of {} links",
            scene.rope.links
        );
    }
    let seed = resolve_seed(args.seed);

    let mut app = build_app(args.headless);
    app.insert_resource(scene)
        .insert_resource(SeedState { value: seed })
        .insert_resource(RopeRandom::new(seed))
        .insert_resource(ScriptedHanger {
            segment: args.hang_at,
        })
        .add_systems(Startup, (setup_camera, spawn_scene).chain())
        .add_systems(
            Update,
            (rebuild_on_key.before(RopeSet), release_on_snap.after(RopeSet)),
        );

    if args.debug_gizmos {
        app.add_plugins((RopeDebugPlugin, RapierDebugRenderPlugin::default()));
    }

    app.run();
    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn spawn_scene(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    seed: Res<SeedState>,
    hanger: Res<ScriptedHanger>,
    mut occupancy: EventWriter<RopeOccupancy>,
) -> Result {
    let (_, rope) = spawn_hooked_rope(&mut commands, &scene)?;
    info!(
        "Rope scene: {} links from {:?}, seed {}",
        scene.rope.links, scene.hook, seed.value
    );
    if let Some(segment) = hanger.segment {
        info!("Scripted actor grabs segment {segment}");
        occupancy.write(RopeOccupancy::Grab { rope, segment });
    }
    Ok(())
}

/// The core keeps the rope occupied after a snap; the actor lets go here.
fn release_on_snap(
    mut snapped: EventReader<RopeSnapped>,
    mut occupancy: EventWriter<RopeOccupancy>,
) {
    for ev in snapped.read() {
        info!("Actor dropped: rope {} lost segment {}", ev.rope, ev.index);
        occupancy.write(RopeOccupancy::Release { rope: ev.rope });
    }
}

fn rebuild_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    ropes: Query<Entity, With<Rope>>,
    mut rebuilds: EventWriter<RebuildRope>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    for rope in &ropes {
        rebuilds.write(RebuildRope { rope });
    }
}
