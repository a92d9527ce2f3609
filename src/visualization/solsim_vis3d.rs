use bevy::prelude::*;
use bevy::math::primitives::Sphere;
use bevy::window::PrimaryWindow;

use crate::simulation::input::FrameInput;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyId, NMat4};

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodySlot(pub usize);

/// Component tagging the single impactor sphere
#[derive(Component)]
struct ImpactorSlot;

/// Component tagging the scene camera driven by the core's view matrix
#[derive(Component)]
struct SceneCamera;

/// Digit keys acting as the external view-mode selector
const MODE_KEYS: [KeyCode; 5] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];

/// Convenience entrypoint: run the Bevy viewer on a built scenario
pub fn run_3d(scenario: Scenario) {
    println!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (sim_step_3d, sync_transforms_3d).chain())
        .run();
}

/// Startup system: spawn camera, light, one sphere per body, and the impactor
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera transform is overwritten every frame from the core's view matrix
    commands.spawn((
        Camera3dBundle {
            camera: Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
                ..Default::default()
            },
            transform: Transform::IDENTITY,
            ..Default::default()
        },
        SceneCamera,
    ));

    // Point light at the origin, where the sun sits
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2_000_000.0,
            range: 500.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // One unit sphere per body; position, spin and size all come from the
    // core's local-to-world transform
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(1.0).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: color_for_body(b.id),
                    unlit: b.id == BodyId::Sun,
                    ..Default::default()
                }),
                transform: to_transform(&b.transform),
                ..Default::default()
            },
            BodySlot(i),
        ));
    }

    // Impactor sphere, hidden until spawned
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(1.0).mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(0.6, 0.55, 0.5),
                ..Default::default()
            }),
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        ImpactorSlot,
    ));
}

/// Per-frame input gathering and simulation step
fn sim_step_3d(
    mut scenario: ResMut<Scenario>,
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let center = Vec2::new(window.width() * 0.5, window.height() * 0.5);
    let cursor = window.cursor_position().unwrap_or(center);

    let select_mode = MODE_KEYS
        .iter()
        .position(|k| keys.just_pressed(*k))
        .map(|i| i as u8);

    let input = FrameInput {
        delta_seconds: f64::from(time.delta_seconds()),
        forward: keys.pressed(KeyCode::KeyW),
        back: keys.pressed(KeyCode::KeyS),
        left: keys.pressed(KeyCode::KeyA),
        right: keys.pressed(KeyCode::KeyD),
        spawn_impactor: keys.just_pressed(KeyCode::Space),
        cursor_x: f64::from(cursor.x),
        cursor_y: f64::from(cursor.y),
        viewport_width: f64::from(window.width()),
        viewport_height: f64::from(window.height()),
        select_mode,
    };

    scenario.step(&input);
}

/// Apply the core's transforms to the scene: bodies, impactor, camera
fn sync_transforms_3d(
    scenario: Res<Scenario>,
    mut bodies: Query<(&BodySlot, &mut Transform, &mut Visibility), Without<ImpactorSlot>>,
    mut impactor: Query<
        (&mut Transform, &mut Visibility),
        (With<ImpactorSlot>, Without<BodySlot>, Without<SceneCamera>),
    >,
    mut camera: Query<
        &mut Transform,
        (With<SceneCamera>, Without<BodySlot>, Without<ImpactorSlot>),
    >,
) {
    for (BodySlot(i), mut transform, mut visibility) in &mut bodies {
        if let Some(b) = scenario.system.bodies.get(*i) {
            if b.destroyed {
                *visibility = Visibility::Hidden;
            } else {
                *transform = to_transform(&b.transform);
            }
        }
    }

    if let Ok((mut transform, mut visibility)) = impactor.get_single_mut() {
        let imp = &scenario.impactor;
        if imp.active && !imp.destroyed {
            *visibility = Visibility::Visible;
            *transform = to_transform(&imp.transform);
        } else {
            *visibility = Visibility::Hidden;
        }
    }

    if let Ok(mut transform) = camera.get_single_mut() {
        // the view matrix is already camera-to-world
        *transform = to_transform(&scenario.camera.view);
    }
}

/// Convert an f64 column-major nalgebra matrix into a Bevy transform
fn to_transform(m: &NMat4) -> Transform {
    let mut cols = [0.0f32; 16];
    for (dst, src) in cols.iter_mut().zip(m.as_slice()) {
        *dst = *src as f32;
    }
    Transform::from_matrix(Mat4::from_cols_array(&cols))
}

fn color_for_body(id: BodyId) -> Color {
    match id {
        BodyId::Earth => Color::srgb(0.2, 0.4, 0.9),
        BodyId::Sun => Color::srgb(1.0, 0.85, 0.3),
        BodyId::Moon => Color::srgb(0.7, 0.7, 0.7),
        BodyId::Mercury => Color::srgb(0.6, 0.55, 0.5),
        BodyId::Venus => Color::srgb(0.9, 0.75, 0.4),
        BodyId::Mars => Color::srgb(0.85, 0.35, 0.2),
        BodyId::Jupiter => Color::srgb(0.8, 0.65, 0.45),
        BodyId::Saturn => Color::srgb(0.85, 0.8, 0.55),
        BodyId::Uranus => Color::srgb(0.5, 0.8, 0.85),
        BodyId::Neptune => Color::srgb(0.3, 0.45, 0.9),
    }
}
