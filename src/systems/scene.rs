//! Scene setup and transform mirroring for the ball and launch indicator.

use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;

use crate::components::{Ball, Ground, HudText, LaunchIndicator, ViewCamera};
use crate::resources::SimulationConfig;
use crate::simulation::LaunchSimulation;
use crate::types::CameraKind;

/// Sky color behind the scene.
pub const SKY_COLOR: Color = Color::srgb(
    0x69 as f32 / 255.0,
    0x73 as f32 / 255.0,
    0xf5 as f32 / 255.0,
);

const BALL_RADIUS: f32 = 0.5;
const INDICATOR_RADIUS: f32 = 0.1;
const INDICATOR_LENGTH: f32 = 3.0;
/// Raises the cone so its base sits near the launch point.
const INDICATOR_BASE_OFFSET: f32 = 1.25;
const GROUND_SIZE: f32 = 100_000.0;
const GROUND_HEIGHT: f32 = -0.5;
const CAMERA_FOV_DEGREES: f32 = 32.0;
const CAMERA_NEAR: f32 = 1.0;
const CAMERA_FAR: f32 = 10_000.0;

/// Spawn the ball, launch indicator, ground, lights, view cameras and HUD.
///
/// # Arguments
/// * `commands` - Bevy Commands for spawning
/// * `meshes` - Mesh assets
/// * `materials` - Material assets
/// * `config` - Simulation configuration
/// * `simulation` - Current simulation state (for initial transforms)
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SimulationConfig>,
    simulation: Res<LaunchSimulation>,
) {
    commands.insert_resource(ClearColor(SKY_COLOR));

    // Ball
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.176, 0.180, 0.176),
            ..default()
        })),
        Transform::from_translation(simulation.ball_position().as_vec3()),
        Ball,
        Name::new("Ball"),
    ));

    // Launch indicator
    let cone = Mesh::from(Cone::new(INDICATOR_RADIUS, INDICATOR_LENGTH))
        .translated_by(Vec3::new(0.0, INDICATOR_BASE_OFFSET, 0.0));
    commands.spawn((
        Mesh3d(meshes.add(cone)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            unlit: true,
            ..default()
        })),
        simulation.indicator().to_transform(),
        LaunchIndicator,
        Name::new("Launch Indicator"),
    ));

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.55, 0.25),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, GROUND_HEIGHT, 0.0),
        Ground,
        Name::new("Ground"),
    ));

    // Sun straight overhead, plus a dim fill so shaded sides stay readable
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 1.0, 0.8),
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.25, 0.25, 0.25),
            illuminance: 2_000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.5, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // View cameras
    for kind in CameraKind::ALL {
        let translation = simulation.cameras().position(kind).as_vec3();
        let mut transform = Transform::from_translation(translation);
        if kind.tracks_ball() && translation != Vec3::ZERO {
            transform.look_at(Vec3::ZERO, Vec3::Y);
        }
        commands.spawn((
            Camera3d::default(),
            Camera {
                is_active: kind == simulation.active_camera(),
                ..default()
            },
            Projection::from(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..default()
            }),
            transform,
            ViewCamera(kind),
            Name::new(format!("{} Camera", kind.name())),
        ));
    }

    // HUD overlay camera: always active, draws only UI
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));

    commands.spawn((
        Text::new(simulation.hud_text()),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));

    debug!(
        "Scene ready: {} km/h, phi {}, gravity {}",
        simulation.params().speed_kmh,
        simulation.params().elevation_deg,
        config.gravity
    );
}

/// Mirror the ball position and launch indicator pose onto their entities.
///
/// The indicator transform is replaced outright each frame.
pub fn sync_scene_transforms(
    simulation: Res<LaunchSimulation>,
    mut balls: Query<&mut Transform, (With<Ball>, Without<LaunchIndicator>)>,
    mut indicators: Query<&mut Transform, (With<LaunchIndicator>, Without<Ball>)>,
) {
    if !simulation.is_changed() {
        return;
    }
    let ball = simulation.ball_position().as_vec3();
    for mut transform in balls.iter_mut() {
        transform.translation = ball;
    }
    let pose = simulation.indicator().to_transform();
    for mut transform in indicators.iter_mut() {
        *transform = pose;
    }
}
