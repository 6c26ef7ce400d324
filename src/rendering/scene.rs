//! Scene setup
//!
//! Spawns the static parts of the 3D scene: camera, lighting, ground plane,
//! and the origin axes marker. The axes marker is three thin cylinders (X red,
//! Y green, Z blue) with a small cyan sphere at the origin, handy for reading
//! the movement axes while playing.

use crate::core::GameSettings;
use crate::game::systems::CameraController;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Side length of the square ground plane.
const GROUND_SIZE: f32 = 10.0;

/// Length of each origin axis cylinder.
const AXIS_LENGTH: f32 = 5.0;

/// Axis radius as a fraction of its length.
const AXIS_RADIUS_RATIO: f32 = 0.004;

/// Spawn camera, light, ground, and (optionally) the origin axes.
///
/// Runs in `PostStartup` so the persisted [`GameSettings`] are already loaded.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<GameSettings>,
) {
    // Camera, looking down at the play field
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 12.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
        CameraController::default(),
        Name::new("Camera"),
    ));

    // Lighting
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 100000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
        Name::new("Light"),
    ));

    // Ground, just below the token centers so spheres rest on it
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.5, 0.5, 0.5),
            ..default()
        })),
        Transform::from_xyz(0.0, -0.5, 0.0),
        Name::new("Ground"),
    ));

    if settings.show_origin_axes {
        spawn_origin_axes(&mut commands, &mut *meshes, &mut *materials);
    }
}

/// Spawn the origin axes marker.
///
/// Cylinders are aligned with Y by default; X and Z axes are rotated into
/// place and every cylinder is shifted by half its length so all three start
/// at the origin.
fn spawn_origin_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let radius = AXIS_LENGTH * AXIS_RADIUS_RATIO;
    let axis_mesh = meshes.add(Cylinder::new(radius, AXIS_LENGTH));
    let dot_mesh = meshes.add(Sphere::new(radius * 4.0));

    let axes = [
        (
            "X Axis",
            Color::srgb(1.0, 0.0, 0.0),
            Quat::from_rotation_z(-FRAC_PI_2),
            Vec3::X,
        ),
        (
            "Y Axis",
            Color::srgb(0.0, 1.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
        ),
        (
            "Z Axis",
            Color::srgb(0.0, 0.0, 1.0),
            Quat::from_rotation_x(FRAC_PI_2),
            Vec3::Z,
        ),
    ];

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Name::new("Origin Axes"),
        ))
        .with_children(|parent| {
            for (name, color, rotation, direction) in axes {
                parent.spawn((
                    Mesh3d(axis_mesh.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: color,
                        unlit: true,
                        ..default()
                    })),
                    Transform {
                        translation: direction * AXIS_LENGTH / 2.0,
                        rotation,
                        ..default()
                    },
                    Name::new(name),
                ));
            }

            parent.spawn((
                Mesh3d(dot_mesh),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.0, 1.0, 1.0),
                    unlit: true,
                    ..default()
                })),
                Transform::default(),
                Name::new("Origin"),
            ));
        });
}
