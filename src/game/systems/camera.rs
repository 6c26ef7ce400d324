//! Free camera control
//!
//! Active only while the HUD's camera button has enabled free control
//! (see [`crate::game::resources::CameraMode`]):
//!
//! - **W/A/S/D**: pan across the ground plane
//! - **Mouse wheel**: raise or lower the camera
//! - **Left mouse drag**: rotate (yaw/pitch)
//!
//! Panning projects the camera's forward and right vectors onto the ground
//! plane so the viewing angle is preserved while moving. Tuning values come
//! from [`crate::core::GameSettings`].

use crate::core::GameSettings;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Component marking the camera as player-controllable
///
/// Pitch and yaw are extracted from the spawn transform on the first update so
/// enabling free control never jumps the view.
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct CameraController {
    /// Rotation around the X axis, radians, clamped to avoid gimbal lock
    pub pitch: f32,

    /// Rotation around the Y axis, radians
    pub yaw: f32,

    /// Whether pitch/yaw have been extracted from the transform yet
    pub initialized: bool,
}

/// System panning the camera with WASD
pub fn camera_movement_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<GameSettings>,
    time: Res<Time>,
    mut query: Query<&mut Transform, With<CameraController>>,
) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    let mut input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        input.x += 1.0;
    }
    if input == Vec3::ZERO {
        return;
    }

    // project onto the ground plane so panning never changes the height
    let forward = transform.forward();
    let flat_forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = transform.right();
    let flat_right = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();

    let direction = (flat_forward * -input.z + flat_right * input.x).normalize_or_zero();
    transform.translation += direction * settings.camera.move_speed * time.delta_secs();
}

/// System zooming the camera with the mouse wheel
pub fn camera_zoom_system(
    scroll: Res<AccumulatedMouseScroll>,
    settings: Res<GameSettings>,
    mut query: Query<&mut Transform, With<CameraController>>,
) {
    if scroll.delta.y == 0.0 {
        return;
    }
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    let height = transform.translation.y - scroll.delta.y * settings.camera.zoom_speed;
    transform.translation.y = height.clamp(settings.camera.min_height, settings.camera.max_height);
}

/// System rotating the camera with a left mouse drag
pub fn camera_rotation_system(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    settings: Res<GameSettings>,
    mut query: Query<(&mut Transform, &mut CameraController)>,
) {
    let Ok((mut transform, mut controller)) = query.single_mut() else {
        return;
    };

    if !controller.initialized {
        let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        controller.yaw = yaw;
        controller.pitch = pitch;
        controller.initialized = true;
    }

    if !buttons.pressed(MouseButton::Left) || motion.delta == Vec2::ZERO {
        return;
    }

    let sensitivity = settings.camera.rotation_sensitivity / 180.0;
    controller.yaw -= motion.delta.x * sensitivity;
    controller.pitch = (controller.pitch - motion.delta.y * sensitivity)
        .clamp(-FRAC_PI_2 + 0.01, FRAC_PI_2 - 0.01);

    transform.rotation = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);
}
