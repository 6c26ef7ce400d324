//! Camera control mode resource

use bevy::prelude::*;

/// Resource tracking whether free camera control is enabled
///
/// Toggled by the HUD's camera button. While enabled, drags rotate the camera
/// and WASD pans it; swipe recognition is suspended so the two drag gestures
/// never fight over the mouse.
#[derive(Resource, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct CameraMode {
    /// Whether the player may move the camera freely
    pub adjustable: bool,
}

impl CameraMode {
    pub fn toggle(&mut self) {
        self.adjustable = !self.adjustable;
    }
}

/// Run condition: free camera control is enabled.
pub fn camera_adjustable(mode: Res<CameraMode>) -> bool {
    mode.adjustable
}

/// Run condition: the camera is fixed, so drags are swipes.
pub fn camera_locked(mode: Res<CameraMode>) -> bool {
    !mode.adjustable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_mode_starts_locked() {
        assert!(!CameraMode::default().adjustable);
    }

    #[test]
    fn test_toggle_flips_mode() {
        let mut mode = CameraMode::default();
        mode.toggle();
        assert!(mode.adjustable);
        mode.toggle();
        assert!(!mode.adjustable);
    }
}
