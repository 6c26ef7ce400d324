//! Game messages
//!
//! The HUD, completion screen, keyboard input, and swipe recognition all talk
//! to the game systems through these buffered messages, which keeps input
//! sources interchangeable.

use bevy::prelude::*;

/// One of the four fixed movement directions on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    /// Unit offset on the ground plane. Forward is away from the default
    /// camera (negative Z).
    pub fn offset(self) -> Vec3 {
        match self {
            MoveDirection::Forward => Vec3::NEG_Z,
            MoveDirection::Backward => Vec3::Z,
            MoveDirection::Left => Vec3::NEG_X,
            MoveDirection::Right => Vec3::X,
        }
    }
}

/// Message requesting one player movement step.
#[derive(Message, Debug, Clone, Copy)]
pub struct MoveCommand {
    pub direction: MoveDirection,
}

/// Message requesting advancement to the next round (or completion, after the
/// final round).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct AdvanceRound;

/// Message requesting a full game reset back to round 1.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResetGame;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_unit_length() {
        for direction in [
            MoveDirection::Forward,
            MoveDirection::Backward,
            MoveDirection::Left,
            MoveDirection::Right,
        ] {
            assert_eq!(direction.offset().length(), 1.0);
            assert_eq!(direction.offset().y, 0.0, "movement stays on the ground plane");
        }
    }

    #[test]
    fn test_opposite_directions_cancel() {
        assert_eq!(
            MoveDirection::Forward.offset() + MoveDirection::Backward.offset(),
            Vec3::ZERO
        );
        assert_eq!(
            MoveDirection::Left.offset() + MoveDirection::Right.offset(),
            Vec3::ZERO
        );
    }
}
