use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A planar movement direction relative to the camera's basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CameraMovement {
    /// Along `+front`.
    Forward,
    /// Along `-front`.
    Backward,
    /// Along `-right`.
    Left,
    /// Along `+right`.
    Right,
}

impl CameraMovement {
    /// All directions in the order the shell applies them each frame.
    pub const ALL: [CameraMovement; 4] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "FORWARD",
            Self::Backward => "BACKWARD",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for CameraMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token names no movement direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown movement direction: {0:?}")]
pub struct ParseMovementError(pub String);

impl FromStr for CameraMovement {
    type Err = ParseMovementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FORWARD" => Ok(Self::Forward),
            "BACKWARD" => Ok(Self::Backward),
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            _ => Err(ParseMovementError(s.to_string())),
        }
    }
}
