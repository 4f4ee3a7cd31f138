//! Common types and enums for the launch viewer.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One of the four viewpoints the scene can be rendered from.
///
/// # Variants
/// * `Launch` - Fixed camera behind the launch point
/// * `Target` - Camera beyond the landing point, looking back along the trajectory
/// * `Chase` - Camera that translates along with the ball while it flies
/// * `Apex` - Camera hovering above the highest point of the trajectory
///
/// # Example
/// ```
/// use bevy_launch_viewer::types::CameraKind;
///
/// assert_eq!(CameraKind::from_slot(3), Some(CameraKind::Chase));
/// assert_eq!(CameraKind::Chase.slot(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum CameraKind {
    /// Fixed offset from the origin
    #[default]
    Launch,
    /// Beyond the landing point on the landing line
    Target,
    /// Follows the ball incrementally
    Chase,
    /// Above the apex of the trajectory
    Apex,
}

impl CameraKind {
    /// All cameras, in selector order (1..=4).
    pub const ALL: [CameraKind; 4] = [
        CameraKind::Launch,
        CameraKind::Target,
        CameraKind::Chase,
        CameraKind::Apex,
    ];

    /// Maps a 1-based selector slot to a camera.
    ///
    /// # Arguments
    /// * `slot` - Selector number, 1 through 4
    ///
    /// # Returns
    /// The camera bound to that slot, or None for any other number
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1..=4 => Some(Self::ALL[usize::from(slot - 1)]),
            _ => None,
        }
    }

    /// The 1-based selector slot of this camera.
    pub fn slot(&self) -> u8 {
        match self {
            Self::Launch => 1,
            Self::Target => 2,
            Self::Chase => 3,
            Self::Apex => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Launch => "Launch",
            Self::Target => "Target",
            Self::Chase => "Chase",
            Self::Apex => "Apex",
        }
    }

    /// Whether the camera is re-aimed at the ball before every render.
    ///
    /// The chase camera keeps its own orientation and only translates.
    pub fn tracks_ball(&self) -> bool {
        !matches!(self, Self::Chase)
    }
}

/// Lifecycle of a single launch.
///
/// # Variants
/// * `Idle` - Nothing launched since the last reset
/// * `InFlight` - Simulated time is advancing every tick
/// * `Landed` - The ball rests at its landing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum FlightPhase {
    #[default]
    Idle,
    InFlight,
    Landed,
}

/// A discrete control command produced by the input controller.
///
/// Every recognized key press maps to exactly one of these. Repeated key
/// presses (including OS key repeat) produce repeated commands.
///
/// # Example
/// ```
/// use bevy_launch_viewer::types::{CameraKind, LaunchCommand};
///
/// let command = LaunchCommand::SelectCamera(CameraKind::Apex);
/// assert!(command.is_camera_selection());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum LaunchCommand {
    /// Start a flight with the current parameters
    Launch,
    /// Raise the elevation angle by one step
    IncreaseElevation,
    /// Lower the elevation angle by one step
    DecreaseElevation,
    /// Rotate the azimuth clockwise by one step
    IncreaseAzimuth,
    /// Rotate the azimuth counter-clockwise by one step
    DecreaseAzimuth,
    /// Raise the launch speed by one step
    IncreaseSpeed,
    /// Lower the launch speed by one step
    DecreaseSpeed,
    /// Render from a different camera
    SelectCamera(CameraKind),
    /// Return the ball to the origin and clear flight bookkeeping
    Reset,
}

impl LaunchCommand {
    pub fn is_camera_selection(&self) -> bool {
        matches!(self, Self::SelectCamera(_))
    }
}

/// What a launch command does when the previous flight has already landed.
///
/// # Variants
/// * `FromOrigin` - Snap the ball and chase camera back to their start positions first
/// * `FromRestingPlace` - Keep the ball where it landed and translate from there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum RelaunchPolicy {
    #[default]
    FromOrigin,
    FromRestingPlace,
}
