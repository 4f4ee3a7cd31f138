//! Components tagging the scene entities the simulation drives.

use bevy::prelude::*;

use crate::types::CameraKind;

/// Marker for the launched ball.
///
/// Its `Transform` mirrors
/// [`LaunchSimulation::ball_position`](crate::simulation::LaunchSimulation::ball_position).
#[derive(Component, Reflect, Default, Clone, Copy)]
#[reflect(Component)]
pub struct Ball;

/// Marker for the cone showing launch direction and speed.
///
/// The transform is overwritten with an absolute pose every frame, never
/// composed with the previous one.
#[derive(Component, Reflect, Default, Clone, Copy)]
#[reflect(Component)]
pub struct LaunchIndicator;

/// A camera bound to one of the four viewpoints.
///
/// # Example
/// ```
/// use bevy_launch_viewer::components::ViewCamera;
/// use bevy_launch_viewer::types::CameraKind;
///
/// let camera = ViewCamera(CameraKind::Apex);
/// assert_eq!(camera.0, CameraKind::Apex);
/// ```
#[derive(Component, Reflect, Default, Clone, Copy, PartialEq, Eq, Debug)]
#[reflect(Component)]
pub struct ViewCamera(pub CameraKind);

/// Marker for the heads-up display text node.
#[derive(Component, Reflect, Default, Clone, Copy)]
#[reflect(Component)]
pub struct HudText;

/// Marker for the ground plane.
#[derive(Component, Reflect, Default, Clone, Copy)]
#[reflect(Component)]
pub struct Ground;
