//! Messages for the launch viewer.
//!
//! Note: In Bevy 0.18, buffered events use the `Message` trait instead of `Event`.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::simulation::TrajectorySummary;
use crate::types::LaunchCommand;

/// A control command waiting to be applied at the next simulation tick.
///
/// The keyboard system writes these; anything else (scripted demos, tests,
/// UI buttons) can write them too.
///
/// # Example
/// ```
/// use bevy_launch_viewer::events::ControlCommand;
/// use bevy_launch_viewer::types::LaunchCommand;
///
/// let message = ControlCommand::new(LaunchCommand::Launch);
/// assert_eq!(message.command, LaunchCommand::Launch);
/// ```
#[derive(Message, Clone, Copy, Debug)]
pub struct ControlCommand {
    pub command: LaunchCommand,
}

impl ControlCommand {
    pub fn new(command: LaunchCommand) -> Self {
        Self { command }
    }
}

/// Sent on the tick a flight lands.
///
/// # Fields
/// * `summary` - Max height, distance, model and wall-clock flight time
/// * `landing_point` - World-space resting position of the ball
#[derive(Message, Clone, Copy, Debug)]
pub struct TrajectoryLanded {
    pub summary: TrajectorySummary,
    pub landing_point: Vec3,
}
