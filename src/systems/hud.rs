//! Heads-up display and landing report.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::components::HudText;
use crate::events::TrajectoryLanded;
use crate::simulation::LaunchSimulation;

/// Copy the simulation's HUD line into the HUD text node.
pub fn update_hud_text(
    simulation: Res<LaunchSimulation>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    if !simulation.is_changed() {
        return;
    }
    for mut text in hud.iter_mut() {
        if text.0 != simulation.hud_text() {
            text.0 = simulation.hud_text().to_string();
        }
    }
}

/// Log the four-line trajectory report for every landing.
pub fn log_trajectory_summary(mut landed: MessageReader<TrajectoryLanded>) {
    for message in landed.read() {
        info!("--------------------------------");
        for line in message.summary.lines() {
            info!("{line}");
        }
    }
}
