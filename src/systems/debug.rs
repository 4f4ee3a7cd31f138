use bevy::prelude::*;

use crate::resources::SimulationConfig;
use crate::simulation::LaunchSimulation;

const PREVIEW_SEGMENTS: usize = 64;

/// Draw the predicted arc for the current launch parameters.
///
/// Draws the full arc, the apex and the landing point from where the next
/// flight starts: the resting ball once landed, the launch origin otherwise.
pub fn draw_trajectory_preview(
    mut gizmos: Gizmos,
    simulation: Res<LaunchSimulation>,
    config: Res<SimulationConfig>,
) {
    if !config.debug_draw {
        return;
    }

    let origin = simulation.next_launch_origin(&config);
    let trajectory = simulation.trajectory(&config);

    let points = trajectory
        .sample(PREVIEW_SEGMENTS)
        .into_iter()
        .map(|point| (origin + point).as_vec3());
    gizmos.linestrip(points, Color::srgb(1.0, 1.0, 0.0));

    // Apex and landing markers
    let apex = (origin + trajectory.apex_position()).as_vec3();
    gizmos.sphere(apex, 0.3, Color::srgb(0.0, 1.0, 0.0));

    let landing = (origin + trajectory.position_at(trajectory.flight_time())).as_vec3();
    gizmos.sphere(landing, 0.3, Color::srgb(1.0, 0.0, 0.0));
}

