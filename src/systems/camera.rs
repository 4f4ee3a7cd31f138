//! Camera policy - mirrors the simulation's camera rig onto camera entities.

use bevy::prelude::*;

use crate::components::ViewCamera;
use crate::simulation::LaunchSimulation;

/// Position every view camera and activate only the selected one.
///
/// The active camera is re-aimed at the ball unless it is the chase camera,
/// which keeps its orientation and only translates. Switching cameras never
/// moves any of them.
///
/// # Arguments
/// * `simulation` - The simulation state holding camera positions
/// * `cameras` - Query for the view cameras
pub fn sync_view_cameras(
    simulation: Res<LaunchSimulation>,
    mut cameras: Query<(&ViewCamera, &mut Camera, &mut Transform)>,
) {
    let active = simulation.active_camera();
    let ball = simulation.ball_position().as_vec3();

    for (view, mut camera, mut transform) in cameras.iter_mut() {
        let is_active = view.0 == active;
        if camera.is_active != is_active {
            camera.is_active = is_active;
        }

        transform.translation = simulation.cameras().position(view.0).as_vec3();
        if is_active && view.0.tracks_ball() && transform.translation != ball {
            transform.look_at(ball, Vec3::Y);
        }
    }
}
