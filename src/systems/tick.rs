//! Simulation tick - applies queued commands and advances the flight.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::events::{ControlCommand, TrajectoryLanded};
use crate::resources::SimulationConfig;
use crate::simulation::LaunchSimulation;

/// Apply every control command queued since the previous tick.
///
/// Runs in FixedUpdate before [`step_simulation`], so input is always seen
/// by the next tick and never in the middle of one.
pub fn apply_control_commands(
    time: Res<Time<Real>>,
    config: Res<SimulationConfig>,
    mut simulation: ResMut<LaunchSimulation>,
    mut commands: MessageReader<ControlCommand>,
) {
    let now = time.elapsed_secs_f64();
    for message in commands.read() {
        simulation.apply(message.command, &config, now);
    }
}

/// Advance the launch simulation by one fixed tick.
///
/// The simulated time step comes from [`SimulationConfig::time_step`], not
/// from the fixed timestep duration, so the ball flies at the configured
/// pace regardless of how often the tick runs.
///
/// # Arguments
/// * `time` - Real time, used for the wall-clock flight duration
/// * `config` - Simulation configuration
/// * `simulation` - The simulation state
/// * `landed` - Writer for landing messages
pub fn step_simulation(
    time: Res<Time<Real>>,
    config: Res<SimulationConfig>,
    mut simulation: ResMut<LaunchSimulation>,
    mut landed: MessageWriter<TrajectoryLanded>,
) {
    if let Some(summary) = simulation.tick(&config, time.elapsed_secs_f64()) {
        landed.write(TrajectoryLanded {
            summary,
            landing_point: simulation.ball_position().as_vec3(),
        });
    }
}
