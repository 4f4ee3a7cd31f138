use std::time::Duration;

use anyhow::Result;
use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy_launch_viewer::prelude::*;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let tick = Duration::from_secs_f64(1.0 / config.tick_hz);

    println!("Starting headless launch simulation...");

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(tick)))
        .insert_resource(config)
        .add_plugins(LaunchCorePlugin)
        .add_systems(Startup, script_launch)
        .add_systems(Update, (report_landing, print_progress))
        .run();

    Ok(())
}

/// Queue a few parameter changes followed by a launch.
fn script_launch(mut commands: MessageWriter<ControlCommand>) {
    for _ in 0..15 {
        commands.write(ControlCommand::new(LaunchCommand::IncreaseElevation));
    }
    for _ in 0..30 {
        commands.write(ControlCommand::new(LaunchCommand::IncreaseAzimuth));
    }
    commands.write(ControlCommand::new(LaunchCommand::Launch));
}

fn print_progress(simulation: Res<LaunchSimulation>, mut timer: Local<f32>, time: Res<Time>) {
    *timer += time.delta_secs();
    if *timer > 0.5 && simulation.flight().is_in_flight() {
        *timer = 0.0;
        let position = simulation.ball_position();
        println!(
            "[INFO] t = {:.1}s, ball at ({:.2}, {:.2}, {:.2})",
            simulation.flight().elapsed,
            position.x,
            position.y,
            position.z
        );
    }
}

fn report_landing(mut landed: MessageReader<TrajectoryLanded>, mut exit: MessageWriter<AppExit>) {
    for message in landed.read() {
        println!("[LANDED] {}", message.summary.lines().join(" | "));
        exit.write(AppExit::Success);
    }
}
