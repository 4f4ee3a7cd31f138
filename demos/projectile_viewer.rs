//! Interactive projectile launch viewer.
//!
//! Controls:
//! - W / S: raise / lower elevation
//! - A / D: turn azimuth counter-clockwise / clockwise
//! - Z / X: decrease / increase launch speed
//! - 1-4: launch, target, chase, apex camera
//! - L: launch, R: reset
//!
//! Pass a JSON file as the first argument to override any simulation setting,
//! e.g. `{ "speed_step": 5.0, "debug_draw": true }`.

use anyhow::Result;
use bevy::prelude::*;
use bevy_launch_viewer::prelude::*;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Projectile Launch Viewer".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins(LaunchViewerPluginGroup)
        .run();

    Ok(())
}
