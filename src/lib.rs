//! # Bevy Launch Viewer
//!
//! Interactive projectile launch viewer for Bevy 0.18.
//!
//! ## Features
//! - Closed-form projectile kinematics, evaluated once per fixed tick
//! - Four viewpoints: launch, target, chase and apex cameras
//! - Keyboard control of azimuth, elevation and launch speed
//! - Heads-up display and a landing report
//! - Headless simulation core for tests and scripted runs
//!
//! ## Quick Start
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_launch_viewer::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(LaunchViewerPluginGroup)
//!         .run();
//! }
//! ```

pub mod components;
pub mod events;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod trajectory;
pub mod types;

pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::*;
    pub use crate::resources::*;
    pub use crate::simulation::*;
    pub use crate::trajectory::*;
    pub use crate::types::*;
    pub use crate::LaunchViewerPluginGroup;
    pub use crate::{LaunchCorePlugin, LaunchDebugPlugin, LaunchInputPlugin, LaunchScenePlugin};
}

use bevy::prelude::*;

/// Main plugin group that includes every launch viewer subsystem.
///
/// Requires `DefaultPlugins` (windowing, input, rendering, gizmos). For a
/// headless run add [`LaunchCorePlugin`] on its own.
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_launch_viewer::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(LaunchViewerPluginGroup)
///     .run();
/// ```
#[derive(Default)]
pub struct LaunchViewerPluginGroup;

impl PluginGroup for LaunchViewerPluginGroup {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(LaunchCorePlugin)
            .add(LaunchInputPlugin)
            .add(LaunchScenePlugin)
            .add(LaunchDebugPlugin)
    }
}

/// Simulation core: state, fixed tick, landing report.
///
/// Uses the [`SimulationConfig`](resources::SimulationConfig) already in the
/// world if one was inserted before the plugin, otherwise the defaults. A
/// config that fails [`validate`](resources::SimulationConfig::validate) is
/// logged and replaced by the defaults. The fixed timestep is set from
/// `tick_hz`.
///
/// # Systems
/// - `apply_control_commands` - Applies queued control commands (FixedUpdate)
/// - `step_simulation` - Advances the flight by one tick (FixedUpdate)
/// - `log_trajectory_summary` - Logs the landing report (Update)
pub struct LaunchCorePlugin;

impl Plugin for LaunchCorePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<resources::SimulationConfig>()
            .register_type::<components::Ball>()
            .register_type::<components::LaunchIndicator>()
            .register_type::<components::ViewCamera>()
            .register_type::<components::HudText>()
            .register_type::<components::Ground>()
            .init_resource::<resources::SimulationConfig>();

        let mut config = app.world().resource::<resources::SimulationConfig>().clone();
        if let Err(err) = config.validate() {
            error!("Invalid simulation config, falling back to defaults: {err:#}");
            config = resources::SimulationConfig::default();
            app.insert_resource(config.clone());
        }

        app.insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            .insert_resource(simulation::LaunchSimulation::new(&config))
            .add_message::<events::ControlCommand>()
            .add_message::<events::TrajectoryLanded>()
            .add_systems(
                FixedUpdate,
                (
                    systems::tick::apply_control_commands,
                    systems::tick::step_simulation,
                )
                    .chain(),
            )
            .add_systems(Update, systems::hud::log_trajectory_summary);
    }
}

/// Keyboard input plugin.
///
/// # Systems
/// - `read_keyboard_commands` - Maps key presses to control commands
pub struct LaunchInputPlugin;

impl Plugin for LaunchInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<resources::KeyBindings>()
            .add_systems(Update, systems::input::read_keyboard_commands);
    }
}

/// Scene plugin: spawns the scene and mirrors simulation state onto it.
///
/// # Systems
/// - `spawn_scene` - Ball, indicator, ground, lights, cameras, HUD (Startup)
/// - `sync_scene_transforms` - Ball and indicator transforms
/// - `sync_view_cameras` - Camera positions, active camera, look-at
/// - `update_hud_text` - HUD line
pub struct LaunchScenePlugin;

impl Plugin for LaunchScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::scene::spawn_scene).add_systems(
            Update,
            (
                systems::scene::sync_scene_transforms,
                systems::camera::sync_view_cameras,
                systems::hud::update_hud_text,
            ),
        );
    }
}

/// Debug plugin for trajectory preview gizmos.
pub struct LaunchDebugPlugin;

impl Plugin for LaunchDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, systems::debug::draw_trajectory_preview);
    }
}
