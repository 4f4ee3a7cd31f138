//! Global resources for the launch viewer.

use std::path::Path;

use anyhow::{bail, Context, Result};
use bevy::math::DVec3;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{CameraKind, LaunchCommand, RelaunchPolicy};

/// Tunable constants for the simulation, cameras and controls.
///
/// Every field has a default matching the stock viewer. A JSON document
/// may override any subset of fields; missing fields keep their defaults.
///
/// # Fields
/// * `gravity` - Vertical acceleration in m/s², negative for downward
/// * `kmh_to_ms` - Conversion factor from the speed unit shown on the HUD to m/s
/// * `time_step` - Simulated seconds advanced per tick
/// * `tick_hz` - Wall-clock rate of the simulation tick
/// * `sink_offset` - Height the ball rests at after landing
///
/// # Example
/// ```
/// use bevy_launch_viewer::resources::SimulationConfig;
///
/// let config = SimulationConfig::from_json_str(r#"{ "speed_step": 5.0 }"#).unwrap();
/// assert_eq!(config.speed_step, 5.0);
/// assert_eq!(config.gravity, -9.81);
/// ```
#[derive(Resource, Reflect, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct SimulationConfig {
    /// Gravity (m/s²)
    pub gravity: f64,
    /// km/h to m/s
    pub kmh_to_ms: f64,
    /// Simulated time per tick (seconds)
    pub time_step: f64,
    /// Simulation ticks per wall-clock second
    pub tick_hz: f64,
    /// Resting height after landing (meters)
    pub sink_offset: f64,
    /// Lowest allowed elevation (degrees)
    pub min_elevation: f64,
    /// Highest allowed elevation (degrees)
    pub max_elevation: f64,
    /// Elevation change per key press (degrees)
    pub elevation_step: f64,
    /// Azimuth change per key press (degrees)
    pub azimuth_step: f64,
    /// Speed change per key press (km/h)
    pub speed_step: f64,
    /// Lowest allowed speed (km/h)
    pub min_speed: f64,
    /// Azimuth at startup (degrees)
    pub initial_azimuth: f64,
    /// Elevation at startup (degrees)
    pub initial_elevation: f64,
    /// Speed at startup (km/h)
    pub initial_speed: f64,
    /// Fixed position of the launch camera
    pub launch_camera_offset: [f64; 3],
    /// Resting position of the chase camera relative to the ball
    pub chase_camera_offset: [f64; 3],
    /// Distance of the target camera beyond the landing point (meters)
    pub target_camera_distance: f64,
    /// Height of the target camera (meters)
    pub target_camera_height: f64,
    /// Height of the apex camera above the apex (meters)
    pub apex_camera_height: f64,
    /// Speed that doubles the length of the launch indicator (km/h)
    pub indicator_scale_divisor: f64,
    /// Behavior of a launch issued after the previous flight landed
    pub relaunch: RelaunchPolicy,
    /// Draw the predicted arc with gizmos
    pub debug_draw: bool,
}

impl Default for SimulationConfig {
    /// Creates the stock configuration.
    ///
    /// Default values:
    /// - Gravity: 9.81 m/s² downward
    /// - 0.1 s of simulated time per tick, 30 ticks per second
    /// - Elevation clamped to [5°, 90°], speed at least 1 km/h
    /// - Launch at 100 km/h, 30° elevation, heading 0°
    fn default() -> Self {
        Self {
            gravity: -9.81,
            kmh_to_ms: 5.0 / 18.0,
            time_step: 0.1,
            tick_hz: 30.0,
            sink_offset: -0.33,
            min_elevation: 5.0,
            max_elevation: 90.0,
            elevation_step: 1.0,
            azimuth_step: 1.0,
            speed_step: 10.0,
            min_speed: 1.0,
            initial_azimuth: 0.0,
            initial_elevation: 30.0,
            initial_speed: 100.0,
            launch_camera_offset: [0.0, 3.0, 15.0],
            chase_camera_offset: [0.0, 0.5, 15.0],
            target_camera_distance: 15.0,
            target_camera_height: 3.0,
            apex_camera_height: 5.0,
            indicator_scale_divisor: 1000.0,
            relaunch: RelaunchPolicy::FromOrigin,
            debug_draw: false,
        }
    }
}

impl SimulationConfig {
    /// Parses a (possibly partial) JSON configuration and validates it.
    ///
    /// # Errors
    /// Fails on malformed JSON or on values rejected by [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("failed to parse simulation config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read simulation config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Checks the values the simulation relies on.
    pub fn validate(&self) -> Result<()> {
        if !(self.gravity < 0.0) {
            bail!("gravity must be negative, got {}", self.gravity);
        }
        if !(self.kmh_to_ms > 0.0) {
            bail!("kmh_to_ms must be positive, got {}", self.kmh_to_ms);
        }
        if !(self.time_step > 0.0) {
            bail!("time_step must be positive, got {}", self.time_step);
        }
        if !(self.tick_hz > 0.0) {
            bail!("tick_hz must be positive, got {}", self.tick_hz);
        }
        if !(self.min_elevation > 0.0
            && self.min_elevation <= self.max_elevation
            && self.max_elevation <= 90.0)
        {
            bail!(
                "elevation bounds must satisfy 0 < min <= max <= 90, got [{}, {}]",
                self.min_elevation,
                self.max_elevation
            );
        }
        if !(self.elevation_step > 0.0 && self.azimuth_step > 0.0 && self.speed_step > 0.0) {
            bail!("angle and speed steps must be positive");
        }
        if !(self.min_speed > 0.0) {
            bail!("min_speed must be positive, got {}", self.min_speed);
        }
        if !(self.indicator_scale_divisor > 0.0) {
            bail!(
                "indicator_scale_divisor must be positive, got {}",
                self.indicator_scale_divisor
            );
        }
        Ok(())
    }

    pub fn launch_camera_position(&self) -> DVec3 {
        DVec3::from_array(self.launch_camera_offset)
    }

    pub fn chase_camera_home(&self) -> DVec3 {
        DVec3::from_array(self.chase_camera_offset)
    }
}

/// Keyboard layout for the input controller.
///
/// Keys that are not bound are ignored. The stock layout is:
/// L launch, W/S elevation, A/D azimuth, Z/X speed, 1-4 cameras, R reset.
///
/// # Example
/// ```
/// use bevy::prelude::*;
/// use bevy_launch_viewer::resources::KeyBindings;
/// use bevy_launch_viewer::types::LaunchCommand;
///
/// let bindings = KeyBindings::default();
/// assert_eq!(bindings.command_for(KeyCode::KeyL), Some(LaunchCommand::Launch));
/// assert_eq!(bindings.command_for(KeyCode::KeyQ), None);
/// ```
#[derive(Resource, Clone, Debug)]
pub struct KeyBindings {
    pub bindings: Vec<(KeyCode, LaunchCommand)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::KeyL, LaunchCommand::Launch),
                (KeyCode::KeyW, LaunchCommand::IncreaseElevation),
                (KeyCode::KeyA, LaunchCommand::DecreaseAzimuth),
                (KeyCode::KeyS, LaunchCommand::DecreaseElevation),
                (KeyCode::KeyD, LaunchCommand::IncreaseAzimuth),
                (KeyCode::KeyZ, LaunchCommand::DecreaseSpeed),
                (KeyCode::KeyX, LaunchCommand::IncreaseSpeed),
                (KeyCode::Digit1, LaunchCommand::SelectCamera(CameraKind::Launch)),
                (KeyCode::Digit2, LaunchCommand::SelectCamera(CameraKind::Target)),
                (KeyCode::Digit3, LaunchCommand::SelectCamera(CameraKind::Chase)),
                (KeyCode::Digit4, LaunchCommand::SelectCamera(CameraKind::Apex)),
                (KeyCode::KeyR, LaunchCommand::Reset),
            ],
        }
    }
}

impl KeyBindings {
    /// Looks up the command bound to a key.
    pub fn command_for(&self, key: KeyCode) -> Option<LaunchCommand> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, command)| *command)
    }

    /// Binds `key` to `command`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, command: LaunchCommand) {
        self.bindings.retain(|(bound, _)| *bound != key);
        self.bindings.push((key, command));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "time_step": 0.05, "relaunch": "FromRestingPlace" }"#,
        )
        .unwrap();
        assert_eq!(config.time_step, 0.05);
        assert_eq!(config.relaunch, RelaunchPolicy::FromRestingPlace);
        assert_eq!(config.initial_speed, 100.0);
        assert_eq!(config.launch_camera_offset, [0.0, 3.0, 15.0]);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = SimulationConfig::from_json_str(r#"{ "gravity": 9.81 }"#).unwrap_err();
        assert!(format!("{err:#}").contains("gravity"));
    }

    #[test]
    fn test_rejects_inverted_elevation_bounds() {
        let config = SimulationConfig {
            min_elevation: 60.0,
            max_elevation: 30.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(SimulationConfig::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SimulationConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn test_every_command_has_a_default_key() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.command_for(KeyCode::KeyR), Some(LaunchCommand::Reset));
        for kind in CameraKind::ALL {
            assert!(bindings
                .bindings
                .iter()
                .any(|(_, command)| *command == LaunchCommand::SelectCamera(kind)));
        }
    }

    #[test]
    fn test_rebinding_replaces_old_binding() {
        let mut bindings = KeyBindings::default();
        bindings.bind(KeyCode::KeyL, LaunchCommand::Reset);
        bindings.bind(KeyCode::Space, LaunchCommand::Launch);
        assert_eq!(bindings.command_for(KeyCode::KeyL), Some(LaunchCommand::Reset));
        assert_eq!(bindings.command_for(KeyCode::Space), Some(LaunchCommand::Launch));
    }
}
