//! The launch simulation state machine.
//!
//! All mutable simulation state lives in a single [`LaunchSimulation`]
//! resource. Input is applied through [`LaunchSimulation::apply`] and time is
//! advanced through [`LaunchSimulation::tick`]; neither touches the ECS world,
//! so the whole loop can be driven headlessly.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::resources::SimulationConfig;
use crate::trajectory::{LaunchVelocity, Trajectory};
use crate::types::{CameraKind, FlightPhase, LaunchCommand, RelaunchPolicy};

/// The user-controlled launch parameters.
///
/// # Fields
/// * `azimuth_deg` - Heading in degrees, unbounded (wrapped only for display)
/// * `elevation_deg` - Angle above the horizon in degrees, kept within the configured bounds
/// * `speed_kmh` - Launch speed in km/h, never below the configured minimum
///
/// # Example
/// ```
/// use bevy_launch_viewer::resources::SimulationConfig;
/// use bevy_launch_viewer::simulation::LaunchParameters;
///
/// let config = SimulationConfig::default();
/// let mut params = LaunchParameters::from_config(&config);
/// params.adjust_azimuth(-10.0);
/// assert_eq!(params.display_azimuth(), 350.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LaunchParameters {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub speed_kmh: f64,
}

impl LaunchParameters {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            azimuth_deg: config.initial_azimuth,
            elevation_deg: config
                .initial_elevation
                .clamp(config.min_elevation, config.max_elevation),
            speed_kmh: config.initial_speed.max(config.min_speed),
        }
    }

    /// Changes the elevation, clamped to `[min_elevation, max_elevation]`.
    pub fn adjust_elevation(&mut self, delta: f64, config: &SimulationConfig) {
        self.elevation_deg =
            (self.elevation_deg + delta).clamp(config.min_elevation, config.max_elevation);
    }

    /// Changes the azimuth. No wrapping happens here.
    pub fn adjust_azimuth(&mut self, delta: f64) {
        self.azimuth_deg += delta;
    }

    /// Changes the speed, never going below `min_speed`.
    pub fn adjust_speed(&mut self, delta: f64, config: &SimulationConfig) {
        self.speed_kmh = (self.speed_kmh + delta).max(config.min_speed);
    }

    /// Azimuth wrapped into `[0, 360)`.
    pub fn display_azimuth(&self) -> f64 {
        self.azimuth_deg.rem_euclid(360.0)
    }

    /// The heads-up display line for these parameters.
    pub fn hud_line(&self) -> String {
        format!(
            "Velocity = {} km/h  |  Theta = {}  |  Phi = {}",
            self.speed_kmh,
            self.display_azimuth(),
            self.elevation_deg
        )
    }
}

/// Bookkeeping for the current (or last) flight.
///
/// `velocity` and `flight_time` are refreshed every tick, in or out of
/// flight, so they always describe the current parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightState {
    pub phase: FlightPhase,
    /// Simulated seconds since launch
    pub elapsed: f64,
    pub velocity: LaunchVelocity,
    /// Model time to return to launch height (seconds)
    pub flight_time: f64,
    /// Highest point reached this flight, relative to the launch height
    pub max_height: f64,
    /// Trajectory position at the previous tick, relative to the launch point
    pub previous_position: DVec3,
    /// Where the current flight started
    pub launch_origin: DVec3,
    /// Wall-clock time of the launch command (seconds)
    pub launched_at: Option<f64>,
}

impl FlightState {
    pub fn is_in_flight(&self) -> bool {
        self.phase == FlightPhase::InFlight
    }
}

/// Positions of the four cameras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub launch: DVec3,
    pub target: DVec3,
    pub chase: DVec3,
    pub apex: DVec3,
}

impl CameraRig {
    fn new(config: &SimulationConfig) -> Self {
        Self {
            launch: config.launch_camera_position(),
            target: DVec3::ZERO,
            chase: config.chase_camera_home(),
            apex: DVec3::ZERO,
        }
    }

    pub fn position(&self, kind: CameraKind) -> DVec3 {
        match kind {
            CameraKind::Launch => self.launch,
            CameraKind::Target => self.target,
            CameraKind::Chase => self.chase,
            CameraKind::Apex => self.apex,
        }
    }
}

/// Absolute pose of the launch indicator rod.
///
/// Derived fresh from the launch parameters every tick; nothing is composed
/// with the previous frame's pose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorPose {
    /// Rotation about world Y (radians)
    pub yaw: f64,
    /// Rotation about world X (radians), applied before the yaw
    pub pitch: f64,
    /// Stretch along the rod's own axis
    pub length_scale: f64,
}

impl IndicatorPose {
    pub fn from_parameters(params: &LaunchParameters, config: &SimulationConfig) -> Self {
        Self {
            yaw: (-params.azimuth_deg).to_radians(),
            pitch: (params.elevation_deg - 90.0).to_radians(),
            length_scale: 1.0 + params.speed_kmh / config.indicator_scale_divisor,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw as f32) * Quat::from_rotation_x(self.pitch as f32)
    }

    pub fn scale(&self) -> Vec3 {
        Vec3::new(1.0, self.length_scale as f32, 1.0)
    }

    /// Unit vector the rod points along.
    pub fn direction(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: Vec3::ZERO,
            rotation: self.rotation(),
            scale: self.scale(),
        }
    }
}

/// Statistics reported when a flight lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySummary {
    /// Highest point reached (meters)
    pub max_height: f64,
    /// Horizontal distance travelled (meters)
    pub distance: f64,
    /// Flight time predicted by the model (seconds)
    pub model_flight_time: f64,
    /// Wall-clock time between launch and landing (seconds)
    pub wall_clock_flight_time: f64,
}

impl TrajectorySummary {
    /// The four labeled report lines.
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Max Height = {:.3} m", self.max_height),
            format!("Distance = {:.3} m", self.distance),
            format!("Model flight time = {:.3} s", self.model_flight_time),
            format!("Actual elapsed time = {:.3} s", self.wall_clock_flight_time),
        ]
    }
}

/// Complete state of the launch viewer.
///
/// # Example
/// ```
/// use bevy_launch_viewer::resources::SimulationConfig;
/// use bevy_launch_viewer::simulation::LaunchSimulation;
/// use bevy_launch_viewer::types::{FlightPhase, LaunchCommand};
///
/// let config = SimulationConfig::default();
/// let mut sim = LaunchSimulation::new(&config);
/// sim.apply(LaunchCommand::Launch, &config, 0.0);
///
/// let mut summary = None;
/// for tick in 1..1000 {
///     summary = sim.tick(&config, tick as f64 / 30.0);
///     if summary.is_some() {
///         break;
///     }
/// }
/// assert_eq!(sim.flight().phase, FlightPhase::Landed);
/// assert!(summary.unwrap().distance > 0.0);
/// ```
#[derive(Resource, Debug, Clone)]
pub struct LaunchSimulation {
    params: LaunchParameters,
    flight: FlightState,
    cameras: CameraRig,
    ball_position: DVec3,
    indicator: IndicatorPose,
    active_camera: CameraKind,
    hud: String,
}

impl LaunchSimulation {
    pub fn new(config: &SimulationConfig) -> Self {
        let params = LaunchParameters::from_config(config);
        let mut sim = Self {
            params,
            flight: FlightState::default(),
            cameras: CameraRig::new(config),
            ball_position: DVec3::ZERO,
            indicator: IndicatorPose::default(),
            active_camera: CameraKind::default(),
            hud: String::new(),
        };
        sim.refresh_derived(config);
        sim
    }

    pub fn params(&self) -> &LaunchParameters {
        &self.params
    }

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    pub fn cameras(&self) -> &CameraRig {
        &self.cameras
    }

    pub fn ball_position(&self) -> DVec3 {
        self.ball_position
    }

    pub fn indicator(&self) -> &IndicatorPose {
        &self.indicator
    }

    pub fn active_camera(&self) -> CameraKind {
        self.active_camera
    }

    pub fn hud_text(&self) -> &str {
        &self.hud
    }

    pub fn trajectory(&self, config: &SimulationConfig) -> Trajectory {
        Trajectory::from_parameters(&self.params, config)
    }

    /// Applies one control command.
    ///
    /// # Arguments
    /// * `command` - The command to apply
    /// * `config` - Simulation configuration (steps, clamps, offsets)
    /// * `now` - Wall-clock time in seconds, recorded on launch
    pub fn apply(&mut self, command: LaunchCommand, config: &SimulationConfig, now: f64) {
        match command {
            LaunchCommand::Launch => self.launch(config, now),
            LaunchCommand::IncreaseElevation => {
                self.params.adjust_elevation(config.elevation_step, config)
            }
            LaunchCommand::DecreaseElevation => {
                self.params.adjust_elevation(-config.elevation_step, config)
            }
            LaunchCommand::IncreaseAzimuth => self.params.adjust_azimuth(config.azimuth_step),
            LaunchCommand::DecreaseAzimuth => self.params.adjust_azimuth(-config.azimuth_step),
            LaunchCommand::IncreaseSpeed => self.params.adjust_speed(config.speed_step, config),
            LaunchCommand::DecreaseSpeed => self.params.adjust_speed(-config.speed_step, config),
            LaunchCommand::SelectCamera(kind) => {
                debug!("Switching to {} camera", kind.name());
                self.active_camera = kind;
            }
            LaunchCommand::Reset => self.reset(config),
        }
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// Derived values (velocity, flight time, HUD, apex/target cameras,
    /// indicator) are refreshed first, then the flight advances by
    /// `config.time_step` if a launch is in progress.
    ///
    /// # Returns
    /// The trajectory summary on the tick the ball lands, otherwise None
    pub fn tick(&mut self, config: &SimulationConfig, now: f64) -> Option<TrajectorySummary> {
        let trajectory = self.refresh_derived(config);
        if !self.flight.is_in_flight() {
            return None;
        }

        let previous_elapsed = self.flight.elapsed;
        self.flight.elapsed += config.time_step;
        let position = trajectory.position_at(self.flight.elapsed);

        // Ticks rarely hit T/2 exactly; count the apex when a tick steps over it.
        let apex_time = trajectory.apex_time();
        let mut height = position.y;
        if previous_elapsed < apex_time && self.flight.elapsed >= apex_time {
            height = height.max(trajectory.apex_height());
        }
        if height > self.flight.max_height {
            self.flight.max_height = height;
        }

        if self.flight.elapsed >= self.flight.flight_time {
            return Some(self.land(&trajectory, config, now));
        }

        let delta = position - self.flight.previous_position;
        self.ball_position += delta;
        self.cameras.chase += delta;
        self.flight.previous_position = position;
        None
    }

    /// Returns the ball and chase camera to their start positions and clears
    /// flight bookkeeping.
    pub fn reset(&mut self, config: &SimulationConfig) {
        debug!("Resetting launch");
        self.flight.phase = FlightPhase::Idle;
        self.flight.elapsed = 0.0;
        self.flight.max_height = 0.0;
        self.flight.previous_position = DVec3::ZERO;
        self.flight.launch_origin = DVec3::ZERO;
        self.flight.launched_at = None;
        self.ball_position = DVec3::ZERO;
        self.cameras.chase = config.chase_camera_home();
    }

    /// Where the next flight would start if launched now.
    ///
    /// After a landing this is the resting ball under
    /// [`RelaunchPolicy::FromRestingPlace`] and the origin otherwise.
    pub fn next_launch_origin(&self, config: &SimulationConfig) -> DVec3 {
        match (self.flight.phase, config.relaunch) {
            (FlightPhase::Landed, RelaunchPolicy::FromRestingPlace) => self.ball_position,
            (FlightPhase::Landed, RelaunchPolicy::FromOrigin) => DVec3::ZERO,
            _ => self.flight.launch_origin,
        }
    }

    fn launch(&mut self, config: &SimulationConfig, now: f64) {
        match self.flight.phase {
            FlightPhase::InFlight => {
                debug!("Launch ignored, ball already in flight");
                return;
            }
            FlightPhase::Landed => match config.relaunch {
                RelaunchPolicy::FromOrigin => self.reset(config),
                RelaunchPolicy::FromRestingPlace => {
                    self.flight.launch_origin = self.ball_position;
                }
            },
            FlightPhase::Idle => {}
        }

        debug!(
            "Launching at {} km/h, theta {}, phi {}",
            self.params.speed_kmh,
            self.params.display_azimuth(),
            self.params.elevation_deg
        );
        self.flight.phase = FlightPhase::InFlight;
        self.flight.elapsed = 0.0;
        self.flight.max_height = 0.0;
        self.flight.previous_position = DVec3::ZERO;
        self.flight.launched_at = Some(now);
    }

    fn land(
        &mut self,
        trajectory: &Trajectory,
        config: &SimulationConfig,
        now: f64,
    ) -> TrajectorySummary {
        self.flight.phase = FlightPhase::Landed;
        self.flight.elapsed = self.flight.flight_time;

        let origin = self.flight.launch_origin;
        let landing = trajectory.landing_position(config.sink_offset);
        self.ball_position = DVec3::new(origin.x + landing.x, landing.y, origin.z + landing.z);
        self.cameras.chase = self.ball_position + config.chase_camera_home();
        self.flight.previous_position = trajectory.position_at(self.flight.flight_time);

        let summary = TrajectorySummary {
            max_height: self.flight.max_height,
            distance: trajectory.landing_distance(),
            model_flight_time: self.flight.flight_time,
            wall_clock_flight_time: self
                .flight
                .launched_at
                .map_or(0.0, |launched_at| now - launched_at),
        };
        debug!("Ball landed after {:.3} s", summary.model_flight_time);
        summary
    }

    /// Tick steps 1-4: velocity, HUD, apex and target cameras, indicator.
    fn refresh_derived(&mut self, config: &SimulationConfig) -> Trajectory {
        let trajectory = self.trajectory(config);
        self.flight.velocity = trajectory.velocity();
        self.flight.flight_time = trajectory.flight_time();

        self.hud = self.params.hud_line();

        let apex = trajectory.apex_position();
        self.cameras.apex = apex + DVec3::Y * config.apex_camera_height;
        self.cameras.target =
            trajectory.beyond_landing(config.target_camera_distance, config.target_camera_height);

        self.indicator = IndicatorPose::from_parameters(&self.params, config);
        trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fly_until_landed(
        sim: &mut LaunchSimulation,
        config: &SimulationConfig,
    ) -> TrajectorySummary {
        for tick in 1..10_000 {
            if let Some(summary) = sim.tick(config, tick as f64 / config.tick_hz) {
                return summary;
            }
        }
        panic!("flight never landed");
    }

    #[test]
    fn test_hud_wraps_azimuth() {
        let config = SimulationConfig::default();
        let mut params = LaunchParameters::from_config(&config);
        params.azimuth_deg = -10.0;
        assert_eq!(params.display_azimuth(), 350.0);
        params.azimuth_deg = 370.0;
        assert_eq!(params.display_azimuth(), 10.0);
        params.azimuth_deg = -370.0;
        assert_eq!(params.display_azimuth(), 350.0);

        assert_eq!(
            params.hud_line(),
            "Velocity = 100 km/h  |  Theta = 350  |  Phi = 30"
        );
    }

    #[test]
    fn test_elevation_clamps() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        for _ in 0..100 {
            sim.apply(LaunchCommand::DecreaseElevation, &config, 0.0);
        }
        assert_eq!(sim.params().elevation_deg, 5.0);
        for _ in 0..200 {
            sim.apply(LaunchCommand::IncreaseElevation, &config, 0.0);
        }
        assert_eq!(sim.params().elevation_deg, 90.0);
    }

    #[test]
    fn test_speed_never_below_minimum() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        for _ in 0..20 {
            sim.apply(LaunchCommand::DecreaseSpeed, &config, 0.0);
        }
        assert_eq!(sim.params().speed_kmh, 1.0);
        sim.apply(LaunchCommand::IncreaseSpeed, &config, 0.0);
        assert_eq!(sim.params().speed_kmh, 11.0);
    }

    #[test]
    fn test_azimuth_unbounded() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        for _ in 0..370 {
            sim.apply(LaunchCommand::IncreaseAzimuth, &config, 0.0);
        }
        assert_eq!(sim.params().azimuth_deg, 370.0);
        assert_eq!(sim.params().display_azimuth(), 10.0);
    }

    #[test]
    fn test_flight_lands_at_closed_form_distance() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);
        assert!(sim.flight().is_in_flight());

        let summary = fly_until_landed(&mut sim, &config);
        let trajectory = sim.trajectory(&config);

        assert_eq!(sim.flight().phase, FlightPhase::Landed);
        assert!((summary.distance - trajectory.landing_distance()).abs() < 1e-9);
        assert!((summary.max_height - trajectory.apex_height()).abs() < 1e-9);
        assert_eq!(summary.model_flight_time, trajectory.flight_time());
        assert!(summary.wall_clock_flight_time > 0.0);

        let landing = trajectory.landing_position(config.sink_offset);
        assert!((sim.ball_position() - landing).length() < 1e-9);
        assert!((sim.cameras().chase - (landing + config.chase_camera_home())).length() < 1e-9);
    }

    #[test]
    fn test_max_height_non_decreasing_during_flight() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);

        let mut last = 0.0;
        while sim.flight().is_in_flight() {
            sim.tick(&config, 0.0);
            assert!(sim.flight().max_height >= last);
            assert!(sim.flight().elapsed <= sim.flight().flight_time);
            last = sim.flight().max_height;
        }
    }

    #[test]
    fn test_ball_and_chase_move_together() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);
        for _ in 0..5 {
            sim.tick(&config, 0.0);
            let offset = sim.cameras().chase - sim.ball_position();
            assert!((offset - config.chase_camera_home()).length() < 1e-9);
        }
        let expected = sim.trajectory(&config).position_at(5.0 * config.time_step);
        assert!((sim.ball_position() - expected).length() < 1e-9);
    }

    #[test]
    fn test_reset_during_flight() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);
        for _ in 0..10 {
            sim.tick(&config, 0.0);
        }
        assert!(sim.flight().max_height > 0.0);

        sim.apply(LaunchCommand::Reset, &config, 0.0);
        assert!(!sim.flight().is_in_flight());
        assert_eq!(sim.flight().phase, FlightPhase::Idle);
        assert_eq!(sim.flight().elapsed, 0.0);
        assert_eq!(sim.flight().max_height, 0.0);
        assert_eq!(sim.ball_position(), DVec3::ZERO);
        assert_eq!(sim.cameras().chase, config.chase_camera_home());

        // Ticks after a reset leave the ball alone.
        sim.tick(&config, 0.0);
        assert_eq!(sim.ball_position(), DVec3::ZERO);
    }

    #[test]
    fn test_camera_selection_keeps_positions() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.tick(&config, 0.0);
        let before = *sim.cameras();
        for kind in CameraKind::ALL {
            sim.apply(LaunchCommand::SelectCamera(kind), &config, 0.0);
            assert_eq!(sim.active_camera(), kind);
            assert_eq!(*sim.cameras(), before);
        }
    }

    #[test]
    fn test_derived_cameras_follow_parameters_before_launch() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        let apex_before = sim.cameras().apex;
        let target_before = sim.cameras().target;

        sim.apply(LaunchCommand::IncreaseSpeed, &config, 0.0);
        sim.tick(&config, 0.0);

        assert!(sim.cameras().apex.y > apex_before.y);
        assert!(sim.cameras().target.z < target_before.z);
        assert_eq!(sim.cameras().target.y, config.target_camera_height);
        assert_eq!(sim.cameras().launch, config.launch_camera_position());
        assert!(!sim.flight().is_in_flight());
    }

    #[test]
    fn test_indicator_points_along_launch_direction() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        for _ in 0..37 {
            sim.apply(LaunchCommand::IncreaseAzimuth, &config, 0.0);
        }
        sim.apply(LaunchCommand::IncreaseElevation, &config, 0.0);
        sim.tick(&config, 0.0);

        let expected = sim.trajectory(&config).velocity().as_dvec3().normalize().as_vec3();
        let direction = sim.indicator().direction();
        assert!((direction - expected).length() < 1e-5);
        assert!((sim.indicator().scale().y - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_indicator_pose_does_not_accumulate() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.tick(&config, 0.0);
        let first = *sim.indicator();
        for _ in 0..1000 {
            sim.tick(&config, 0.0);
        }
        assert_eq!(*sim.indicator(), first);
    }

    #[test]
    fn test_launch_ignored_while_in_flight() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);
        sim.tick(&config, 0.0);
        sim.tick(&config, 0.0);
        let elapsed = sim.flight().elapsed;
        sim.apply(LaunchCommand::Launch, &config, 5.0);
        assert_eq!(sim.flight().elapsed, elapsed);
        assert_eq!(sim.flight().launched_at, Some(0.0));
    }

    #[test]
    fn test_relaunch_from_origin_after_landing() {
        let config = SimulationConfig::default();
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);
        let first = fly_until_landed(&mut sim, &config);
        assert_eq!(sim.next_launch_origin(&config), DVec3::ZERO);

        sim.apply(LaunchCommand::Launch, &config, 10.0);
        assert_eq!(sim.ball_position(), DVec3::ZERO);
        assert_eq!(sim.flight().elapsed, 0.0);
        assert_eq!(sim.flight().max_height, 0.0);

        let second = fly_until_landed(&mut sim, &config);
        assert!((first.distance - second.distance).abs() < 1e-9);
        let landing = sim.trajectory(&config).landing_position(config.sink_offset);
        assert!((sim.ball_position() - landing).length() < 1e-9);
    }

    #[test]
    fn test_relaunch_from_resting_place() {
        let config = SimulationConfig {
            relaunch: RelaunchPolicy::FromRestingPlace,
            ..Default::default()
        };
        let mut sim = LaunchSimulation::new(&config);
        sim.apply(LaunchCommand::Launch, &config, 0.0);
        fly_until_landed(&mut sim, &config);
        let resting = sim.ball_position();
        assert_eq!(sim.next_launch_origin(&config), resting);

        sim.apply(LaunchCommand::Launch, &config, 0.0);
        assert_eq!(sim.ball_position(), resting);
        assert_eq!(sim.flight().launch_origin, resting);
        assert_eq!(sim.next_launch_origin(&config), resting);
        fly_until_landed(&mut sim, &config);

        let distance = sim.trajectory(&config).landing_distance();
        assert!((sim.ball_position().z - (resting.z - distance)).abs() < 1e-9);
        assert_eq!(sim.ball_position().y, config.sink_offset);
    }

    #[test]
    fn test_summary_lines_are_labeled() {
        let summary = TrajectorySummary {
            max_height: 1.5,
            distance: 20.0,
            model_flight_time: 2.0,
            wall_clock_flight_time: 0.75,
        };
        let lines = summary.lines();
        assert!(lines[0].starts_with("Max Height"));
        assert!(lines[1].starts_with("Distance"));
        assert!(lines[2].starts_with("Model flight time"));
        assert!(lines[3].starts_with("Actual elapsed time"));
    }
}
