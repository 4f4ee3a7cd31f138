//! Closed-form projectile kinematics.
//!
//! Everything here is a pure function of the launch parameters and elapsed
//! time. There is no integration step: positions are evaluated directly from
//! `y(t) = vy·t + ½g·t²`, `x(t) = vx·t`, `z(t) = vz·t`.
//!
//! Math is done in `f64` so that derived quantities (flight time, landing
//! distance, apex) stay well inside test tolerances; callers convert to
//! `Vec3` only when writing transforms.

use bevy::math::DVec3;

use crate::resources::SimulationConfig;
use crate::simulation::LaunchParameters;

/// Launch velocity decomposed into its vertical and horizontal parts.
///
/// Azimuth 0 points along -Z; increasing azimuth turns clockwise when seen
/// from above (towards +X).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LaunchVelocity {
    /// Vertical component (m/s)
    pub vertical: f64,
    /// Horizontal magnitude (m/s)
    pub horizontal: f64,
    /// Horizontal X component (m/s)
    pub x: f64,
    /// Horizontal Z component (m/s)
    pub z: f64,
}

impl LaunchVelocity {
    /// Decomposes a launch speed along the given angles.
    ///
    /// # Arguments
    /// * `speed` - Launch speed in m/s
    /// * `elevation_deg` - Angle above the horizon in degrees
    /// * `azimuth_deg` - Horizontal heading in degrees
    pub fn from_angles(speed: f64, elevation_deg: f64, azimuth_deg: f64) -> Self {
        let (sin_phi, cos_phi) = elevation_deg.to_radians().sin_cos();
        let (sin_theta, cos_theta) = azimuth_deg.to_radians().sin_cos();
        let horizontal = speed * cos_phi;
        Self {
            vertical: speed * sin_phi,
            horizontal,
            x: horizontal * sin_theta,
            z: -horizontal * cos_theta,
        }
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.vertical, self.z)
    }
}

/// The analytic trajectory for one set of launch parameters.
///
/// # Example
/// ```
/// use bevy::math::DVec3;
/// use bevy_launch_viewer::trajectory::Trajectory;
///
/// let trajectory = Trajectory::new(100.0 * 5.0 / 18.0, 30.0, 0.0, -9.81);
/// assert_eq!(trajectory.position_at(0.0), DVec3::ZERO);
/// assert!(trajectory.flight_time() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory {
    velocity: LaunchVelocity,
    azimuth_rad: f64,
    gravity: f64,
}

impl Trajectory {
    /// Builds a trajectory from a speed already expressed in m/s.
    ///
    /// # Arguments
    /// * `speed` - Launch speed (m/s)
    /// * `elevation_deg` - Elevation above the horizon (degrees)
    /// * `azimuth_deg` - Heading (degrees)
    /// * `gravity` - Vertical acceleration, negative for downward (m/s²)
    pub fn new(speed: f64, elevation_deg: f64, azimuth_deg: f64, gravity: f64) -> Self {
        Self {
            velocity: LaunchVelocity::from_angles(speed, elevation_deg, azimuth_deg),
            azimuth_rad: azimuth_deg.to_radians(),
            gravity,
        }
    }

    /// Builds the trajectory for the current launch parameters, converting
    /// the speed from km/h with the configured factor.
    pub fn from_parameters(params: &LaunchParameters, config: &SimulationConfig) -> Self {
        Self::new(
            params.speed_kmh * config.kmh_to_ms,
            params.elevation_deg,
            params.azimuth_deg,
            config.gravity,
        )
    }

    pub fn velocity(&self) -> LaunchVelocity {
        self.velocity
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Position relative to the launch point after `t` seconds.
    pub fn position_at(&self, t: f64) -> DVec3 {
        DVec3::new(
            self.velocity.x * t,
            self.velocity.vertical * t + 0.5 * self.gravity * t * t,
            self.velocity.z * t,
        )
    }

    /// Time until the ball returns to launch height.
    ///
    /// Zero when the ball has no upward speed or gravity does not pull it
    /// back down; such a launch is treated as already landed.
    pub fn flight_time(&self) -> f64 {
        if self.velocity.vertical <= 0.0 || self.gravity >= 0.0 {
            return 0.0;
        }
        2.0 * self.velocity.vertical / -self.gravity
    }

    /// Horizontal distance covered over the whole flight.
    pub fn landing_distance(&self) -> f64 {
        self.velocity.horizontal * self.flight_time()
    }

    /// Where the ball comes to rest, pushed down by `sink` so it sits in the ground.
    pub fn landing_position(&self, sink: f64) -> DVec3 {
        let distance = self.landing_distance();
        let (sin_theta, cos_theta) = self.azimuth_rad.sin_cos();
        DVec3::new(distance * sin_theta, sink, -distance * cos_theta)
    }

    /// Time at which the ball is highest.
    pub fn apex_time(&self) -> f64 {
        self.flight_time() / 2.0
    }

    pub fn apex_position(&self) -> DVec3 {
        self.position_at(self.apex_time())
    }

    pub fn apex_height(&self) -> f64 {
        self.apex_position().y
    }

    /// Point on the landing line `offset` metres beyond the landing point, at `height`.
    pub fn beyond_landing(&self, offset: f64, height: f64) -> DVec3 {
        let distance = self.landing_distance() + offset;
        let (sin_theta, cos_theta) = self.azimuth_rad.sin_cos();
        DVec3::new(distance * sin_theta, height, -distance * cos_theta)
    }

    /// Evenly spaced points along the arc, both ends included.
    pub fn sample(&self, segments: usize) -> Vec<DVec3> {
        let segments = segments.max(1);
        let flight_time = self.flight_time();
        (0..=segments)
            .map(|i| self.position_at(flight_time * i as f64 / segments as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KMH_TO_MS: f64 = 5.0 / 18.0;
    const G: f64 = -9.81;
    const EPS: f64 = 1e-6;

    #[test]
    fn test_reference_launch_matches_closed_form() {
        let trajectory = Trajectory::new(100.0 * KMH_TO_MS, 30.0, 0.0, G);
        let v = 100.0 * KMH_TO_MS;

        let vy = v * 0.5;
        let vh = v * 3.0_f64.sqrt() / 2.0;
        let t = 2.0 * vy / 9.81;
        let d = vh * t;
        let apex = vy * vy / (2.0 * 9.81);

        let velocity = trajectory.velocity();
        assert!((velocity.vertical - vy).abs() < EPS);
        assert!((velocity.horizontal - vh).abs() < EPS);
        assert!((trajectory.flight_time() - t).abs() < EPS);
        assert!((trajectory.landing_distance() - d).abs() < EPS);
        assert!((trajectory.apex_height() - apex).abs() < EPS);

        // Azimuth 0 heads straight down -Z.
        let landing = trajectory.landing_position(-0.33);
        assert!(landing.x.abs() < EPS);
        assert!((landing.z + d).abs() < EPS);
        assert_eq!(landing.y, -0.33);
    }

    #[test]
    fn test_flight_time_positive_across_elevations() {
        for elevation in 5..=90 {
            for speed_kmh in [1.0, 10.0, 100.0, 1000.0] {
                let trajectory = Trajectory::new(speed_kmh * KMH_TO_MS, elevation as f64, 45.0, G);
                let t = trajectory.flight_time();
                assert!(t > 0.0 && t.is_finite(), "elevation {elevation}, speed {speed_kmh}");
            }
        }
    }

    #[test]
    fn test_starts_at_origin() {
        let trajectory = Trajectory::new(33.0, 47.0, 123.0, G);
        assert_eq!(trajectory.position_at(0.0), DVec3::ZERO);
    }

    #[test]
    fn test_landing_distance_independent_of_azimuth() {
        let reference = Trajectory::new(30.0, 40.0, 0.0, G).landing_distance();
        for azimuth in [-725.0, -90.0, 17.0, 180.0, 359.0, 3600.0] {
            let trajectory = Trajectory::new(30.0, 40.0, azimuth, G);
            let landing = trajectory.landing_position(0.0);
            let horizontal = (landing.x * landing.x + landing.z * landing.z).sqrt();
            assert!((horizontal - reference).abs() < 1e-9, "azimuth {azimuth}");
        }
    }

    #[test]
    fn test_returns_to_launch_height() {
        let trajectory = Trajectory::new(50.0, 60.0, 10.0, G);
        let landing = trajectory.position_at(trajectory.flight_time());
        assert!(landing.y.abs() < 1e-9);
    }

    #[test]
    fn test_apex_is_highest_sample() {
        let trajectory = Trajectory::new(40.0, 70.0, 0.0, G);
        let apex = trajectory.apex_height();
        for point in trajectory.sample(200) {
            assert!(point.y <= apex + 1e-9);
        }
    }

    #[test]
    fn test_non_positive_vertical_speed_is_already_landed() {
        let flat = Trajectory::new(30.0, 0.0, 0.0, G);
        assert_eq!(flat.flight_time(), 0.0);
        assert_eq!(flat.landing_distance(), 0.0);

        let downward = Trajectory::new(30.0, -10.0, 0.0, G);
        assert_eq!(downward.flight_time(), 0.0);
        assert_eq!(downward.apex_position(), DVec3::ZERO);
    }

    #[test]
    fn test_beyond_landing_on_landing_line() {
        let trajectory = Trajectory::new(30.0, 45.0, 90.0, G);
        let point = trajectory.beyond_landing(15.0, 3.0);
        // Azimuth 90 heads along +X.
        assert!((point.x - (trajectory.landing_distance() + 15.0)).abs() < 1e-9);
        assert!(point.z.abs() < 1e-9);
        assert_eq!(point.y, 3.0);
    }
}
