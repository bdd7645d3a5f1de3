//! Run-configuration record.
//!
//! `RenderConfig` is the single fallible entry point into the crate: every
//! other computation is a total function over an already-validated
//! configuration.

use crate::constants::{accretion_rate, geometric_mass, schwarzschild_radius_meters, SI_SOLAR_MASS};
use crate::error::ConfigError;
use crate::metric::Schwarzschild;
use crate::physics::Disk;
use crate::raytracer::Camera;

/// ISCO radius in units of `r_s` for a Schwarzschild black hole (`6M = 3 r_s`).
const ISCO_IN_SCHWARZSCHILD_RADII: f64 = 3.0;
/// Outer disk radius in units of `r_s`.
const DISK_OUTER_IN_SCHWARZSCHILD_RADII: f64 = 500.0;

/// The external run-configuration record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Black hole mass, in solar masses. Must be finite and positive.
    pub solar_mass: f64,
    /// Mass accretion rate as a fraction of Eddington. Must be finite and
    /// positive.
    pub eddington_fraction: f64,
    /// Image width in pixels. Must be nonzero.
    pub width: usize,
    /// Image height in pixels. Must be nonzero.
    pub height: usize,
    /// Observer distance from the black hole, in units of `r_s`. Must be > 1.
    pub observer_radius: f64,
    /// Observer inclination above the disk plane, in degrees, `[0, 90]`.
    pub inclination_deg: f64,
    /// Horizontal field of view, in degrees. Must be positive.
    pub fov_deg: f64,
    /// Number of worker threads. Must be at least 1.
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            solar_mass: 10.0,
            eddington_fraction: 0.1,
            width: 800,
            height: 600,
            observer_radius: 100.0,
            inclination_deg: 75.0,
            fov_deg: 45.0,
            threads: 4,
        }
    }
}

impl RenderConfig {
    /// Validate the configuration, returning the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.solar_mass.is_finite() || self.solar_mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.solar_mass));
        }
        if !self.eddington_fraction.is_finite() || self.eddington_fraction <= 0.0 {
            return Err(ConfigError::NonPositiveAccretionRate(self.eddington_fraction));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.observer_radius > 1.0) {
            return Err(ConfigError::InvalidObserverRadius(self.observer_radius));
        }
        if !(0.0..=90.0).contains(&self.inclination_deg) {
            return Err(ConfigError::InvalidInclination(self.inclination_deg));
        }
        if !self.fov_deg.is_finite() || self.fov_deg <= 0.0 {
            return Err(ConfigError::InvalidFov(self.fov_deg));
        }
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }

    /// Construct a validated configuration, or the first violated
    /// constraint.
    pub fn new(
        solar_mass: f64,
        eddington_fraction: f64,
        width: usize,
        height: usize,
        observer_radius: f64,
        inclination_deg: f64,
        fov_deg: f64,
        threads: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            solar_mass,
            eddington_fraction,
            width,
            height,
            observer_radius,
            inclination_deg,
            fov_deg,
            threads,
        };
        config.validate()?;
        Ok(config)
    }

    /// Observer inclination converted to a polar angle: `theta_obs = (90 -
    /// inclination) * pi/180`.
    pub fn theta_obs(&self) -> f64 {
        (90.0 - self.inclination_deg) * std::f64::consts::PI / 180.0
    }

    /// Horizontal field of view in radians.
    pub fn fov_h(&self) -> f64 {
        self.fov_deg * std::f64::consts::PI / 180.0
    }

    /// Vertical field of view, scaled by the aspect ratio:
    /// `fov_v = fov_h * H/W`.
    pub fn fov_v(&self) -> f64 {
        self.fov_h() * self.height as f64 / self.width as f64
    }

    /// Black hole mass in kilograms.
    pub fn mass_kg(&self) -> f64 {
        self.solar_mass * SI_SOLAR_MASS
    }

    /// Schwarzschild radius, in metres.
    pub fn schwarzschild_radius(&self) -> f64 {
        schwarzschild_radius_meters(self.mass_kg())
    }

    /// The Schwarzschild metric implied by this configuration.
    pub fn metric(&self) -> Schwarzschild {
        Schwarzschild::new(geometric_mass(self.mass_kg()))
    }

    /// The accretion disk implied by this configuration.
    pub fn disk(&self) -> Disk {
        let rs = self.schwarzschild_radius();
        let mdot = accretion_rate(self.mass_kg(), self.eddington_fraction);
        Disk::new(
            ISCO_IN_SCHWARZSCHILD_RADII * rs,
            DISK_OUTER_IN_SCHWARZSCHILD_RADII * rs,
            self.mass_kg(),
            mdot,
        )
    }

    /// The observer camera implied by this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(
            self.observer_radius,
            self.theta_obs(),
            self.fov_h(),
            self.fov_v(),
            self.width,
            self.height,
            self.schwarzschild_radius(),
        )
    }
}
