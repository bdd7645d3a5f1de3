//! Shakura-Sunyaev thin accretion disk model.
//!
//! A geometrically thin, optically thick disk in the equatorial plane,
//! radiating as a local blackbody whose temperature falls off with radius
//! according to the classic Shakura & Sunyaev (1973) profile.

use crate::constants::SI_SIGMA_SB;

/// A thin accretion disk between `r_in` and `r_out` (metres, geometric
/// units) around a black hole of mass `mass` (metres) accreting at rate
/// `mass_accretion_rate` (kg/s).
#[derive(Debug, Clone, Copy)]
pub struct Disk {
    pub r_in: f64,
    pub r_out: f64,
    mass: f64,
    mass_accretion_rate: f64,
    t_star: f64,
}

impl Disk {
    /// Construct a disk with the given inner/outer radii, central mass, and
    /// accretion rate. `mass` is in geometric units (metres); the mass that
    /// appears in the `T_*` formula is the corresponding physical mass in
    /// kilograms, passed separately as `mass_kg`.
    pub fn new(r_in: f64, r_out: f64, mass_kg: f64, mass_accretion_rate: f64) -> Self {
        let t_star = Self::characteristic_temperature(mass_kg, mass_accretion_rate, r_in);
        Self {
            r_in,
            r_out,
            mass: mass_kg,
            mass_accretion_rate,
            t_star,
        }
    }

    /// `T_* = [3 G M Mdot / (8 pi sigma r_in^3)]^(1/4)`.
    fn characteristic_temperature(mass_kg: f64, mass_accretion_rate: f64, r_in: f64) -> f64 {
        use crate::constants::SI_G;
        let numerator = 3.0 * SI_G * mass_kg * mass_accretion_rate;
        let denominator = 8.0 * std::f64::consts::PI * SI_SIGMA_SB * r_in.powi(3);
        (numerator / denominator).powf(0.25)
    }

    /// Whether `r` lies within the disk's radial extent.
    #[inline]
    pub fn in_disk(&self, r: f64) -> bool {
        r >= self.r_in && r <= self.r_out
    }

    /// Local disk temperature at radius `r`, in Kelvin.
    ///
    /// `T(r) = T_* (r/r_in)^(-3/4) [1 - sqrt(r_in/r)]^(1/4)` for `r` in
    /// `[r_in, r_out]`, and zero outside.
    pub fn temperature(&self, r: f64) -> f64 {
        if !self.in_disk(r) {
            return 0.0;
        }
        let ratio = r / self.r_in;
        let inner_term = 1.0 - (self.r_in / r).sqrt();
        if inner_term <= 0.0 {
            return 0.0;
        }
        self.t_star * ratio.powf(-0.75) * inner_term.powf(0.25)
    }

    /// Black hole mass (kilograms).
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Mass accretion rate (kg/s).
    pub fn mass_accretion_rate(&self) -> f64 {
        self.mass_accretion_rate
    }

    /// Observed radiance at the point where a photon crosses the disk at
    /// radius `r` and azimuth `phi`, for a black hole of Schwarzschild
    /// radius `rs`: the local blackbody color scaled by the `(D z)^4`
    /// relativistic correction.
    pub fn observed_color(&self, r: f64, phi: f64, rs: f64) -> [f64; 3] {
        let emitted = crate::physics::blackbody::temperature_to_rgb(self.temperature(r));
        let z = crate::physics::redshift::gravitational_factor(r, rs);
        let beta = crate::physics::redshift::keplerian_speed(r, self.mass);
        let doppler = crate::physics::redshift::doppler_factor(beta, phi.cos());
        let scale = crate::physics::redshift::intensity_scaling(doppler, z);
        [
            (emitted[0] * scale).clamp(0.0, 1.0),
            (emitted[1] * scale).clamp(0.0, 1.0),
            (emitted[2] * scale).clamp(0.0, 1.0),
        ]
    }
}
