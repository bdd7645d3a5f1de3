//! Physical constants in SI units, and the geometric-unit conventions used
//! by the geodesic integrator.
//!
//! The integrator works in geometric units where lengths, times, and masses
//! are all expressed in metres (`G = c = 1`). Conversion from the physical
//! inputs (solar masses, Kelvin, etc.) happens once, at [`crate::config`]
//! construction time.

/// Speed of light in m/s.
pub const SI_C: f64 = 299_792_458.0;

/// Gravitational constant in m^3 kg^-1 s^-2.
pub const SI_G: f64 = 6.674_30e-11;

/// Solar mass in kilograms.
pub const SI_SOLAR_MASS: f64 = 1.988_92e30;

/// Stefan-Boltzmann constant in W m^-2 K^-4.
pub const SI_SIGMA_SB: f64 = 5.670_374_419e-8;

/// Planck constant in J*s.
pub const SI_H: f64 = 6.626_070_15e-34;

/// Boltzmann constant in J/K.
pub const SI_KB: f64 = 1.380_649e-23;

/// Eddington luminosity of one solar mass, in watts.
///
/// `L_Edd(M) = 1.26e38 * (M / M_sun) W`.
pub const EDDINGTON_LUMINOSITY_PER_SOLAR_MASS: f64 = 1.26e38;

/// Standard thin-disk radiative efficiency, `eta = 0.1`.
pub const DISK_EFFICIENCY: f64 = 0.1;

/// Convert a mass in kilograms to its geometric mass `M_g = G M / c^2`
/// (units of metres).
#[inline]
pub fn geometric_mass(mass_kg: f64) -> f64 {
    SI_G * mass_kg / (SI_C * SI_C)
}

/// Schwarzschild radius `r_s = 2 M_g` for a mass in kilograms, in metres.
#[inline]
pub fn schwarzschild_radius_meters(mass_kg: f64) -> f64 {
    2.0 * geometric_mass(mass_kg)
}

/// Eddington luminosity for a mass in kilograms, in watts.
#[inline]
pub fn eddington_luminosity(mass_kg: f64) -> f64 {
    EDDINGTON_LUMINOSITY_PER_SOLAR_MASS * (mass_kg / SI_SOLAR_MASS)
}

/// Mass accretion rate implied by an Eddington fraction:
/// `m_dot = mdot_edd * L_Edd / (eta c^2)`, in kg/s.
#[inline]
pub fn accretion_rate(mass_kg: f64, eddington_fraction: f64) -> f64 {
    eddington_fraction * eddington_luminosity(mass_kg) / (DISK_EFFICIENCY * SI_C * SI_C)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schwarzschild_radius_of_one_solar_mass() {
        let rs = schwarzschild_radius_meters(SI_SOLAR_MASS);
        // The textbook value is ~2.95 km.
        assert!((rs - 2953.0).abs() < 5.0, "rs = {rs}");
    }

    #[test]
    fn schwarzschild_radius_scales_linearly_with_mass() {
        let rs1 = schwarzschild_radius_meters(SI_SOLAR_MASS);
        let rs10 = schwarzschild_radius_meters(10.0 * SI_SOLAR_MASS);
        assert!((rs10 - 10.0 * rs1).abs() < 1e-6);
    }

    #[test]
    fn accretion_rate_is_positive_for_positive_inputs() {
        let mdot = accretion_rate(10.0 * SI_SOLAR_MASS, 0.1);
        assert!(mdot > 0.0);
    }
}
