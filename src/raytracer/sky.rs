//! Deterministic procedural celestial background.

use std::f64::consts::PI;

const GRID_SPACING: f64 = PI / 12.0;
const GRID_THICKNESS: f64 = 0.02;
const STAR_FIELD_FLOOR: f64 = 0.01;

/// The celestial sphere's color in direction `(theta, phi)`.
///
/// Renders a purple-blue grid every 15 degrees of latitude and longitude,
/// and a pseudo-random star field everywhere else, with a small brightness
/// floor so the field between stars isn't pure black.
pub fn sky_color(theta: f64, phi: f64) -> [f64; 3] {
    let latitude = theta - PI / 2.0;
    let longitude = phi.rem_euclid(2.0 * PI);

    if near_grid_line(latitude) || near_grid_line(longitude) {
        let h = longitude / (2.0 * PI);
        return [0.2 + 0.3 * h, 0.1, 0.4 + 0.2 * (1.0 - h)];
    }

    let seed = 100.0 * theta + 57.0 * phi;
    let brightness =
        ((((12345.6789 * seed).sin() + 1.0) / 2.0).powi(100) + STAR_FIELD_FLOOR).min(1.0);
    [brightness, brightness, brightness]
}

fn near_grid_line(angle: f64) -> bool {
    let remainder = (angle / GRID_SPACING).fract().abs() * GRID_SPACING;
    let distance = remainder.min(GRID_SPACING - remainder);
    distance < GRID_THICKNESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_channels_stay_within_unit_range() {
        for i in 0..20 {
            let theta = i as f64 * 0.15;
            let phi = i as f64 * 0.37;
            for c in sky_color(theta, phi) {
                assert!((0.0..=1.0).contains(&c), "channel {c} out of range");
            }
        }
    }

    #[test]
    fn equator_longitude_zero_is_on_a_grid_line() {
        let color = sky_color(PI / 2.0, 0.0);
        assert!((color[0] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn swapping_the_hemisphere_changes_the_background() {
        let north = sky_color(0.3, 1.0);
        let south_mirror = sky_color(PI - 0.3, 1.0);
        assert_ne!(north, south_mirror);
    }

    #[test]
    fn is_deterministic_for_identical_inputs() {
        assert_eq!(sky_color(1.2, 3.4), sky_color(1.2, 3.4));
    }
}
