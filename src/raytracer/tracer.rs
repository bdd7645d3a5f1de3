//! Per-pixel photon trace loop.

use crate::geodesic::{adaptive_step_size, step_rk4, GeodesicState};
use crate::metric::Metric;
use crate::physics::Disk;
use crate::raytracer::sky::sky_color;

/// Maximum number of integration steps before a ray is abandoned as an
/// error sentinel.
pub const MAX_STEPS: usize = 10_000;

/// Horizon-capture margin: a ray is considered captured once
/// `r < r_s * HORIZON_MARGIN`.
const HORIZON_MARGIN: f64 = 1.001;

/// Disk-plane proximity threshold used for the (intentionally naive,
/// non-root-finding) disk intersection test.
const DISK_PLANE_TOLERANCE: f64 = 0.01;

/// The initial step size coefficient `h0`.
pub const H0: f64 = 0.1;

/// Error sentinel color for a ray that exhausts `N_max` steps without
/// terminating. Diagnostic only; must never occur on well-posed inputs.
pub const ERROR_SENTINEL: [f64; 3] = [1.0, 0.0, 1.0];

/// Black pixel for a horizon-captured ray.
pub const HORIZON_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

/// Trace a single photon from `initial` through `metric`, checking
/// termination events in order: horizon capture, then disk intersection,
/// then escape to the celestial sphere.
///
/// `escape_radius` is conventionally `2 * r_obs`; `h0` is the step-size
/// coefficient fed into [`adaptive_step_size`] before every step.
pub fn trace_ray<M: Metric>(
    initial: &GeodesicState,
    metric: &M,
    disk: &Disk,
    h0: f64,
    escape_radius: f64,
) -> [f64; 3] {
    let rs = metric.event_horizon();
    let mut state = *initial;

    for _ in 0..MAX_STEPS {
        let r = state.r();
        let theta = state.theta();

        if r < rs * HORIZON_MARGIN {
            return HORIZON_COLOR;
        }

        if (theta - std::f64::consts::FRAC_PI_2).abs() < DISK_PLANE_TOLERANCE && disk.in_disk(r) {
            return disk.observed_color(r, state.phi(), rs);
        }

        if r > escape_radius {
            return sky_color(theta, state.phi());
        }

        let h = adaptive_step_size(r, rs, h0);
        state = step_rk4(&state, metric, h);
    }

    log::warn!(
        "ray exhausted {MAX_STEPS} steps without terminating at r={:.4}, theta={:.4}",
        state.r(),
        state.theta()
    );
    ERROR_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Schwarzschild;
    use crate::raytracer::Camera;
    use std::f64::consts::FRAC_PI_2;

    fn test_disk(rs: f64, mass_kg: f64) -> Disk {
        Disk::new(3.0 * rs, 500.0 * rs, mass_kg, 1.0e14)
    }

    #[test]
    fn radially_inward_ray_is_captured_by_the_horizon() {
        let bh = Schwarzschild::new(1.0);
        let rs = bh.schwarzschild_radius();
        let disk = test_disk(rs, 1.0);
        let cam = Camera::new(100.0, FRAC_PI_2, 0.1, 0.1, 1, 1, rs);
        let state = cam.initial_state(0.0, 0.0, rs);
        let color = trace_ray(&state, &bh, &disk, H0, 2.0 * cam.r_obs);
        assert_eq!(color, HORIZON_COLOR);
    }

    #[test]
    fn a_far_outward_aimed_ray_escapes_to_the_sky() {
        let bh = Schwarzschild::new(1.0);
        let rs = bh.schwarzschild_radius();
        let disk = test_disk(rs, 1.0);
        let cam = Camera::new(100.0, FRAC_PI_2, 0.1, 0.1, 1, 1, rs);
        // A large positive beta aims well above the equatorial plane, away
        // from both horizon and disk.
        let state = cam.initial_state(0.0, cam.r_obs * 0.9, rs);
        let color = trace_ray(&state, &bh, &disk, H0, 2.0 * cam.r_obs);
        assert_ne!(color, HORIZON_COLOR);
    }
}
