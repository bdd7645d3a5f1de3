//! Observer camera model and camera-to-ray mapping.

use crate::geodesic::GeodesicState;

/// An observer's camera: position, orientation, field of view, and
/// resolution.
///
/// `r_obs` is stored in metres (geometric units), already scaled by the
/// Schwarzschild radius at construction time: there is no setter that could
/// apply that scaling twice.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub r_obs: f64,
    pub theta_obs: f64,
    pub fov_h: f64,
    pub fov_v: f64,
    pub width: usize,
    pub height: usize,
}

impl Camera {
    /// Construct a camera. `observer_radius_rs` is the observer's distance
    /// from the black hole in units of `r_s`; it is converted to metres
    /// here, once, by multiplying by `rs`.
    pub fn new(
        observer_radius_rs: f64,
        theta_obs: f64,
        fov_h: f64,
        fov_v: f64,
        width: usize,
        height: usize,
        rs: f64,
    ) -> Self {
        Self {
            r_obs: observer_radius_rs * rs,
            theta_obs,
            fov_h,
            fov_v,
            width,
            height,
        }
    }

    /// Impact parameters `(alpha, beta)` for pixel `(i, j)`, with the image
    /// centre at `(W/2, H/2)`.
    pub fn impact_parameters(&self, i: usize, j: usize) -> (f64, f64) {
        let alpha = ((i as f64 - self.width as f64 / 2.0) / self.width as f64)
            * self.fov_h
            * self.r_obs;
        let beta = ((j as f64 - self.height as f64 / 2.0) / self.height as f64)
            * self.fov_v
            * self.r_obs;
        (alpha, beta)
    }

    /// The initial photon phase-space state for a ray aimed through impact
    /// parameters `(alpha, beta)`, at `(r_obs, theta_obs, phi=0)` with
    /// `f = 1 - r_s/r_obs`.
    pub fn initial_state(&self, alpha: f64, beta: f64, rs: f64) -> GeodesicState {
        let r = self.r_obs;
        let theta = self.theta_obs;
        let f = 1.0 - rs / r;

        // theta in [0, pi] so sin(theta) >= 0; clamp away from the pole
        // (theta_obs = 0, a face-on observer, is within the valid
        // inclination range) to avoid dividing by zero there.
        let sin_theta = theta.sin().max(1e-12);

        let ut = 1.0 / f;
        let uth = beta / r;
        let uph = alpha / (r * sin_theta);

        let null_term = f * (f * ut * ut - r * r * uth * uth - r * r * sin_theta * sin_theta * uph * uph);
        let ur = -(null_term.max(0.0)).sqrt();

        GeodesicState::new(0.0, r, theta, 0.0, ut, ur, uth, uph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn center_pixel_has_zero_impact_parameters() {
        let cam = Camera::new(100.0, FRAC_PI_2, 0.7, 0.5, 800, 600, 2.0);
        let (alpha, beta) = cam.impact_parameters(400, 300);
        assert!(alpha.abs() < 1e-9);
        assert!(beta.abs() < 1e-9);
    }

    #[test]
    fn radially_inward_ray_has_no_angular_velocity() {
        let cam = Camera::new(100.0, FRAC_PI_2, 0.7, 0.5, 800, 600, 2.0);
        let state = cam.initial_state(0.0, 0.0, 2.0);
        assert_eq!(state.u[2], 0.0);
        assert_eq!(state.u[3], 0.0);
        assert!(state.u[1] < 0.0, "radial velocity should be inbound");
    }

    #[test]
    fn observer_radius_is_scaled_by_rs_once() {
        let cam = Camera::new(100.0, FRAC_PI_2, 0.7, 0.5, 800, 600, 2.0);
        assert!((cam.r_obs - 200.0).abs() < 1e-9);
    }

    #[test]
    fn face_on_observer_does_not_produce_nan_or_infinite_state() {
        // theta_obs = 0 is a face-on observer (inclination_deg = 90), a
        // valid point in RenderConfig's accepted range, and sits exactly on
        // the polar coordinate singularity.
        let cam = Camera::new(100.0, 0.0, 0.7, 0.5, 800, 600, 2.0);
        let state = cam.initial_state(1.0, 1.0, 2.0);
        for component in state.x.iter().chain(state.u.iter()) {
            assert!(component.is_finite(), "state component was not finite: {component}");
        }
    }
}
