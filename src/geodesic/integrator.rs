//! Fixed-step RK4 geodesic integrator.

use crate::geodesic::{derivative::geodesic_derivative, GeodesicState};
use crate::metric::Metric;

/// Advance `state` by one affine step of size `h` using fixed-step 4th-order
/// Runge-Kutta, then apply the polar-angle reflection so the returned
/// state's `theta` always lies in `[0, pi]`.
///
/// This does not enforce the null condition after the step; see
/// [`crate::geodesic`] module docs and
/// [`crate::tensor::christoffel::audit_against_finite_difference`]-style
/// diagnostics for separately checking drift.
pub fn step_rk4<M: Metric>(state: &GeodesicState, metric: &M, h: f64) -> GeodesicState {
    let k1 = geodesic_derivative(state, metric);
    let k2 = geodesic_derivative(&state.add_scaled(k1, 0.5 * h), metric);
    let k3 = geodesic_derivative(&state.add_scaled(k2, 0.5 * h), metric);
    let k4 = geodesic_derivative(&state.add_scaled(k3, h), metric);

    let mut next = *state;
    for i in 0..4 {
        next.x[i] += (h / 6.0) * (k1.x[i] + 2.0 * k2.x[i] + 2.0 * k3.x[i] + k4.x[i]);
        next.u[i] += (h / 6.0) * (k1.u[i] + 2.0 * k2.u[i] + 2.0 * k3.u[i] + k4.u[i]);
    }

    reflect_polar(&mut next);
    next
}

/// Reflect `theta` back into `[0, pi]` if the step carried it past a pole,
/// flipping the sign of `u^theta` to preserve the geodesic.
fn reflect_polar(state: &mut GeodesicState) {
    let theta = state.x[2];
    if theta < 0.0 {
        state.x[2] = -theta;
        state.u[2] = -state.u[2];
    } else if theta > std::f64::consts::PI {
        state.x[2] = 2.0 * std::f64::consts::PI - theta;
        state.u[2] = -state.u[2];
    }
}

/// Adaptive step size `h = h0 * sqrt(r / r_s)`, used by the ray tracer before
/// every step so far-field steps are large and near-horizon steps shrink.
#[inline]
pub fn adaptive_step_size(r: f64, rs: f64, h0: f64) -> f64 {
    h0 * (r / rs).sqrt()
}
