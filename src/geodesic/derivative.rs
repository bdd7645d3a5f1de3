//! Geodesic equation right-hand side.

use crate::geodesic::GeodesicState;
use crate::metric::Metric;

/// Evaluate the geodesic right-hand side `f(state) = (u^t, u^r, u^theta,
/// u^phi, a^t, a^r, a^theta, a^phi)`, where `a^mu = -Gamma^mu_{alpha beta}
/// u^alpha u^beta` with symmetric Christoffel pairs already doubled inside
/// [`crate::tensor::ChristoffelSymbols::acceleration`].
pub fn geodesic_derivative<M: Metric>(state: &GeodesicState, metric: &M) -> GeodesicState {
    let gamma = metric.christoffel(state.r(), state.theta());
    let accel = gamma.acceleration(state.u);
    GeodesicState {
        x: state.u,
        u: accel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Minkowski;

    #[test]
    fn flat_spacetime_has_zero_acceleration() {
        let state = GeodesicState::new(0.0, 10.0, 1.0, 0.0, 1.0, -0.1, 0.02, 0.01);
        let d = geodesic_derivative(&state, &Minkowski);
        assert_eq!(d.u, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(d.x, state.u);
    }
}
