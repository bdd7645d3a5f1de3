//! Minkowski (flat) spacetime metric, used as a test baseline.
//!
//! The trivial metric `eta_{mu nu} = diag(-1, 1, r^2, r^2 sin^2 theta)` in
//! spherical coordinates. A photon fired through it travels in a straight
//! line, which makes it useful for sanity-checking the geodesic integrator
//! independently of any Schwarzschild-specific formula.

use crate::metric::Metric;
use crate::tensor::{ChristoffelSymbols, MetricTensor4};

/// Flat Minkowski spacetime in spherical coordinates. Equivalent to a
/// Schwarzschild black hole of zero mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minkowski;

impl Metric for Minkowski {
    fn covariant(&self, r: f64, theta: f64) -> MetricTensor4 {
        MetricTensor4::schwarzschild_covariant(r, theta, 0.0)
    }

    fn contravariant(&self, r: f64, theta: f64) -> MetricTensor4 {
        MetricTensor4::schwarzschild_contravariant(r, theta, 0.0)
    }

    fn christoffel(&self, r: f64, theta: f64) -> ChristoffelSymbols {
        ChristoffelSymbols::at(r, theta, 0.0)
    }

    fn mass(&self) -> f64 {
        0.0
    }

    fn event_horizon(&self) -> f64 {
        0.0
    }
}
