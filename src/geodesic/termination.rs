//! Geodesic termination events.

/// Why a traced ray stopped advancing.
///
/// Checked by the ray tracer's integration loop in this order each
/// iteration: [`Horizon`](TerminationReason::Horizon) capture, then
/// [`DiskCrossing`](TerminationReason::DiskCrossing), then
/// [`Escape`](TerminationReason::Escape). [`MaxSteps`](TerminationReason::MaxSteps)
/// is a diagnostic-only fallback that must never occur on well-posed inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// Ray fell within `r < r_s * 1.001`.
    Horizon,
    /// Ray crossed the equatorial disk plane within its radial bounds.
    DiskCrossing,
    /// Ray crossed `r > 2 * r_obs`.
    Escape,
    /// The integration loop exhausted `N_max` steps without terminating.
    MaxSteps,
}
