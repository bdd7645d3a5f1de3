//! Image synthesis: camera model, celestial background, per-ray tracing,
//! and the multithreaded render loop that ties them together.

mod camera;
mod render;
mod sky;
mod tracer;

pub use camera::Camera;
pub use render::render;
pub use sky::sky_color;
pub use tracer::{trace_ray, ERROR_SENTINEL, HORIZON_COLOR, H0, MAX_STEPS};
