//! Multithreaded render entry point.
//!
//! The image is partitioned into `T` contiguous row-blocks, one per worker
//! thread; thread `t` owns rows `[t * floor(H/T), (t+1) * floor(H/T))` and
//! the last thread absorbs the remainder. Workers share no mutable state
//! except an atomic count of completed rows, used only for progress
//! logging; the final raster is independent of `T`.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::RenderConfig;
use crate::image::Image;
use crate::raytracer::tracer::{trace_ray, H0};

/// Render `config` to completion, blocking until every pixel is traced.
pub fn render(config: &RenderConfig) -> Image {
    let metric = config.metric();
    let disk = config.disk();
    let camera = config.camera();
    let rs = config.schwarzschild_radius();
    let escape_radius = 2.0 * camera.r_obs;

    let mut image = Image::new(config.width, config.height);
    let threads = config.threads;
    let rows_done = AtomicUsize::new(0);

    log::debug!(
        "render start: {}x{} px, {} thread(s), r_s={:.4e} m, r_obs={:.4e} m",
        config.width,
        config.height,
        threads,
        rs,
        camera.r_obs
    );

    let blocks = image.row_blocks_mut(threads);

    std::thread::scope(|scope| {
        for (thread_index, (row_start, rows)) in blocks.into_iter().enumerate() {
            let metric = &metric;
            let disk = &disk;
            let camera = &camera;
            let rows_done = &rows_done;
            let row_count = rows.len() / config.width.max(1);

            scope.spawn(move || {
                log::debug!(
                    "worker {thread_index} starting rows [{row_start}, {})",
                    row_start + row_count
                );

                for (local_j, row) in rows.chunks_mut(config.width).enumerate() {
                    let j = row_start + local_j;
                    for (i, pixel) in row.iter_mut().enumerate() {
                        let (alpha, beta) = camera.impact_parameters(i, j);
                        let initial = camera.initial_state(alpha, beta, rs);
                        *pixel = trace_ray(&initial, metric, disk, H0, escape_radius);
                    }
                    let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                    log::trace!("progress: {done}/{} rows complete", config.height);
                }

                log::debug!(
                    "worker {thread_index} finished rows [{row_start}, {})",
                    row_start + row_count
                );
            });
        }
    });

    log::debug!("render complete: {} rows traced", rows_done.load(Ordering::Relaxed));
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config(threads: usize) -> RenderConfig {
        RenderConfig {
            width: 12,
            height: 8,
            threads,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn render_produces_the_requested_dimensions() {
        let image = render(&tiny_config(2));
        assert_eq!(image.width(), 12);
        assert_eq!(image.height(), 8);
    }

    #[test]
    fn rendering_is_independent_of_thread_count() {
        let single = render(&tiny_config(1));
        let many = render(&tiny_config(5));
        for j in 0..single.height() {
            for i in 0..single.width() {
                assert_eq!(single.get_pixel(i, j), many.get_pixel(i, j));
            }
        }
    }

    #[test]
    fn every_pixel_is_a_valid_clamped_color() {
        let image = render(&tiny_config(3));
        for j in 0..image.height() {
            for i in 0..image.width() {
                for c in image.get_pixel(i, j) {
                    assert!((0.0..=1.0).contains(&c), "channel {c} out of range at ({i},{j})");
                }
            }
        }
    }
}
