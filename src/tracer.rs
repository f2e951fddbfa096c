//! Recursive color estimation and frame assembly.
//!
//! `ray_color` estimates the light carried by a single ray by bouncing it
//! through the scene; `trace_texture` runs the jittered sampling loop over
//! every pixel and packs the result into a 32-bit-per-pixel texture buffer.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::random;
use crate::ray::{Color, Ray};

/// Channel range that quantizes onto 0..=255 without overflowing the byte.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Fraction of incoming light a diffuse bounce retains.
const DIFFUSE_REFLECTANCE: f64 = 0.5;

/// Frame-level settings for [`trace_texture`].
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Jittered rays accumulated per pixel
    pub pixel_samples: u32,
    /// Maximum number of diffuse bounces per ray
    pub max_depth: u32,
}

/// Estimate the color carried by a ray.
///
/// A ray that exhausts its bounce budget contributes black: the unresolved
/// light path is counted as lost rather than guessed at. A hit bounces
/// diffusely toward a random point near the surface normal and recurses; a
/// miss resolves to the vertical sky gradient.
pub fn ray_color(r: &Ray, world: &dyn Hittable, depth: u32) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut rec = HitRecord::default();
    if world.hit(r, Interval::new(0.0, f64::INFINITY), &mut rec) {
        let target = rec.p + rec.normal + random::random_in_unit_sphere();
        let bounce = Ray::new(rec.p, target - rec.p);
        return DIFFUSE_REFLECTANCE * ray_color(&bounce, world, depth - 1);
    }

    // Sky gradient: white at the horizon blending to light blue at the zenith
    let unit_direction = r.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::ONE + t * Color::new(0.5, 0.7, 1.0)
}

/// Quantize a linear channel to a byte as floor(256 * clamp(c, 0, 0.999)).
fn quantize(channel: f64) -> u8 {
    (256.0 * INTENSITY.clamp(channel)) as u8
}

/// Trace the scene into a packed 32-bit-per-pixel texture buffer.
///
/// Scanlines are emitted bottom-up (`j = height-1` down to `0`) with
/// A,B,G,R bytes per pixel, and the finished buffer is reversed end to end
/// to match the ordering the texture consumer expects. Read forward, the
/// result is image row 0 first, columns mirrored, R,G,B,A per pixel, with
/// row pitch `width * 4` bytes; its length is always `4 * width * height`.
///
/// Rows are traced in parallel and concatenated in emission order, so the
/// byte stream is identical to a sequential trace of the same samples.
pub fn trace_texture(camera: &Camera, world: &dyn Hittable, opts: TraceOptions) -> Vec<u8> {
    info!(
        "Tracing {}x{} at {} samples per pixel on {} threads...",
        opts.width,
        opts.height,
        opts.pixel_samples,
        rayon::current_num_threads()
    );
    let trace_start = std::time::Instant::now();
    let pb = ProgressBar::new(u64::from(opts.width) * u64::from(opts.height));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap(),
    );

    let scale = 1.0 / f64::from(opts.pixel_samples);
    let rows: Vec<Vec<u8>> = (0..opts.height)
        .into_par_iter()
        .map(|row| {
            let j = opts.height - 1 - row;
            let mut line = Vec::with_capacity(opts.width as usize * 4);
            for i in 0..opts.width {
                let mut c = Color::ZERO;
                for _ in 0..opts.pixel_samples {
                    let u = (f64::from(i) + random::random_f64()) / f64::from(opts.width - 1);
                    let v = (f64::from(j) + random::random_f64()) / f64::from(opts.height - 1);
                    c += ray_color(&camera.get_ray(u, v), world, opts.max_depth);
                }
                c *= scale;

                line.push(u8::MAX);
                line.push(quantize(c.z));
                line.push(quantize(c.y));
                line.push(quantize(c.x));
                pb.inc(1);
            }
            line
        })
        .collect();

    let mut buffer = rows.concat();
    buffer.reverse();

    pb.finish();
    info!("Trace finished in {:.2?}", trace_start.elapsed());

    buffer
}
