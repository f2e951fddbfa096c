use clap::Parser;
use log::info;

mod camera;
mod cli;
mod hittable;
mod interval;
mod logger;
mod output;
mod random;
mod ray;
mod sphere;
mod tracer;

use camera::Camera;
use cli::Args;
use hittable::HittableList;
use logger::init_logger;
use output::save_buffer_as_png;
use ray::Point3;
use sphere::{Sphere, SphereError};
use tracer::{trace_texture, TraceOptions};

/// Build the fixed scene: a small sphere resting on a much larger ground sphere.
fn create_scene() -> Result<HittableList, SphereError> {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)?));
    world.add(Box::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0)?));
    Ok(world)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("RayTex - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        args.width, args.height, args.pixel_samples, args.max_depth
    );

    let world = match create_scene() {
        Ok(world) => world,
        Err(e) => {
            log::error!("Failed to build scene: {}", e);
            std::process::exit(1);
        }
    };

    let camera = match Camera::new(args.width, args.height) {
        Ok(camera) => camera,
        Err(e) => {
            log::error!("Failed to set up camera: {}", e);
            std::process::exit(1);
        }
    };

    let opts = TraceOptions {
        width: args.width,
        height: args.height,
        pixel_samples: args.pixel_samples,
        max_depth: args.max_depth,
    };
    let buffer = trace_texture(&camera, &world, opts);

    save_buffer_as_png(&buffer, args.width, args.height, &args.output);
}
