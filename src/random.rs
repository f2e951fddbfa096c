//! Random number generation for ray tracing.
//!
//! Provides thread-safe random number generation with ChaCha20 PRNG, one
//! generator per worker thread. Includes the bounded rejection sampler used
//! for diffuse bounce directions.

use std::cell::RefCell;

use glam::DVec3;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64() -> f64 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64()
}

/// Generate a random vector with each component in [min, max)
pub fn random_dvec3_range(min: f64, max: f64) -> DVec3 {
    DVec3::new(
        random_f64_range(min, max),
        random_f64_range(min, max),
        random_f64_range(min, max),
    )
}

/// Sample a point inside the unit sphere by rejection.
///
/// Draws points from the enclosing cube until one lands inside the sphere.
/// The draw count is capped at 100; if every draw is rejected the last one is
/// returned as-is, trading a slightly out-of-sphere sample for a hard bound
/// on per-ray cost.
pub fn random_in_unit_sphere() -> DVec3 {
    let mut p = DVec3::ZERO;
    for _ in 0..100 {
        p = random_dvec3_range(-1.0, 1.0);
        if p.length_squared() < 1.0 {
            break;
        }
    }
    p
}
