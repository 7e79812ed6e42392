//! The three source fields: value noise, fractal (fBm) noise and cellular
//! nearest-site distance.
//!
//! Value and fractal fields sample a caller-supplied smooth noise primitive so
//! both can share one seeded instance. The cellular field draws its sites from
//! a caller-supplied RNG.

use glam::Vec2;
use noise::NoiseFn;
use rand::Rng;

use crate::grid::ScalarGrid;

/// Sample coordinates beyond this magnitude are outside the primitive's
/// usable domain (its lattice index would saturate).
const MAX_SAMPLE_COORD: f64 = 1.0e15;

#[inline]
fn sample(noise: &impl NoiseFn<f64, 2>, sx: f64, sy: f64) -> Option<f64> {
    if sx.abs() <= MAX_SAMPLE_COORD && sy.abs() <= MAX_SAMPLE_COORD {
        Some(noise.get([sx, sy]))
    } else {
        None
    }
}

/// Value-noise field: `grid[x][y] = noise(x / scale, y / scale)`.
///
/// A zero `scale`, or one small enough to push the coordinates out of the
/// sampling domain, yields `NaN` for that cell.
pub fn value_noise(
    noise: &impl NoiseFn<f64, 2>,
    width: usize,
    height: usize,
    scale: f32,
) -> ScalarGrid {
    let scale = scale as f64;
    ScalarGrid::from_fn(width, height, |x, y| {
        sample(noise, x as f64 / scale, y as f64 / scale).map_or(f32::NAN, |v| v as f32)
    })
}

/// Fractal field: `octaves` layers of the same primitive, each sample remapped
/// with `v * 2 - 1`, starting at amplitude 1 and frequency 1, then
/// `amplitude *= persistence` and `frequency *= 2` per layer.
///
/// Zero octaves give an all-zero field. Layers whose coordinates leave the
/// sampling domain are dropped; if the first one already does, the cell is `NaN`.
pub fn fbm_noise(
    noise: &impl NoiseFn<f64, 2>,
    width: usize,
    height: usize,
    scale: f32,
    octaves: u32,
    persistence: f32,
) -> ScalarGrid {
    let scale = scale as f64;
    let persistence = persistence as f64;

    ScalarGrid::from_fn(width, height, |x, y| {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;

        for octave in 0..octaves {
            let sx = x as f64 / scale * frequency;
            let sy = y as f64 / scale * frequency;
            match sample(noise, sx, sy) {
                Some(v) => total += (v * 2.0 - 1.0) * amplitude,
                None if octave == 0 => return f32::NAN,
                None => break,
            }

            amplitude *= persistence;
            frequency *= 2.0;
        }

        total as f32
    })
}

/// Draw `num_sites` sites with integer coordinates uniformly in
/// `[0, width] × [0, height]` (both ends inclusive).
pub fn generate_sites(
    rng: &mut impl Rng,
    width: usize,
    height: usize,
    num_sites: usize,
) -> Vec<Vec2> {
    (0..num_sites)
        .map(|_| {
            Vec2::new(
                rng.random_range(0..=width) as f32,
                rng.random_range(0..=height) as f32,
            )
        })
        .collect()
}

/// Cellular field over an explicit site set: each cell stores the Euclidean
/// distance to its nearest site.
///
/// With no sites every cell keeps the "infinitely far" sentinel, `sqrt(f32::MAX)`.
pub fn cellular_noise_from_sites(width: usize, height: usize, sites: &[Vec2]) -> ScalarGrid {
    ScalarGrid::from_fn(width, height, |x, y| {
        let cell = Vec2::new(x as f32, y as f32);
        let min_dist_sq = sites
            .iter()
            .map(|site| site.distance_squared(cell))
            .fold(f32::MAX, f32::min);
        libm::sqrtf(min_dist_sq)
    })
}

/// Cellular field with `num_sites` freshly drawn sites.
///
/// At least one site is always placed; asking for zero is treated as one.
pub fn cellular_noise(
    rng: &mut impl Rng,
    width: usize,
    height: usize,
    num_sites: usize,
) -> ScalarGrid {
    if num_sites == 0 {
        tracing::warn!("Cellular noise requested with no sites, placing one");
    }
    let sites = generate_sites(rng, width, height, num_sites.max(1));
    cellular_noise_from_sites(width, height, &sites)
}
