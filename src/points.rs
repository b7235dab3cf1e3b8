use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use crate::Point;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates `count` points uniformly distributed inside `bounds`.
///
/// The same seed always produces the same points.
pub fn random_points(count: usize, bounds: &BoundingBox<3>, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let w = bounds.max[0] - bounds.min[0];
    let h = bounds.max[1] - bounds.min[1];
    let d = bounds.max[2] - bounds.min[2];

    (0..count)
        .map(|_| {
            [
                bounds.min[0] + rng.r#gen::<f64>() * w,
                bounds.min[1] + rng.r#gen::<f64>() * h,
                bounds.min[2] + rng.r#gen::<f64>() * d,
            ]
        })
        .collect()
}

/// Brute-force box filter over `points`, appending matches to `out` in input order.
///
/// This is the reference the tree is checked and benchmarked against.
pub fn linear_range_search(points: &[Point], min: Point, max: Point, out: &mut Vec<Point>) {
    let bounds = BoundingBox::new(min, max);
    out.extend(points.iter().filter(|p| bounds.contains(p)));
}

/// Reads a point from the first three values of `values`.
pub fn point_from_slice(values: &[f64]) -> Result<Point> {
    match values {
        [x, y, z, ..] => Ok([*x, *y, *z]),
        _ => Err(Error::InvalidPoint(format!("expected 3 coordinates, got {}", values.len()))),
    }
}

/// Splits flat `[x0, y0, z0, x1, ...]` coordinates into points, ignoring a trailing partial triple.
pub fn points_from_flat(coords: &[f64]) -> Vec<Point> {
    coords.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect()
}

/// Flattens points into `[x0, y0, z0, x1, ...]`.
pub fn flatten_points(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| p.iter().copied()).collect()
}

/// Seed for randomly generated point sets; fixed outside the browser.
pub fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789
    }
}
