use crate::bounds::BoundingBox;
use crate::error::Error;
use crate::kdtree::KdTree;
use crate::points::{flatten_points, points_from_flat, random_points, point_from_slice};
use crate::Point;
use wasm_bindgen::prelude::*;
use js_sys::Array;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

// --- Bounding Box ---

/// Represents an axis-aligned bounding box in 3D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> BoundingBox3D {
        BoundingBox3D {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }
}

impl From<BoundingBox3D> for BoundingBox<3> {
    fn from(b: BoundingBox3D) -> Self {
        Self {
            min: [b.min_x, b.min_y, b.min_z],
            max: [b.max_x, b.max_y, b.max_z],
        }
    }
}

// --- KdTree ---

/// WASM wrapper around a built [`KdTree`]. Points cross the boundary as flat `[x, y, z, ...]` arrays.
#[wasm_bindgen]
pub struct KdTree3D {
    inner: KdTree,
}

#[wasm_bindgen]
impl KdTree3D {
    /// Builds a tree from flat coordinates. A trailing partial triple is ignored.
    #[wasm_bindgen(constructor)]
    pub fn new(coords: &[f64]) -> KdTree3D {
        KdTree3D { inner: KdTree::build(points_from_flat(coords)) }
    }

    /// Builds a tree from `count` uniformly distributed points inside `bounds`.
    pub fn random(count: usize, bounds: BoundingBox3D, seed: Option<u64>) -> KdTree3D {
        let seed = seed.unwrap_or_else(crate::points::get_seed);
        KdTree3D { inner: KdTree::build(random_points(count, &bounds.into(), seed)) }
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Returns the points inside `[min, max]`, where both corners are `[x, y, z]` arrays.
    pub fn range_search(&self, min: &JsValue, max: &JsValue) -> Result<Vec<f64>, JsValue> {
        let min = parse_js_point(min).map_err(to_js_error)?;
        let max = parse_js_point(max).map_err(to_js_error)?;
        let mut out = Vec::new();
        self.inner.range_search(min, max, &mut out);
        Ok(flatten_points(&out))
    }

    pub fn query(&self, bounds: BoundingBox3D) -> Vec<f64> {
        flatten_points(&self.inner.query(&bounds.into()))
    }

    /// All stored points, flattened in construction order.
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> {
        self.inner.points().flat_map(|p| p.iter().copied()).collect()
    }
}

fn parse_js_point(val: &JsValue) -> Result<Point, Error> {
    let arr = val
        .dyn_ref::<Array>()
        .ok_or_else(|| Error::InvalidPoint("expected an array".to_string()))?;
    let coords = arr
        .iter()
        .take(3)
        .map(|v| v.as_f64().ok_or_else(|| Error::InvalidPoint("expected numeric coordinates".to_string())))
        .collect::<Result<Vec<f64>, Error>>()?;
    point_from_slice(&coords)
}

fn to_js_error(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}
