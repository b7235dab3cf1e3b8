/// Generic axis-aligned bounding box for N-dimensional space.
///
/// Both corners are inclusive. A box is only meaningful when `min <= max` on every axis,
/// see [`BoundingBox::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `point` lies inside the box, boundaries included.
    ///
    /// Any NaN coordinate (in the point or the box) makes the test fail.
    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns `true` if `min <= max` holds on every axis.
    pub fn is_valid(&self) -> bool {
        (0..D).all(|i| self.min[i] <= self.max[i])
    }

    /// Computes the tightest box around `points`, or `None` if there are none.
    ///
    /// NaN coordinates are skipped on the axis they occur on.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64; D]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = *first;
        let mut max = *first;
        for p in iter {
            for i in 0..D {
                // f64::min/max ignore a NaN operand
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Some(Self { min, max })
    }
}
