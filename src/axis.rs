use crate::Point;

/// Split axis of a tree level. It is never stored, only derived from the depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis for a given recursion depth, cycling X, Y, Z, X, ...
    #[inline]
    pub fn from_depth(depth: u32) -> Axis {
        match depth % 3 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn coord(self, point: &Point) -> f64 {
        point[self.index()]
    }

    /// Ordering key used by both partitioning and pruning.
    ///
    /// NaN is mapped to +inf so the key order is total and the two sides of every split stay
    /// consistent with the pruning comparisons.
    #[inline]
    pub fn key(self, point: &Point) -> f64 {
        let v = self.coord(point);
        if v.is_nan() { f64::INFINITY } else { v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_cycles_with_depth() {
        let axes: Vec<Axis> = (0..7).map(Axis::from_depth).collect();
        assert_eq!(axes, vec![Axis::X, Axis::Y, Axis::Z, Axis::X, Axis::Y, Axis::Z, Axis::X]);
    }

    #[test]
    fn test_key_maps_nan_to_infinity() {
        let p = [1.0, f64::NAN, -0.0];
        assert_eq!(Axis::X.key(&p), 1.0);
        assert_eq!(Axis::Y.key(&p), f64::INFINITY);
        assert!(Axis::Y.coord(&p).is_nan());
        assert_eq!(Axis::Z.key(&p), 0.0);
    }
}
