use crate::Axis;

/// Errors reported by the validating entry points.
///
/// The core build and search operations are total and never produce these.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A point handed to [`KdTree::try_build`](crate::KdTree::try_build) has a NaN coordinate.
    #[error("point {index} has a NaN coordinate on axis {axis:?}")]
    NanCoordinate { index: usize, axis: Axis },

    /// A value could not be interpreted as a 3D point.
    #[error("invalid point: {0}")]
    InvalidPoint(String),
}

pub type Result<T> = std::result::Result<T, Error>;
