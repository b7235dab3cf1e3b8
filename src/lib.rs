//! # kdrange
//!
//! `kdrange` is a Rust library for static 3D kd-trees, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). A tree is built once from a fixed set of
//! points and then answers axis-aligned box range queries faster than a linear scan.
//!
//! ## Features
//!
//! - **Arena storage**: Nodes live in one flat vector and reference their children by index.
//! - **Median splits**: Each level splits on X, Y or Z by depth, using selection instead of sorting.
//! - **Iterative search**: Range queries walk an explicit work queue and prune whole subtrees.
//! - **Parallel queries**: A built tree is read-only, so batches of boxes are answered with Rayon.
//! - **WASM-first**: Built with `wasm-bindgen` for integration with JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use kdrange::KdTree;
//!
//! let tree = KdTree::build(vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
//! let mut found = Vec::new();
//! tree.range_search([0.5, 0.5, 0.5], [2.5, 2.5, 2.5], &mut found);
//! assert_eq!(found.len(), 2);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct, built with [`KdTree::build`] and
//! queried with [`KdTree::range_search`].

mod arena;
mod axis;
mod bounds;
mod error;
mod kdtree;
mod points;
pub mod wasm;

/// A point in 3D space, `[x, y, z]`.
pub type Point = [f64; 3];

pub use arena::Node;
pub use arena::NodeArena;
pub use arena::NodeRef;
pub use axis::Axis;
pub use bounds::BoundingBox;
pub use error::Error;
pub use error::Result;
pub use kdtree::KdTree;
pub use kdtree::SearchStats;
pub use points::flatten_points;
pub use points::linear_range_search;
pub use points::point_from_slice;
pub use points::points_from_flat;
pub use points::random_points;
