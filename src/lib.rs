// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Self-intersection geometry for star polygons.
//!
//! A star polygon $\{n/k\}$ connects every vertex `i` of an `n`-gon to vertex
//! `(i + k) mod n`. This crate answers whether such a star crosses itself and
//! enumerates every crossing ("cut") of its edges, filtered against the
//! star's containment region.
//!
//! ```rust
//! use starcut::algorithms::{build_star_vertices, compute_star_cuts};
//!
//! let vertices = build_star_vertices(400.0, 5, 2);
//! let cuts = compute_star_cuts(&vertices, 2);
//! assert_eq!(cuts.len(), 5);
//! ```

pub mod algorithms;
pub mod config;
pub mod data;
mod intersection;
mod orientation;

pub use config::Config;
pub use intersection::Intersects;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// A star descriptor or coordinate buffer outside its domain.
  InvalidParameter,
  /// Two consecutive edges are either colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::InvalidParameter => write!(f, "Invalid parameter"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}
