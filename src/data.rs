mod line;
mod line_segment;
pub(crate) mod point;
pub mod polygon;
pub(crate) mod star;
mod vector;

pub use line::*;
pub use line_segment::*;
pub use star::*;

#[doc(inline)]
pub use crate::data::polygon::{Polygon, PolygonConvex};
pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
