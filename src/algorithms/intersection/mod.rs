use crate::data::{Line, LineSegment, Point};
use crate::Intersects;

pub mod naive;

pub use naive::{flat_polygon_intersections, polygon_intersections};

/// Crossing point of `p1 -> p2` and `p3 -> p4`.
///
/// With `extend == false` both parameters must fall within the segments,
/// give or take [`SEGMENT_EPSILON`](crate::config::SEGMENT_EPSILON). With
/// `extend == true` the segments are treated as infinite lines. Parallel
/// and colinear inputs, including overlapping colinear segments, yield
/// `None`.
///
/// ```rust
/// # use starcut::algorithms::segment_intersection;
/// # use starcut::data::Point;
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([2.0, -1.0]);
/// let d = Point::new([2.0, 1.0]);
/// assert_eq!(segment_intersection(&a, &b, &c, &d, false), None);
/// assert_eq!(segment_intersection(&a, &b, &c, &d, true), Some(Point::new([2.0, 0.0])));
/// ```
pub fn segment_intersection(
  p1: &Point,
  p2: &Point,
  p3: &Point,
  p4: &Point,
  extend: bool,
) -> Option<Point> {
  if extend {
    Line::new(*p1, *p2).intersect(Line::new(*p3, *p4))
  } else {
    LineSegment::new(*p1, *p2).intersect(LineSegment::new(*p3, *p4))
  }
}
