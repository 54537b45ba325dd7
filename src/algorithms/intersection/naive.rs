use crate::data::{LineSegment, Point, Polygon};
use crate::{Error, Intersects};

/// Find all crossing pairs in a set of line segments.
///
/// Yields `(i, j, point)` with `i < j`, in nested-loop order.
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_intersections(
  edges: &[LineSegment],
) -> impl Iterator<Item = (usize, usize, Point)> + '_ {
  pairs(edges.len()).filter_map(move |(a, b)| {
    let isect = (&edges[a]).intersect(&edges[b])?;
    Some((a, b, isect))
  })
}

/// Every crossing between an edge of the closed polygon `a` and an edge of
/// the closed polygon `b`.
///
/// Edges of `a` drive the outer loop. Shared crossings (such as a shared
/// vertex) are reported once per edge pair; nothing is de-duplicated.
///
/// # Time complexity
/// $O(nm)$
///
/// ```rust
/// # use starcut::algorithms::polygon_intersections;
/// # use starcut::data::Point;
/// let square = [
///   Point::new([0.0, 0.0]),
///   Point::new([2.0, 0.0]),
///   Point::new([2.0, 2.0]),
///   Point::new([0.0, 2.0]),
/// ];
/// let shifted: Vec<Point> = square.iter().map(|p| Point::new([p[0] + 1.0, p[1] + 1.0])).collect();
/// let crossings = polygon_intersections(&square, &shifted);
/// assert_eq!(crossings, vec![Point::new([2.0, 1.0]), Point::new([1.0, 2.0])]);
/// ```
pub fn polygon_intersections(a: &[Point], b: &[Point]) -> Vec<Point> {
  let a_edges: Vec<LineSegment> = Polygon::new_unchecked(a.to_vec())
    .iter_boundary_edges()
    .collect();
  let b_edges: Vec<LineSegment> = Polygon::new_unchecked(b.to_vec())
    .iter_boundary_edges()
    .collect();
  a_edges
    .iter()
    .flat_map(|ea| b_edges.iter().filter_map(move |eb| ea.intersect(eb)))
    .collect()
}

/// [`polygon_intersections`] over interleaved `x, y` coordinate buffers.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if either buffer has an odd length.
pub fn flat_polygon_intersections(a: &[f64], b: &[f64]) -> Result<Vec<f64>, Error> {
  let a = Point::from_flat(a)?;
  let b = Point::from_flat(b)?;
  Ok(Point::flatten(&polygon_intersections(&a, &b)))
}

pub(crate) fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
  (0..n).flat_map(move |a| (a + 1..n).map(move |b| (a, b)))
}
