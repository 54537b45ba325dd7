use crate::algorithms::convex_hull;
use crate::data::{Point, PointLocation};
use crate::{Error, Orientation};

use super::Polygon;

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonConvex(Polygon);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl PolygonConvex {
  /// $O(1)$ Assume that a polygon is convex and counter-clockwise.
  pub fn new_unchecked(poly: Polygon) -> PolygonConvex {
    PolygonConvex(poly)
  }

  /// $O(n \log n)$ Convex hull of `pts` as a polygon.
  ///
  /// # Errors
  /// Returns [`Error::InsufficientVertices`] if the hull has fewer than three
  /// vertices (all points coincident or colinear).
  pub fn hull_of(pts: Vec<Point>) -> Result<PolygonConvex, Error> {
    let poly = Polygon::new(convex_hull(pts))?;
    Ok(PolygonConvex(poly))
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    self.0.locate(pt)
  }

  pub fn contains(&self, pt: &Point) -> bool {
    self.0.contains(pt)
  }

  /// $O(n)$ Every turn along the boundary is counter-clockwise.
  pub fn validate(&self) -> Result<(), Error> {
    self.0.validate()?;
    let pts = self.0.points();
    let n = pts.len();
    for i in 0..n {
      let turn = Orientation::new(&pts[i], &pts[(i + 1) % n], &pts[(i + 2) % n]);
      if !turn.is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon {
    &self.0
  }
}

impl From<PolygonConvex> for Polygon {
  fn from(convex: PolygonConvex) -> Polygon {
    convex.0
  }
}
