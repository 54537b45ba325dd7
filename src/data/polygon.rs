use crate::data::{LineSegment, Point, PointLocation};
use crate::Error;

mod convex;
pub use convex::*;

/// Closed ring of vertices. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub(crate) vertices: Vec<Point>,
}

impl Polygon {
  pub fn new_unchecked(vertices: Vec<Point>) -> Polygon {
    Polygon { vertices }
  }

  /// # Errors
  /// Returns [`Error::InsufficientVertices`] for fewer than three vertices.
  pub fn new(vertices: Vec<Point>) -> Result<Polygon, Error> {
    let p = Self::new_unchecked(vertices);
    p.validate()?;
    Ok(p)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn points(&self) -> &[Point] {
    &self.vertices
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  pub fn into_points(self) -> Vec<Point> {
    self.vertices
  }

  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
  }

  /// Shoelace sum. Positive for counter-clockwise rings.
  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| edge.src.as_vec().cross(&edge.dst.as_vec()))
      .sum()
  }

  /// Arithmetic mean of the vertices. This is not the area centroid.
  pub fn vertex_centroid(&self) -> Option<Point> {
    Point::centroid(&self.vertices)
  }

  pub fn map_points<F>(self, f: F) -> Polygon
  where
    F: Fn(Point) -> Point,
  {
    Polygon {
      vertices: self.vertices.into_iter().map(f).collect(),
    }
  }

  #[must_use]
  pub fn scale_around(self, center: &Point, factor: f64) -> Polygon {
    self.map_points(|pt| pt.scale_around(center, factor))
  }

  /// $O(n)$ Ray casting with boundary inclusion.
  ///
  /// A point within [`SEGMENT_EPSILON`](crate::config::SEGMENT_EPSILON) of an
  /// edge is [`PointLocation::OnBoundary`]. Otherwise a horizontal ray is cast
  /// towards positive x and the edge crossings are counted.
  ///
  /// ```rust
  /// # use starcut::data::{Point, PointLocation, Polygon};
  /// let square = Polygon::new(vec![
  ///   Point::new([0.0, 0.0]),
  ///   Point::new([1.0, 0.0]),
  ///   Point::new([1.0, 1.0]),
  ///   Point::new([0.0, 1.0]),
  /// ]).unwrap();
  /// assert_eq!(square.locate(&Point::new([0.5, 0.5])), PointLocation::Inside);
  /// assert_eq!(square.locate(&Point::new([1.0, 1.0])), PointLocation::OnBoundary);
  /// assert_eq!(square.locate(&Point::new([2.0, 0.5])), PointLocation::Outside);
  /// ```
  pub fn locate(&self, pt: &Point) -> PointLocation {
    if self.iter_boundary_edges().any(|edge| edge.contains(pt)) {
      return PointLocation::OnBoundary;
    }
    let [x, y] = pt.array;
    let mut inside = false;
    for edge in self.iter_boundary_edges() {
      let [xi, yi] = edge.src.array;
      let [xj, yj] = edge.dst.array;
      if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
        inside = !inside;
      }
    }
    if inside {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }

  pub fn contains(&self, pt: &Point) -> bool {
    self.locate(pt) != PointLocation::Outside
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err, assert_ok};

  fn square() -> Polygon {
    Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([0.0, 4.0]),
    ])
  }

  #[test]
  fn too_few_vertices() {
    assert_err!(Polygon::new(vec![]));
    assert_err!(Polygon::new(vec![Point::new([0.0, 0.0]), Point::new([1.0, 0.0])]));
    assert_ok!(square().validate());
  }

  #[test]
  fn vertices_are_inside() {
    let poly = square();
    for pt in poly.iter() {
      assert_eq!(poly.locate(pt), PointLocation::OnBoundary);
      assert!(poly.contains(pt));
    }
  }

  #[test]
  fn edge_midpoints_are_on_boundary() {
    let poly = square();
    assert_eq!(poly.locate(&Point::new([2.0, 0.0])), PointLocation::OnBoundary);
    assert_eq!(poly.locate(&Point::new([4.0, 2.0])), PointLocation::OnBoundary);
    assert_eq!(
      poly.locate(&Point::new([2.0, 4.000001])),
      PointLocation::OnBoundary
    );
  }

  #[test]
  fn concave_ring() {
    // A "U" shape; the notch is outside.
    let poly = Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([3.0, 0.0]),
      Point::new([3.0, 3.0]),
      Point::new([2.0, 3.0]),
      Point::new([2.0, 1.0]),
      Point::new([1.0, 1.0]),
      Point::new([1.0, 3.0]),
      Point::new([0.0, 3.0]),
    ]);
    assert_eq!(poly.locate(&Point::new([1.5, 2.0])), PointLocation::Outside);
    assert_eq!(poly.locate(&Point::new([0.5, 2.0])), PointLocation::Inside);
    assert_eq!(poly.locate(&Point::new([2.5, 0.5])), PointLocation::Inside);
  }

  #[test]
  fn area_and_orientation() {
    let poly = square();
    assert_eq!(poly.signed_area_2x(), 32.0);
    let rev = Polygon::new_unchecked(poly.iter().rev().copied().collect());
    assert_eq!(rev.signed_area_2x(), -32.0);
  }

  #[test]
  fn scale_square() {
    let poly = square();
    let center = poly.vertex_centroid().unwrap();
    assert_eq!(center, Point::new([2.0, 2.0]));
    let big = poly.scale_around(&center, 5.0);
    assert_eq!(big.points()[0], Point::new([-8.0, -8.0]));
    assert_eq!(big.points()[2], Point::new([12.0, 12.0]));
    assert!(big.contains(&Point::new([11.0, -7.0])));
  }
}
