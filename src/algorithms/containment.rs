use crate::config::DEFAULT_EXPANSION_FACTOR;
use crate::data::{Point, Polygon, PolygonConvex, StarPolygon};

/// Region that a star's cuts must fall in to be kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
  /// Convex hull of the vertices.
  Plain,
  /// Convex hull of the vertices pushed out from their centroid by `factor`.
  Expanded { factor: f64 },
}

impl Region {
  /// Self-intersecting stars with a skip above one get the expanded region.
  /// Everything else, including descriptors that are not valid stars, gets
  /// the plain hull.
  pub fn for_star(vertex_count: usize, skip: usize, factor: f64) -> Region {
    let crosses = skip > 1
      && StarPolygon::new(vertex_count, skip)
        .map(|star| star.has_self_intersections())
        .unwrap_or(false);
    if crosses {
      Region::Expanded { factor }
    } else {
      Region::Plain
    }
  }

  /// The containment polygon for `vertices`. `None` when the hull is
  /// degenerate.
  pub fn polygon(&self, vertices: &[Point]) -> Option<PolygonConvex> {
    let pts = match *self {
      Region::Plain => vertices.to_vec(),
      Region::Expanded { factor } => {
        let center = Point::centroid(vertices)?;
        Polygon::new_unchecked(vertices.to_vec())
          .scale_around(&center, factor)
          .into_points()
      }
    };
    PolygonConvex::hull_of(pts).ok()
  }

  /// Degenerate regions contain nothing.
  pub fn contains(&self, pt: &Point, vertices: &[Point]) -> bool {
    self
      .polygon(vertices)
      .map_or(false, |region| region.contains(pt))
  }
}

/// Whether `pt` lies in the containment region of the star drawn over
/// `vertices` with `skip`, using the default expansion factor.
///
/// ```rust
/// # use starcut::algorithms::is_inside_region;
/// # use starcut::data::Point;
/// let square = [
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// assert!(is_inside_region(&Point::new([0.5, 0.5]), &square, 1));
/// assert!(is_inside_region(&Point::new([1.0, 1.0]), &square, 1));
/// assert!(!is_inside_region(&Point::new([1.5, 0.5]), &square, 1));
/// ```
pub fn is_inside_region(pt: &Point, vertices: &[Point], skip: usize) -> bool {
  Region::for_star(vertices.len(), skip, DEFAULT_EXPANSION_FACTOR).contains(pt, vertices)
}
