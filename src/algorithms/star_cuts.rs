use log::{debug, warn};

use super::containment::Region;
use super::intersection::naive::pairs;
use crate::data::star::{regular_vertices, star_edges};
use crate::data::{LineSegment, Point, StarEdge, StarPolygon};
use crate::{Config, Error, Intersects};

/// Enumerates the self-intersection points ("cuts") of a star polygon drawn
/// over an arbitrary vertex ring.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StarCutter {
  config: Config,
}

impl StarCutter {
  pub fn new(config: Config) -> StarCutter {
    StarCutter { config }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// $O(n^2)$ Every distinct crossing of the star edges `i -> (i + skip) mod n`.
  ///
  /// Edge pairs sharing a vertex index are skipped. A crossing is kept if it
  /// lies in the containment [`Region`] of the star and is not within
  /// [`Config::merge_distance`] of a crossing kept earlier. Crossings are
  /// returned in discovery order: edge pairs `(i, j)`, `i < j`, in nested-loop
  /// order.
  ///
  /// # Errors
  /// Returns [`Error::InvalidParameter`] for fewer than four vertices.
  pub fn compute(&self, vertices: &[Point], skip: usize) -> Result<Vec<Point>, Error> {
    let n = vertices.len();
    if n < 4 {
      return Err(Error::InvalidParameter);
    }

    let region = Region::for_star(n, skip, self.config.expansion_factor);
    let polygon = match region.polygon(vertices) {
      Some(polygon) => polygon,
      None => {
        self.trace(format_args!("degenerate {:?} region, no cuts", region));
        return Ok(Vec::new());
      }
    };

    let edges: Vec<StarEdge> = star_edges(n, skip).collect();
    let segments: Vec<LineSegment> = edges
      .iter()
      .map(|edge| LineSegment::new(vertices[edge.src], vertices[edge.dst]))
      .collect();

    let mut cuts: Vec<Point> = Vec::new();
    for (a, b) in pairs(n) {
      if edges[a].shares_endpoint(&edges[b]) {
        continue;
      }
      let pt = match (&segments[a]).intersect(&segments[b]) {
        Some(pt) => pt,
        None => continue,
      };
      if !polygon.contains(&pt) {
        self.trace(format_args!(
          "rejected {:?} from {:?} x {:?}: outside {:?} region",
          pt, edges[a], edges[b], region
        ));
        continue;
      }
      if cuts
        .iter()
        .any(|cut| cut.is_near(&pt, self.config.merge_distance))
      {
        self.trace(format_args!(
          "merged {:?} from {:?} x {:?}",
          pt, edges[a], edges[b]
        ));
        continue;
      }
      self.trace(format_args!(
        "accepted {:?} from {:?} x {:?}",
        pt, edges[a], edges[b]
      ));
      cuts.push(pt);
    }
    Ok(cuts)
  }

  fn trace(&self, args: std::fmt::Arguments<'_>) {
    if self.config.trace {
      debug!("star cut: {}", args);
    }
  }
}

/// [`StarCutter::compute`] with the default [`Config`]. Too few vertices
/// logs a warning and yields no cuts.
///
/// ```rust
/// # use starcut::algorithms::{build_star_vertices, compute_star_cuts};
/// let hexagon = build_star_vertices(10.0, 6, 1);
/// assert!(compute_star_cuts(&hexagon, 1).is_empty());
/// assert!(compute_star_cuts(&hexagon[..3], 1).is_empty());
/// ```
pub fn compute_star_cuts(vertices: &[Point], skip: usize) -> Vec<Point> {
  try_compute_star_cuts(vertices, skip).unwrap_or_else(|err| {
    warn!(
      "compute_star_cuts: {} for {} vertices (skip {}), need at least 4",
      err,
      vertices.len(),
      skip
    );
    Vec::new()
  })
}

pub fn try_compute_star_cuts(vertices: &[Point], skip: usize) -> Result<Vec<Point>, Error> {
  StarCutter::default().compute(vertices, skip)
}

/// [`StarPolygon::has_self_intersections`] that treats invalid descriptors
/// (`n < 3` or `k < 1`) as not self-intersecting, with a logged warning.
pub fn has_self_intersections(n: usize, k: usize) -> bool {
  match StarPolygon::new(n, k) {
    Ok(star) => star.has_self_intersections(),
    Err(err) => {
      warn!("has_self_intersections: {} {{{}/{}}}", err, n, k);
      false
    }
  }
}

/// `n` points evenly spaced on a circle of radius `radius / 2` around the
/// origin, in angular order. `_k` does not affect the points; the star
/// traversal is applied later by the skip given to [`compute_star_cuts`].
pub fn build_star_vertices(radius: f64, n: usize, _k: usize) -> Vec<Point> {
  regular_vertices(radius / 2.0, n)
}
