use num::integer::gcd;
use std::f64::consts::PI;

use super::Point;
use crate::Error;

///////////////////////////////////////////////////////////////////////////////
// StarPolygon

/// Star polygon $\{n/k\}$: vertex `i` connects to vertex `(i + k) mod n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarPolygon {
  n: usize,
  k: usize,
}

impl StarPolygon {
  /// # Errors
  /// Returns [`Error::InvalidParameter`] unless `n >= 3` and `k >= 1`.
  ///
  /// ```rust
  /// # use starcut::data::StarPolygon;
  /// # use starcut::Error;
  /// assert!(StarPolygon::new(5, 2).is_ok());
  /// assert_eq!(StarPolygon::new(2, 1), Err(Error::InvalidParameter));
  /// assert_eq!(StarPolygon::new(5, 0), Err(Error::InvalidParameter));
  /// ```
  pub fn new(n: usize, k: usize) -> Result<StarPolygon, Error> {
    if n < 3 || k < 1 {
      return Err(Error::InvalidParameter);
    }
    Ok(StarPolygon { n, k })
  }

  pub fn vertex_count(&self) -> usize {
    self.n
  }

  pub fn skip(&self) -> usize {
    self.k
  }

  /// The skip reduced modulo `n` and reflected into `(0, n/2]`. A skip that
  /// is a multiple of `n` normalizes to `n`.
  pub fn normalized_skip(&self) -> usize {
    normalize(self.n, self.k)
  }

  /// Number of disjoint sub-stars the figure decomposes into.
  pub fn components(&self) -> usize {
    gcd(self.n, self.normalized_skip())
  }

  /// Whether two non-adjacent edges of the star cross.
  ///
  /// A coprime skip strictly between 1 and `n/2` always crosses itself. A
  /// star with `d = gcd(n, k) > 1` is `d` copies of $\{n/d, k/d\}$ and
  /// crosses itself iff that smaller star does.
  ///
  /// ```rust
  /// # use starcut::data::StarPolygon;
  /// let star = |n, k| StarPolygon::new(n, k).unwrap();
  /// assert!(star(5, 2).has_self_intersections());
  /// assert!(!star(5, 1).has_self_intersections());
  /// assert!(!star(6, 2).has_self_intersections());
  /// assert!(star(14, 4).has_self_intersections());
  /// ```
  pub fn has_self_intersections(&self) -> bool {
    self_intersecting(self.n, self.k)
  }

  /// The `n` directed edges `i -> (i + k) mod n`, in order of `i`. Uses the
  /// raw skip, not the normalized one.
  pub fn edges(&self) -> impl Iterator<Item = StarEdge> {
    star_edges(self.n, self.k)
  }

  /// `n` points evenly spaced on a circle of diameter `size`, centered on
  /// the origin, in plain angular order starting on the positive x-axis.
  pub fn regular_vertices(&self, size: f64) -> Vec<Point> {
    regular_vertices(size / 2.0, self.n)
  }
}

pub(crate) fn regular_vertices(radius: f64, n: usize) -> Vec<Point> {
  (0..n)
    .map(|i| {
      let angle = 2.0 * PI * i as f64 / n as f64;
      Point::new([radius * angle.cos(), radius * angle.sin()])
    })
    .collect()
}

// No validation: a zero skip yields n loops, n < 1 yields nothing.
pub(crate) fn star_edges(n: usize, k: usize) -> impl Iterator<Item = StarEdge> {
  (0..n).map(move |src| StarEdge {
    src,
    dst: (src + k % n) % n,
  })
}

fn normalize(n: usize, k: usize) -> usize {
  let mut k = k % n;
  if 2 * k > n {
    k = n - k;
  }
  if k == 0 {
    n
  } else {
    k
  }
}

// n shrinks on every recursive call, so this terminates. Degenerate
// descriptors (n < 3) reached through the gcd reduction are not
// self-intersecting.
fn self_intersecting(n: usize, k: usize) -> bool {
  if n < 3 {
    return false;
  }
  let k = normalize(n, k);
  if k == n {
    return false;
  }
  let d = gcd(n, k);
  if d == 1 {
    1 < k && 2 * k < n
  } else {
    self_intersecting(n / d, k / d)
  }
}

///////////////////////////////////////////////////////////////////////////////
// StarEdge

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarEdge {
  pub src: usize,
  pub dst: usize,
}

impl StarEdge {
  pub fn shares_endpoint(&self, other: &StarEdge) -> bool {
    self.src == other.src || self.src == other.dst || self.dst == other.src || self.dst == other.dst
  }

  /// Unordered index pair.
  pub fn key(&self) -> (usize, usize) {
    (self.src.min(self.dst), self.src.max(self.dst))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::assert_err;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn reflected_skip_agrees(#[strategy(3..200usize)] n: usize, #[strategy(1..200usize)] k: usize) {
    prop_assume!(k % n != 0);
    let forward = StarPolygon::new(n, k).unwrap();
    let backward = StarPolygon::new(n, n - k % n).unwrap();
    prop_assert_eq!(forward.normalized_skip(), backward.normalized_skip());
    prop_assert_eq!(
      forward.has_self_intersections(),
      backward.has_self_intersections()
    );
  }

  #[proptest]
  fn convex_polygons_never_cross(#[strategy(3..500usize)] n: usize) {
    prop_assert!(!StarPolygon::new(n, 1).unwrap().has_self_intersections());
    prop_assert!(!StarPolygon::new(n, n + 1).unwrap().has_self_intersections());
  }

  #[proptest]
  fn normalized_skip_in_range(#[strategy(3..200usize)] n: usize, #[strategy(1..1000usize)] k: usize) {
    let s = StarPolygon::new(n, k).unwrap().normalized_skip();
    prop_assert!(s == n || (s > 0 && 2 * s <= n));
  }

  fn star(n: usize, k: usize) -> StarPolygon {
    StarPolygon::new(n, k).unwrap()
  }

  #[test]
  fn pentagram() {
    assert!(star(5, 2).has_self_intersections());
    assert!(star(5, 3).has_self_intersections());
    assert!(star(5, 7).has_self_intersections());
  }

  #[test]
  fn compound_stars_reduce() {
    // Two triangles.
    assert_eq!(star(6, 2).components(), 2);
    assert!(!star(6, 2).has_self_intersections());
    // Two pentagrams.
    assert_eq!(star(10, 4).components(), 2);
    assert!(star(10, 4).has_self_intersections());
    // Two squares.
    assert!(!star(8, 2).has_self_intersections());
    // Three digons.
    assert!(!star(6, 3).has_self_intersections());
  }

  #[test]
  fn half_skip_is_not_self_intersecting() {
    assert!(!star(8, 4).has_self_intersections());
    assert!(!star(4, 2).has_self_intersections());
    assert!(star(8, 3).has_self_intersections());
  }

  #[test]
  fn multiple_of_n() {
    assert_eq!(star(5, 5).normalized_skip(), 5);
    assert_eq!(star(5, 10).normalized_skip(), 5);
    assert!(!star(5, 5).has_self_intersections());
  }

  #[test]
  fn invalid_descriptors() {
    assert_err!(StarPolygon::new(0, 1));
    assert_err!(StarPolygon::new(2, 1));
    assert_err!(StarPolygon::new(3, 0));
  }

  #[test]
  fn edges_wrap() {
    let edges: Vec<_> = star(5, 2).edges().collect();
    assert_eq!(edges.len(), 5);
    assert_eq!(edges[0], StarEdge { src: 0, dst: 2 });
    assert_eq!(edges[4], StarEdge { src: 4, dst: 1 });
    assert!(edges[0].shares_endpoint(&edges[2]));
    assert!(!edges[0].shares_endpoint(&edges[1]));
    assert_eq!(edges[4].key(), (1, 4));
  }

  #[test]
  fn huge_skip_wraps() {
    let skip = usize::MAX - 2;
    let reduced: Vec<_> = star(5, skip % 5).edges().collect();
    assert_eq!(star(5, skip).edges().collect::<Vec<_>>(), reduced);
    assert_eq!(star(5, usize::MAX).edges().count(), 5);
  }

  #[test]
  fn regular_vertices_on_circle() {
    let pts = star(6, 1).regular_vertices(10.0);
    assert_eq!(pts.len(), 6);
    assert_eq!(pts[0], Point::new([5.0, 0.0]));
    for pt in pts.iter() {
      assert!((pt.euclidean_distance(&Point::new([0.0, 0.0])) - 5.0).abs() < 1e-12);
    }
  }
}
