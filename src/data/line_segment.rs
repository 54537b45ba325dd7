use std::ops::Range;

use super::line::crossing_parameters;
use super::{Point, Vector};
use crate::config::SEGMENT_EPSILON;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Closed segment from `src` to `dst`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub src: Point,
  pub dst: Point,
}

impl LineSegment {
  pub fn new(src: Point, dst: Point) -> LineSegment {
    LineSegment { src, dst }
  }

  pub fn direction(&self) -> Vector {
    self.dst - self.src
  }

  pub fn length(&self) -> f64 {
    self.direction().magnitude()
  }

  pub fn point_at(&self, t: f64) -> Point {
    &self.src + &(self.direction() * t)
  }

  /// Distance from `pt` to the closest point on the segment.
  pub fn distance_to(&self, pt: &Point) -> f64 {
    let d = self.direction();
    let len2 = d.squared_magnitude();
    if len2 == 0.0 {
      return self.src.euclidean_distance(pt);
    }
    let t = (d.dot(&(pt - &self.src)) / len2).clamp(0.0, 1.0);
    self.point_at(t).euclidean_distance(pt)
  }

  /// Distance from `pt` to the infinite line carrying the segment.
  pub fn line_distance(&self, pt: &Point) -> f64 {
    let d = self.direction();
    let len = d.magnitude();
    if len == 0.0 {
      return self.src.euclidean_distance(pt);
    }
    d.cross(&(pt - &self.src)).abs() / len
  }

  /// True if `pt` lies on the segment, give or take [`SEGMENT_EPSILON`] both
  /// across the segment and along it (in parameter space).
  ///
  /// ```rust
  /// # use starcut::data::{LineSegment, Point};
  /// let seg = LineSegment::new(Point::new([0.0, 0.0]), Point::new([10.0, 0.0]));
  /// assert!(seg.contains(&Point::new([5.0, 0.0])));
  /// assert!(seg.contains(&Point::new([10.0, 0.000001])));
  /// assert!(!seg.contains(&Point::new([11.0, 0.0])));
  /// ```
  pub fn contains(&self, pt: &Point) -> bool {
    let d = self.direction();
    let len2 = d.squared_magnitude();
    if len2.sqrt() < SEGMENT_EPSILON {
      return self.src.euclidean_distance(pt) <= SEGMENT_EPSILON;
    }
    if self.line_distance(pt) > SEGMENT_EPSILON {
      return false;
    }
    let t = d.dot(&(pt - &self.src)) / len2;
    (-SEGMENT_EPSILON..=1.0 + SEGMENT_EPSILON).contains(&t)
  }
}

impl From<Range<Point>> for LineSegment {
  fn from(range: Range<Point>) -> LineSegment {
    LineSegment::new(range.start, range.end)
  }
}

impl From<Range<(f64, f64)>> for LineSegment {
  fn from(range: Range<(f64, f64)>) -> LineSegment {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegment intersection

fn within_segment(t: f64) -> bool {
  (-SEGMENT_EPSILON..=1.0 + SEGMENT_EPSILON).contains(&t)
}

// Colinear overlaps are reported as no intersection.
impl Intersects for &LineSegment {
  type Result = Point;
  fn intersect(self, other: &LineSegment) -> Option<Point> {
    let (ua, ub) = crossing_parameters(&self.src, &self.dst, &other.src, &other.dst)?;
    if !within_segment(ua) || !within_segment(ub) {
      return None;
    }
    Some(self.point_at(ua))
  }
}

impl Intersects for LineSegment {
  type Result = Point;
  fn intersect(self, other: LineSegment) -> Option<Point> {
    (&self).intersect(&other)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::point::tests::any_point;

  use claims::{assert_none, assert_some};
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn flip_intersects_prop(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] c: Point,
    #[strategy(any_point())] d: Point,
  ) {
    let l1 = LineSegment::new(a, b);
    let l2 = LineSegment::new(c, d);
    prop_assert_eq!((&l1).intersect(&l2).is_some(), (&l2).intersect(&l1).is_some());
  }

  #[proptest]
  fn distance_bounds(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] pt: Point,
  ) {
    let seg = LineSegment::new(a, b);
    let dist = seg.distance_to(&pt);
    prop_assert!(dist <= pt.euclidean_distance(&a) + 1e-9);
    prop_assert!(dist <= pt.euclidean_distance(&b) + 1e-9);
    prop_assert!(dist + 1e-9 >= seg.line_distance(&pt));
  }

  //             P6
  //
  // P7      P5
  //
  // P4  P2
  //
  // P1  P3
  //
  static P1: Point = Point::new([0.0, 0.0]);
  static P2: Point = Point::new([1.0, 1.0]);
  static P3: Point = Point::new([1.0, 0.0]);
  static P4: Point = Point::new([0.0, 1.0]);
  static P5: Point = Point::new([2.0, 2.0]);
  static P6: Point = Point::new([3.0, 3.0]);
  static P7: Point = Point::new([0.0, 2.0]);

  fn seg(range: Range<Point>) -> LineSegment {
    LineSegment::from(range)
  }

  #[test]
  fn line_crossing() {
    assert_eq!(
      seg(P1..P2).intersect(seg(P3..P4)),
      Some(Point::new([0.5, 0.5]))
    )
  }

  #[test]
  fn line_not_crossing() {
    assert_none!(seg(P1..P3).intersect(seg(P2..P4)));
  }

  #[test]
  fn endpoints_touch() {
    assert_eq!(seg(P1..P2).intersect(seg(P2..P3)), Some(P2))
  }

  #[test]
  fn colinear_overlap_is_not_reported() {
    assert_none!(seg(P1..P5).intersect(seg(P2..P6)));
  }

  #[test]
  fn near_miss_within_tolerance() {
    // Crossing sits 1e-6 beyond the end of the first segment.
    let a = LineSegment::from((0.0, 0.0)..(1.0, 0.0));
    let b = LineSegment::from((1.000001, -1.0)..(1.000001, 1.0));
    assert_some!(a.intersect(b));
    let c = LineSegment::from((1.1, -1.0)..(1.1, 1.0));
    assert_none!(a.intersect(c));
  }

  #[test]
  fn vertical_and_horizontal() {
    assert_eq!(
      seg(P4..P7).intersect(seg(P4..P2)),
      Some(P4)
    );
  }

  #[test]
  fn distance_to_segment() {
    let s = seg(P1..P3);
    assert_eq!(s.distance_to(&Point::new([0.5, 2.0])), 2.0);
    assert_eq!(s.distance_to(&Point::new([4.0, 4.0])), 5.0);
    assert_eq!(s.line_distance(&Point::new([4.0, 4.0])), 4.0);
    let degenerate = seg(P2..P2);
    assert_eq!(degenerate.distance_to(&Point::new([1.0, 4.0])), 3.0);
  }

  #[test]
  fn contains_endpoints() {
    let s = seg(P1..P5);
    assert!(s.contains(&P1));
    assert!(s.contains(&P5));
    assert!(s.contains(&P2));
    assert!(!s.contains(&P6));
    assert!(!s.contains(&P3));
  }
}
