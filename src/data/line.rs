use super::{LineSegment, Point};
use crate::config::PARALLEL_EPSILON;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line through `origin` and `through`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
  pub origin: Point,
  pub through: Point,
}

impl Line {
  pub fn new(origin: Point, through: Point) -> Line {
    Line { origin, through }
  }

  /// Point at parameter `t`, where `t = 0` is `origin` and `t = 1` is `through`.
  pub fn point_at(&self, t: f64) -> Point {
    &self.origin + &((self.through - self.origin) * t)
  }
}

impl From<LineSegment> for Line {
  fn from(segment: LineSegment) -> Line {
    Line::new(segment.src, segment.dst)
  }
}

impl From<&LineSegment> for Line {
  fn from(segment: &LineSegment) -> Line {
    Line::new(segment.src, segment.dst)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Line intersection

// Parameters (ua, ub) of the crossing along p1->p2 and p3->p4. None if the
// lines are parallel or colinear; overlapping colinear segments are not
// reported.
pub(crate) fn crossing_parameters(
  p1: &Point,
  p2: &Point,
  p3: &Point,
  p4: &Point,
) -> Option<(f64, f64)> {
  let [x1, y1] = p1.array;
  let [x2, y2] = p2.array;
  let [x3, y3] = p3.array;
  let [x4, y4] = p4.array;

  let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
  if denominator.abs() < PARALLEL_EPSILON {
    return None;
  }

  let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denominator;
  let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denominator;
  Some((ua, ub))
}

impl Intersects for &Line {
  type Result = Point;
  fn intersect(self, other: &Line) -> Option<Point> {
    let (ua, _ub) = crossing_parameters(&self.origin, &self.through, &other.origin, &other.through)?;
    Some(self.point_at(ua))
  }
}

impl Intersects for Line {
  type Result = Point;
  fn intersect(self, other: Line) -> Option<Point> {
    (&self).intersect(&other)
  }
}
