use std::cmp::Ordering;

use crate::config::COLINEAR_EPSILON;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Determinants within [`COLINEAR_EPSILON`] of zero count as
  /// [`Orientation::CoLinear`].
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use starcut::Orientation;
  /// let p1 = [0.0, 0.0];
  /// let p2 = [0.0, 1.0]; // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &[0.0, 2.0]).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &[-1.0, 2.0]).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &[1.0, 2.0]).is_cw());
  /// ```
  pub fn new(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    let det = Orientation::determinant(p1, p2, p3);
    if det.abs() < COLINEAR_EPSILON {
      CoLinear
    } else if det > 0.0 {
      CounterClockWise
    } else {
      ClockWise
    }
  }

  /// Twice the signed area of the triangle `p1, p2, p3`. Positive when the
  /// turn is counter-clockwise.
  ///
  /// Uses the adaptive-precision predicate from `geometry_predicates`, so
  /// the sign is exact even when the magnitude is tiny.
  pub fn determinant(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> f64 {
    geometry_predicates::predicates::orient2d(*p1, *p2, *p3)
  }

  /// Exact turn direction with no epsilon. Only a determinant of exactly
  /// zero is colinear.
  pub fn new_exact(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    match Orientation::determinant(p1, p2, p3).partial_cmp(&0.0) {
      Some(Ordering::Greater) => CounterClockWise,
      Some(Ordering::Less) => ClockWise,
      _ => CoLinear,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}
