use array_init::array_init;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{Error, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn as_vec(&self) -> Vector {
    Vector(self.array)
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    (rhs - self).squared_magnitude()
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// True if `other` is strictly closer than `threshold`.
  pub fn is_near(&self, other: &Point, threshold: f64) -> bool {
    self.euclidean_distance(other) < threshold
  }

  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    OrderedFloat(self.squared_euclidean_distance(p))
      .cmp(&OrderedFloat(self.squared_euclidean_distance(q)))
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Push this point away from (or towards) `center` by `factor`.
  #[must_use]
  pub fn scale_around(&self, center: &Point, factor: f64) -> Point {
    center + &((self - center) * factor)
  }

  /// Arithmetic mean of the points. `None` if there are no points.
  pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
      return None;
    }
    let sum: Vector = points.iter().map(Point::as_vec).sum();
    Some(Point::from(sum * (1.0 / points.len() as f64)))
  }

  /// Read points from interleaved `x, y` coordinates.
  ///
  /// # Errors
  /// Returns [`Error::InvalidParameter`] if the slice has an odd length.
  ///
  /// ```rust
  /// # use starcut::data::Point;
  /// let pts = Point::from_flat(&[0.0, 1.0, 2.0, 3.0]).unwrap();
  /// assert_eq!(pts, vec![Point::new([0.0, 1.0]), Point::new([2.0, 3.0])]);
  /// assert!(Point::from_flat(&[0.0, 1.0, 2.0]).is_err());
  /// ```
  pub fn from_flat(coords: &[f64]) -> Result<Vec<Point>, Error> {
    if coords.len() % 2 != 0 {
      return Err(Error::InvalidParameter);
    }
    Ok(
      coords
        .chunks_exact(2)
        .map(|xy| Point::new([xy[0], xy[1]]))
        .collect(),
    )
  }

  pub fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|pt| pt.array).collect()
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point { array: vector.0 }
  }
}

mod add;
mod sub;

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::Orientation::*;

  use claims::{assert_err, assert_none, assert_ok};
  use proptest::prelude::*;

  pub fn any_point() -> impl Strategy<Value = Point> {
    prop::array::uniform2(-1e3..1e3f64).prop_map(Point::new)
  }

  proptest! {
    #[test]
    fn distance_is_symmetric(pt1 in any_point(), pt2 in any_point()) {
      prop_assert_eq!(pt1.euclidean_distance(&pt2), pt2.euclidean_distance(&pt1))
    }

    #[test]
    fn scale_by_one_is_identity(pt in any_point(), center in any_point()) {
      let scaled = pt.scale_around(&center, 1.0);
      prop_assert!(scaled.is_near(&pt, 1e-9))
    }

    #[test]
    fn flatten_then_read(pts in prop::collection::vec(any_point(), 0..20)) {
      let flat = Point::flatten(&pts);
      prop_assert_eq!(flat.len(), pts.len() * 2);
      prop_assert_eq!(Point::from_flat(&flat).unwrap(), pts)
    }
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([0.0, 1.0]), &Point::new([2.0, 2.0])),
      ClockWise
    );
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([0.0, 1.0]), &Point::new([-2.0, 2.0])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([1.0, 0.0]).orientation(&Point::new([2.0, 0.0]), &Point::new([0.0, 0.0])),
      CoLinear
    );
  }

  #[test]
  fn near_is_strict() {
    let a = Point::new([0.0, 0.0]);
    assert!(a.is_near(&Point::new([0.0005, 0.0]), 0.001));
    assert!(!a.is_near(&Point::new([0.002, 0.0]), 0.001));
    assert!(!a.is_near(&a, 0.0));
  }

  #[test]
  fn centroid_of_square() {
    let pts = [
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([2.0, 2.0]),
      Point::new([0.0, 2.0]),
    ];
    assert_eq!(Point::centroid(&pts), Some(Point::new([1.0, 1.0])));
    assert_none!(Point::centroid(&[]));
  }

  #[test]
  fn scale_around_centroid() {
    let center = Point::new([1.0, 1.0]);
    let pt = Point::new([2.0, 1.0]);
    assert_eq!(pt.scale_around(&center, 5.0), Point::new([6.0, 1.0]));
  }

  #[test]
  fn from_flat_rejects_odd_lengths() {
    assert_err!(Point::from_flat(&[1.0]));
    assert_ok!(Point::from_flat(&[]));
  }

  #[test]
  fn cmp_distance() {
    let origin = Point::new([0.0, 0.0]);
    let near = Point::new([1.0, 0.0]);
    let far = Point::new([0.0, 3.0]);
    assert_eq!(origin.cmp_distance_to(&near, &far), Ordering::Less);
    assert_eq!(origin.cmp_distance_to(&far, &near), Ordering::Greater);
  }
}
