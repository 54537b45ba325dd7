use super::Point;
use crate::data::Vector;
use array_init::array_init;
use std::ops::Sub;

// &point - &point = vector
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Vector;

  fn sub(self: &'b Point, other: &'a Point) -> Vector {
    Vector(array_init(|i| self.array[i] - other.array[i]))
  }
}

// point - point = vector
impl Sub<Point> for Point {
  type Output = Vector;

  fn sub(self: Point, other: Point) -> Vector {
    &self - &other
  }
}

// &point - &vector = point
impl<'a, 'b> Sub<&'a Vector> for &'b Point {
  type Output = Point;

  fn sub(self: &'b Point, other: &'a Vector) -> Point {
    Point {
      array: array_init(|i| self.array[i] - other.0[i]),
    }
  }
}
