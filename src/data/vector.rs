use array_init::array_init;
use num_traits::identities::Zero;
use std::iter::Sum;
use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Vector {
  pub fn dot(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// z-component of the 3D cross product. Positive if `other` is
  /// counter-clockwise from `self`.
  pub fn cross(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }

  pub fn magnitude(&self) -> f64 {
    self.squared_magnitude().sqrt()
  }
}

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl Add for Vector {
  type Output = Vector;
  fn add(self, other: Vector) -> Vector {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}

impl Sub for Vector {
  type Output = Vector;
  fn sub(self, other: Vector) -> Vector {
    Vector(array_init(|i| self.0[i] - other.0[i]))
  }
}

impl Mul<f64> for Vector {
  type Output = Vector;
  fn mul(self, scale: f64) -> Vector {
    Vector(array_init(|i| self.0[i] * scale))
  }
}

impl Neg for Vector {
  type Output = Vector;
  fn neg(self) -> Vector {
    Vector(array_init(|i| -self.0[i]))
  }
}

impl Zero for Vector {
  fn zero() -> Vector {
    Vector([0.0, 0.0])
  }

  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl Sum for Vector {
  fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
    iter.fold(Vector::zero(), Add::add)
  }
}
