use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use crate::data::Point;
use crate::Orientation;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Output is counter-clockwise and starts at the lowest-leftmost point.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Inputs with fewer than three points are
/// returned unchanged. Colinear and coincident points collapse, so the result
/// may have fewer than three points for degenerate inputs.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
/// * Turns within [`COLINEAR_EPSILON`](crate::config::COLINEAR_EPSILON) of
///   straight are dropped.
///
/// # Examples
///
/// ```rust
/// # use starcut::algorithms::convex_hull;
/// # use starcut::data::Point;
/// let square = vec![
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 0.0]),
///   Point::new([0.5, 0.5]),
/// ];
/// assert_eq!(
///   convex_hull(square),
///   vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
///     Point::new([0.0, 1.0]),
///   ]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(mut pts: Vec<Point>) -> Vec<Point> {
  if pts.len() < 3 {
    return pts;
  }
  let pivot_idx = match smallest_point(&pts) {
    Some(idx) => idx,
    None => return pts,
  };
  let pivot = pts.swap_remove(pivot_idx);

  // The exact predicate keeps the comparator a total order. All points lie
  // in the half-plane above the pivot, so angular order is well defined.
  pts.sort_by(|a, b| ccw_cmp_around(&pivot, a, b));

  let mut hull: Vec<Point> = Vec::with_capacity(pts.len() + 1);
  hull.push(pivot);
  'scan: for pt in pts {
    while hull.len() >= 2 {
      let top = hull[hull.len() - 1];
      let below = hull[hull.len() - 2];
      match below.orientation(&top, &pt) {
        Orientation::CounterClockWise => break,
        // Nearly colinear and short of `top`: `pt` is on the hull edge.
        Orientation::CoLinear if below.cmp_distance_to(&pt, &top) == Ordering::Less => {
          continue 'scan
        }
        _ => {
          hull.pop();
        }
      }
    }
    hull.push(pt);
  }
  hull
}

fn ccw_cmp_around(pivot: &Point, a: &Point, b: &Point) -> Ordering {
  match Orientation::new_exact(pivot, a, b) {
    Orientation::CounterClockWise => Ordering::Less,
    Orientation::ClockWise => Ordering::Greater,
    Orientation::CoLinear => pivot.cmp_distance_to(a, b),
  }
}

// Lowest y, ties broken by lowest x.
// O(n)
fn smallest_point(pts: &[Point]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| (OrderedFloat(pt.y_coord()), OrderedFloat(pt.x_coord())))
    .map(|(idx, _)| idx)
}
