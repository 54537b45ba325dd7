pub mod containment;
pub mod convex_hull;
pub mod intersection;
pub mod star_cuts;

#[doc(inline)]
pub use containment::{is_inside_region, Region};

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;

#[doc(inline)]
pub use intersection::{
  flat_polygon_intersections, naive::segment_intersections, polygon_intersections,
  segment_intersection,
};

#[doc(inline)]
pub use star_cuts::{
  build_star_vertices, compute_star_cuts, has_self_intersections, try_compute_star_cuts,
  StarCutter,
};
