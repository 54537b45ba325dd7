pub mod graham_scan;

pub use graham_scan::convex_hull;
