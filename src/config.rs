/// Orientation determinants smaller than this are treated as zero.
pub const COLINEAR_EPSILON: f64 = 1e-10;

/// Line-intersection denominators smaller than this mean the lines are
/// parallel (or colinear).
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Slack on segment parameters and on-segment distances.
pub const SEGMENT_EPSILON: f64 = 1e-5;

pub const DEFAULT_MERGE_DISTANCE: f64 = 0.001;

pub const DEFAULT_EXPANSION_FACTOR: f64 = 5.0;

/// Settings for [`StarCutter`](crate::algorithms::StarCutter).
///
/// # Examples
///
/// ```rust
/// # use starcut::Config;
/// let config = Config::default().with_expansion_factor(3.0).with_trace(true);
/// assert_eq!(config.merge_distance, 0.001);
/// assert_eq!(config.expansion_factor, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
  /// Two cuts closer than this are the same cut.
  pub merge_distance: f64,
  /// How far vertices are pushed out from their centroid when building the
  /// containment region of a self-intersecting star. Empirical, not derived.
  pub expansion_factor: f64,
  /// Log every accepted, merged and rejected candidate at `debug` level.
  pub trace: bool,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      merge_distance: DEFAULT_MERGE_DISTANCE,
      expansion_factor: DEFAULT_EXPANSION_FACTOR,
      trace: false,
    }
  }
}

impl Config {
  #[must_use]
  pub fn with_merge_distance(mut self, merge_distance: f64) -> Config {
    self.merge_distance = merge_distance;
    self
  }

  #[must_use]
  pub fn with_expansion_factor(mut self, expansion_factor: f64) -> Config {
    self.expansion_factor = expansion_factor;
    self
  }

  #[must_use]
  pub fn with_trace(mut self, trace: bool) -> Config {
    self.trace = trace;
    self
  }
}
