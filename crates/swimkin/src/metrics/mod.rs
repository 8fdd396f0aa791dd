//! Per-frame metric calculators.
//!
//! Each calculator maps landmark series onto one frame-indexed output
//! series. Frames are mutually independent: a degenerate input at frame `i`
//! produces the NaN (numeric) or empty/`None` (categorical) sentinel for
//! that frame only and never affects frame `j ≠ i` or another metric.

mod fins;
mod head;
mod spine;
mod tail;

pub use fins::{fin_angle_series, fin_three_point_angle_series};
pub use head::{head_position_series, head_yaw_series};
pub use spine::spine_angle_series;
pub use tail::{
    furthest_tail_point_series, tail_angle_series, tail_side_distance_series, TailSide,
};
