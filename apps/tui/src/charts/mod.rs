pub mod series;
pub mod ticks;

pub use series::{
    axis_labels, series_names, series_points, tick_positions, value_bounds, x_bound,
};
pub use ticks::{derive_ticks, TickFormatter, TickSet};
