//! Widget components for the air-quality dashboard.
//!
//! All widgets draw through the [`Canvas`](crate::canvas::Canvas) capability
//! so they run unchanged on the e-paper panel, the simulator and in tests.

mod cells;
mod primitives;

pub use cells::{QUALITY_PLACEHOLDER, draw_data_cell, draw_plot_cell, draw_status_cell};
pub use primitives::{draw_history_plot, print_at};
