//! Core of the air-quality dashboard.
//!
//! This crate contains everything between the sensor drivers and the panel,
//! shared between the desktop simulator and the e-paper firmware:
//!
//! - [`history`]: Fixed-capacity rolling sample history
//! - [`plot`]: Scaling of sample runs into pixel-space segments and labels
//! - [`readings`]: CO2, particulate and VOC reading types
//! - [`session`]: Per-sensor measurement and power-mode state machine
//! - [`settings`]: Calibration applied when a sensor starts
//! - [`quality`]: Good/bad air-quality verdict
//! - [`canvas`]: Drawing capability and its embedded-graphics adapter
//! - [`widgets`]: Grid cells and the history plot
//! - [`dashboard`]: Dashboard state and the grid layout
//! - [`monitor`]: Refresh cycle over all sensors
//! - [`config`], [`thresholds`], [`colors`], [`styles`]: Constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Waiting goes through
//! `embedded_hal::delay::DelayNs` and logging through the `log` facade, so
//! the platform picks the timer and the log sink.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod canvas;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod history;
pub mod monitor;
pub mod plot;
pub mod quality;
pub mod readings;
pub mod session;
pub mod settings;
pub mod styles;
pub mod thresholds;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use canvas::{Canvas, GraphicsCanvas};
pub use dashboard::{Dashboard, draw_heat_up_screen};
pub use history::{RollingHistory, Sample};
pub use monitor::AirMonitor;
pub use plot::{Plot, PlotError, scale};
pub use quality::{QualityLevel, judge_quality};
pub use readings::{Co2Reading, ParticulateReading, Reading, VocReading};
pub use session::{MeasureMode, SensorDriver, SensorSession, SessionError, SessionState};
pub use settings::{Co2Settings, ParticulateSettings, VocSettings};
