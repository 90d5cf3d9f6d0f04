//! Timing for the simulator.
//!
//! These use `std::time::Duration` and `std::thread`, which are not available
//! in `no_std` environments, so they live here rather than in the common crate.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Time between two dashboard refreshes. E-paper panels take seconds per
/// full refresh, so the dashboard is redrawn rarely.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Window event polling period between refreshes.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Blocking delay backed by `thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
