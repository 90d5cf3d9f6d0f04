//! Per-sensor measurement and power-mode state machine.
//!
//! A [`SensorSession`] owns one [`SensorDriver`] (and through it the driver's
//! bus handle) plus the calibration settings it re-applies on every start.
//!
//! # State Transitions
//!
//! ```text
//! Uninitialized --start_measurement--> Measuring(mode)
//! Measuring     --get_measurement----> Measuring        (reading or empty)
//! any awake     --stop_measurement---> Stopped
//! any awake     --on_sleep-----------> Sleeping          (stop, then power down)
//! Sleeping      --on_resume----------> Measuring(mode)   (wake up, full start)
//! ```
//!
//! Dropping a session always stops the measurement, whatever the state.
//!
//! # Failure Policy
//!
//! No failure leaves [`SensorSession::get_measurement`]: a bus error, a
//! sensor with no fresh data or an implausible value all yield the reading
//! type's invalid `Default`. [`SensorSession::try_measurement`] exposes the
//! same outcome with the reason attached.
//!
//! Settling times are waited through an [`embedded_hal::delay::DelayNs`]
//! handed in by the caller, so a cooperative runtime can supply a delay
//! that services other work.

use core::fmt;

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};
use thiserror::Error;

use crate::readings::Reading;

/// Capability surface of one physical sensor.
///
/// Implementations wrap a vendor driver and its bus. Every call is a single
/// blocking transaction; waiting between calls is the session's job.
pub trait SensorDriver {
    /// Reading produced by this sensor.
    type Reading: Reading;
    /// Calibration applied when measurement starts.
    type Settings;
    /// Transport or protocol error.
    type Error: fmt::Debug;

    /// Time the sensor needs after power-up before it accepts commands.
    const POWER_UP_DELAY_MS: u32 = 0;

    /// Time between a single-shot trigger and a result being possibly ready.
    const SINGLE_SHOT_DELAY_MS: u32 = 0;

    /// Attach to the bus and check that the sensor answers.
    fn begin(&mut self) -> Result<(), Self::Error> { Ok(()) }

    /// Write the calibration settings.
    fn apply_settings(
        &mut self,
        settings: &Self::Settings,
    ) -> Result<(), Self::Error>;

    /// Start continuous sampling, in the low-power variant if requested.
    fn start_periodic(
        &mut self,
        low_power: bool,
    ) -> Result<(), Self::Error>;

    /// Trigger one on-demand measurement.
    fn trigger_single_shot(&mut self) -> Result<(), Self::Error>;

    /// Stop continuous sampling. Must be safe to call when not sampling.
    fn stop_measurement(&mut self) -> Result<(), Self::Error>;

    /// Ask whether a new measurement can be read.
    fn is_data_ready(&mut self) -> Result<bool, Self::Error>;

    /// Read the latest measurement (returned unvalidated).
    fn read_measurement(&mut self) -> Result<Self::Reading, Self::Error>;

    /// Enter the sensor's low-power state. No-op for sensors without one.
    fn power_down(&mut self) -> Result<(), Self::Error> { Ok(()) }

    /// Leave the low-power state. No-op for sensors without one.
    fn wake_up(&mut self) -> Result<(), Self::Error> { Ok(()) }
}

/// How a session samples its sensor. Fixed at construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MeasureMode {
    /// Trigger one measurement per poll and wait for it.
    SingleShot,
    /// Continuous sampling at the sensor's low-power cadence.
    LowPowerPeriodic,
    /// Continuous sampling at the sensor's normal cadence.
    NormalPeriodic,
}

/// Lifecycle state of a [`SensorSession`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    Uninitialized,
    Measuring(MeasureMode),
    Stopped,
    Sleeping,
}

/// Why a poll produced no reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum SessionError<E: fmt::Debug> {
    /// The bus transaction failed.
    #[error("bus error: {0:?}")]
    Bus(E),
    /// The sensor has no new measurement yet.
    #[error("no new data")]
    NotReady,
    /// The read succeeded but the values are not physically meaningful.
    #[error("implausible reading")]
    ImplausibleReading,
    /// The session is not in the measuring state.
    #[error("sensor is not measuring")]
    NotMeasuring,
}

/// Owned state machine around one sensor driver.
pub struct SensorSession<S: SensorDriver> {
    name: &'static str,
    driver: S,
    settings: S::Settings,
    mode: MeasureMode,
    state: SessionState,
}

impl<S: SensorDriver> SensorSession<S> {
    /// Create a session. The sensor is not touched until [`Self::start_measurement`].
    pub const fn new(
        name: &'static str,
        driver: S,
        settings: S::Settings,
        mode: MeasureMode,
    ) -> Self {
        Self {
            name,
            driver,
            settings,
            mode,
            state: SessionState::Uninitialized,
        }
    }

    /// Sensor name used in log output.
    #[inline]
    pub const fn name(&self) -> &'static str { self.name }

    /// Configured measure mode.
    #[inline]
    pub const fn mode(&self) -> MeasureMode { self.mode }

    /// Current lifecycle state.
    #[inline]
    pub const fn state(&self) -> SessionState { self.state }

    /// Check if the session is currently measuring.
    #[inline]
    pub const fn is_measuring(&self) -> bool { matches!(self.state, SessionState::Measuring(_)) }

    /// Calibration settings applied on every start.
    #[inline]
    pub const fn settings(&self) -> &S::Settings { &self.settings }

    /// Underlying driver.
    #[inline]
    pub const fn driver(&self) -> &S { &self.driver }

    /// Underlying driver, mutably.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut S { &mut self.driver }

    /// Power-up, calibrate and (for periodic modes) start sampling.
    ///
    /// On failure the state is left unchanged so the caller can retry.
    pub fn start_measurement<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), SessionError<S::Error>> {
        if S::POWER_UP_DELAY_MS > 0 {
            delay.delay_ms(S::POWER_UP_DELAY_MS);
        }

        self.driver.begin().map_err(SessionError::Bus)?;

        // A warm reset leaves the sensor sampling; it rejects settings while it does.
        self.driver.stop_measurement().map_err(SessionError::Bus)?;
        self.driver.apply_settings(&self.settings).map_err(SessionError::Bus)?;

        match self.mode {
            MeasureMode::SingleShot => {}
            MeasureMode::LowPowerPeriodic => self.driver.start_periodic(true).map_err(SessionError::Bus)?,
            MeasureMode::NormalPeriodic => self.driver.start_periodic(false).map_err(SessionError::Bus)?,
        }

        self.state = SessionState::Measuring(self.mode);
        info!("{}: measuring ({:?})", self.name, self.mode);
        Ok(())
    }

    /// Poll for a reading, reporting why there is none.
    pub fn try_measurement<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<S::Reading, SessionError<S::Error>> {
        let SessionState::Measuring(mode) = self.state else {
            return Err(SessionError::NotMeasuring);
        };

        if mode == MeasureMode::SingleShot {
            self.driver.trigger_single_shot().map_err(SessionError::Bus)?;
            if S::SINGLE_SHOT_DELAY_MS > 0 {
                delay.delay_ms(S::SINGLE_SHOT_DELAY_MS);
            }
        }

        if !self.driver.is_data_ready().map_err(SessionError::Bus)? {
            return Err(SessionError::NotReady);
        }

        let reading = self.driver.read_measurement().map_err(SessionError::Bus)?;
        if !reading.is_plausible() {
            return Err(SessionError::ImplausibleReading);
        }

        Ok(reading.validated())
    }

    /// Poll for a reading. Any failure yields the invalid default reading.
    pub fn get_measurement<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> S::Reading {
        match self.try_measurement(delay) {
            Ok(reading) => {
                debug!("{}: {}", self.name, reading);
                reading
            }
            Err(SessionError::Bus(e)) => {
                warn!("{}: bus error {:?}", self.name, e);
                S::Reading::default()
            }
            Err(e) => {
                debug!("{}: {}", self.name, e);
                S::Reading::default()
            }
        }
    }

    /// Stop sampling. Safe in every state; a sleeping sensor stays asleep.
    pub fn stop_measurement(&mut self) {
        if let Err(e) = self.driver.stop_measurement() {
            warn!("{}: stop failed {:?}", self.name, e);
        }
        if self.state != SessionState::Sleeping {
            self.state = SessionState::Stopped;
        }
    }

    /// Host is about to sleep: stop sampling, then power the sensor down.
    pub fn on_sleep(&mut self) {
        if self.state == SessionState::Sleeping {
            return;
        }

        self.stop_measurement();
        if let Err(e) = self.driver.power_down() {
            warn!("{}: power down failed {:?}", self.name, e);
        }
        self.state = SessionState::Sleeping;
        info!("{}: sleeping", self.name);
    }

    /// Host woke up: wake the sensor and run the full start sequence.
    ///
    /// Ignored unless the session is sleeping.
    pub fn on_resume<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), SessionError<S::Error>> {
        if self.state != SessionState::Sleeping {
            debug!("{}: resume ignored in {:?}", self.name, self.state);
            return Ok(());
        }

        self.driver.wake_up().map_err(SessionError::Bus)?;
        self.state = SessionState::Stopped;
        self.start_measurement(delay)
    }
}

impl<S: SensorDriver> Drop for SensorSession<S> {
    fn drop(&mut self) { self.stop_measurement(); }
}

// =============================================================================
// Unit Tests
// =============================================================================
