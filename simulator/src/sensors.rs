//! Simulated SCD4x, SPS30 and SGP30 drivers.
//!
//! Values follow slow sine waves so the history plots have something to
//! show. Every few polls a sensor reports "not ready" to exercise the
//! stale-value path. A powered-down sensor fails every data transaction.

use std::time::Instant;

use airdash_common::config::{CO2_POWER_UP_DELAY_MS, CO2_SINGLE_SHOT_DELAY_MS};
use airdash_common::{
    Co2Reading,
    Co2Settings,
    ParticulateReading,
    ParticulateSettings,
    SensorDriver,
    VocReading,
    VocSettings,
};
use log::debug;

/// Every n-th readiness poll answers "not ready".
const NOT_READY_EVERY: u32 = 7;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SimBusError {
    /// The sensor is powered down and does not acknowledge.
    Nack,
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Power and sampling state shared by the simulated sensors.
#[derive(Debug)]
struct SimCore {
    epoch: Instant,
    sampling: bool,
    asleep: bool,
    polls: u32,
}

impl SimCore {
    fn new() -> Self {
        Self {
            epoch: Instant::now(),
            sampling: false,
            asleep: false,
            polls: 0,
        }
    }

    fn elapsed(&self) -> f32 { self.epoch.elapsed().as_secs_f32() }

    fn awake(&self) -> Result<(), SimBusError> {
        if self.asleep { Err(SimBusError::Nack) } else { Ok(()) }
    }

    fn poll_ready(&mut self) -> Result<bool, SimBusError> {
        self.awake()?;
        self.polls = self.polls.wrapping_add(1);
        Ok(self.sampling && !self.polls.is_multiple_of(NOT_READY_EVERY))
    }
}

// =============================================================================
// SCD4x (CO2 / temperature / humidity)
// =============================================================================

#[derive(Debug)]
pub struct SimulatedScd4x {
    core: SimCore,
    temperature_offset_c: f32,
    single_shot: bool,
}

impl SimulatedScd4x {
    pub fn new() -> Self {
        Self {
            core: SimCore::new(),
            temperature_offset_c: 0.0,
            single_shot: false,
        }
    }
}

impl Default for SimulatedScd4x {
    fn default() -> Self { Self::new() }
}

impl SensorDriver for SimulatedScd4x {
    type Reading = Co2Reading;
    type Settings = Co2Settings;
    type Error = SimBusError;

    const POWER_UP_DELAY_MS: u32 = CO2_POWER_UP_DELAY_MS;
    const SINGLE_SHOT_DELAY_MS: u32 = CO2_SINGLE_SHOT_DELAY_MS;

    fn apply_settings(
        &mut self,
        settings: &Self::Settings,
    ) -> Result<(), Self::Error> {
        self.core.awake()?;
        debug!("scd4x: altitude {} m, temperature offset {:.1} C", settings.altitude_m, settings.temperature_offset_c);
        self.temperature_offset_c = settings.temperature_offset_c;
        Ok(())
    }

    fn start_periodic(
        &mut self,
        _low_power: bool,
    ) -> Result<(), Self::Error> {
        self.core.awake()?;
        self.core.sampling = true;
        Ok(())
    }

    fn trigger_single_shot(&mut self) -> Result<(), Self::Error> {
        self.core.awake()?;
        self.single_shot = true;
        self.core.sampling = true;
        Ok(())
    }

    fn stop_measurement(&mut self) -> Result<(), Self::Error> {
        self.core.sampling = false;
        self.single_shot = false;
        Ok(())
    }

    fn is_data_ready(&mut self) -> Result<bool, Self::Error> { self.core.poll_ready() }

    fn read_measurement(&mut self) -> Result<Self::Reading, Self::Error> {
        self.core.awake()?;
        if self.single_shot {
            self.single_shot = false;
            self.core.sampling = false;
        }

        let t = self.core.elapsed();
        let co2 = fake_signal(t, 420.0, 1400.0, 0.02);
        let temperature = fake_signal(t, 18.0, 27.0, 0.015) - self.temperature_offset_c;
        let humidity = fake_signal(t, 35.0, 65.0, 0.01);
        Ok(Co2Reading::new(co2 as u16, temperature, humidity))
    }

    fn power_down(&mut self) -> Result<(), Self::Error> {
        self.core.asleep = true;
        Ok(())
    }

    fn wake_up(&mut self) -> Result<(), Self::Error> {
        self.core.asleep = false;
        Ok(())
    }
}

// =============================================================================
// SPS30 (particulate matter)
// =============================================================================

#[derive(Debug)]
pub struct SimulatedSps30 {
    core: SimCore,
}

impl SimulatedSps30 {
    pub fn new() -> Self { Self { core: SimCore::new() } }
}

impl Default for SimulatedSps30 {
    fn default() -> Self { Self::new() }
}

impl SensorDriver for SimulatedSps30 {
    type Reading = ParticulateReading;
    type Settings = ParticulateSettings;
    type Error = SimBusError;

    fn apply_settings(
        &mut self,
        settings: &Self::Settings,
    ) -> Result<(), Self::Error> {
        self.core.awake()?;
        debug!("sps30: fan cleaning every {} days", settings.fan_cleaning_interval_days);
        Ok(())
    }

    fn start_periodic(
        &mut self,
        _low_power: bool,
    ) -> Result<(), Self::Error> {
        self.core.awake()?;
        self.core.sampling = true;
        Ok(())
    }

    fn trigger_single_shot(&mut self) -> Result<(), Self::Error> { self.start_periodic(false) }

    fn stop_measurement(&mut self) -> Result<(), Self::Error> {
        self.core.sampling = false;
        Ok(())
    }

    fn is_data_ready(&mut self) -> Result<bool, Self::Error> { self.core.poll_ready() }

    fn read_measurement(&mut self) -> Result<Self::Reading, Self::Error> {
        self.core.awake()?;
        let t = self.core.elapsed();
        let pm1_0 = fake_signal(t, 1.0, 12.0, 0.03);
        let pm2_5 = pm1_0 * 1.4;
        let pm4_0 = pm2_5 * 1.2;
        let pm10 = pm4_0 * 1.1;
        Ok(ParticulateReading::new(pm1_0, pm2_5, pm4_0, pm10))
    }

    fn power_down(&mut self) -> Result<(), Self::Error> {
        self.core.asleep = true;
        Ok(())
    }

    fn wake_up(&mut self) -> Result<(), Self::Error> {
        self.core.asleep = false;
        Ok(())
    }
}

// =============================================================================
// SGP30 (TVOC / eCO2)
// =============================================================================

/// SGP30 has no sleep command; power events fall back to the no-op defaults.
#[derive(Debug)]
pub struct SimulatedSgp30 {
    core: SimCore,
    baselines: VocSettings,
}

impl SimulatedSgp30 {
    pub fn new() -> Self {
        Self {
            core: SimCore::new(),
            baselines: VocSettings::default(),
        }
    }
}

impl Default for SimulatedSgp30 {
    fn default() -> Self { Self::new() }
}

impl SensorDriver for SimulatedSgp30 {
    type Reading = VocReading;
    type Settings = VocSettings;
    type Error = SimBusError;

    fn apply_settings(
        &mut self,
        settings: &Self::Settings,
    ) -> Result<(), Self::Error> {
        debug!("sgp30: baselines eCO2 {} TVOC {}", settings.eco2_baseline, settings.tvoc_baseline);
        self.baselines = *settings;
        Ok(())
    }

    fn start_periodic(
        &mut self,
        _low_power: bool,
    ) -> Result<(), Self::Error> {
        self.core.sampling = true;
        Ok(())
    }

    fn trigger_single_shot(&mut self) -> Result<(), Self::Error> { self.start_periodic(false) }

    fn stop_measurement(&mut self) -> Result<(), Self::Error> {
        self.core.sampling = false;
        Ok(())
    }

    fn is_data_ready(&mut self) -> Result<bool, Self::Error> { self.core.poll_ready() }

    fn read_measurement(&mut self) -> Result<Self::Reading, Self::Error> {
        let t = self.core.elapsed();
        let tvoc = fake_signal(t, 0.0, 600.0, 0.025);
        let eco2 = fake_signal(t, 400.0, 1200.0, 0.025);
        Ok(VocReading::new(
            tvoc as u16,
            eco2 as u16,
            self.baselines.tvoc_baseline,
            self.baselines.eco2_baseline,
        ))
    }
}
