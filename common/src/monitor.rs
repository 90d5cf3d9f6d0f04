//! Refresh cycle tying the sensor sessions to the dashboard.
//!
//! [`AirMonitor`] owns the CO2, particulate and VOC sessions, the dashboard
//! state and the delay used for sensor settling. The platform loop calls
//! [`AirMonitor::start`] once, then [`AirMonitor::refresh`] at the panel's
//! refresh cadence, and forwards host power events to
//! [`AirMonitor::on_sleep`] / [`AirMonitor::on_resume`].
//!
//! A refresh polls the sessions one after another, so at most one bus
//! transaction is in flight.

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::canvas::Canvas;
use crate::dashboard::{Dashboard, draw_heat_up_screen};
use crate::quality::QualityLevel;
use crate::readings::{Co2Reading, ParticulateReading, VocReading};
use crate::session::{SensorDriver, SensorSession, SessionState};

/// Restart a session that never came up or was stopped.
///
/// Sleeping sessions are left alone; [`SensorSession::on_resume`] owns them.
fn restart_if_idle<S, D>(
    session: &mut SensorSession<S>,
    delay: &mut D,
) where
    S: SensorDriver,
    D: DelayNs,
{
    if !matches!(session.state(), SessionState::Uninitialized | SessionState::Stopped) {
        return;
    }
    match session.start_measurement(delay) {
        Ok(()) => info!("{}: restarted", session.name()),
        Err(e) => warn!("{}: restart failed: {}", session.name(), e),
    }
}

/// The three sensor sessions plus the dashboard they feed.
pub struct AirMonitor<C, P, V, D>
where
    C: SensorDriver<Reading = Co2Reading>,
    P: SensorDriver<Reading = ParticulateReading>,
    V: SensorDriver<Reading = VocReading>,
    D: DelayNs,
{
    co2: SensorSession<C>,
    particulate: SensorSession<P>,
    voc: SensorSession<V>,
    dashboard: Dashboard,
    delay: D,
}

impl<C, P, V, D> AirMonitor<C, P, V, D>
where
    C: SensorDriver<Reading = Co2Reading>,
    P: SensorDriver<Reading = ParticulateReading>,
    V: SensorDriver<Reading = VocReading>,
    D: DelayNs,
{
    pub fn new(
        co2: SensorSession<C>,
        particulate: SensorSession<P>,
        voc: SensorSession<V>,
        delay: D,
    ) -> Self {
        Self {
            co2,
            particulate,
            voc,
            dashboard: Dashboard::new(),
            delay,
        }
    }

    /// Show the warm-up screen and start every session.
    ///
    /// A session that fails to start is logged and left idle; the others keep
    /// running. Returns `true` when all three started.
    pub fn start<K>(
        &mut self,
        canvas: &mut K,
    ) -> bool
    where
        K: Canvas + ?Sized,
    {
        draw_heat_up_screen(canvas);

        let mut all_started = true;
        if let Err(e) = self.co2.start_measurement(&mut self.delay) {
            warn!("{}: start failed: {}", self.co2.name(), e);
            all_started = false;
        }
        if let Err(e) = self.particulate.start_measurement(&mut self.delay) {
            warn!("{}: start failed: {}", self.particulate.name(), e);
            all_started = false;
        }
        if let Err(e) = self.voc.start_measurement(&mut self.delay) {
            warn!("{}: start failed: {}", self.voc.name(), e);
            all_started = false;
        }

        info!("monitor started (all sensors up: {})", all_started);
        all_started
    }

    /// Poll every sensor, update the dashboard and redraw it.
    ///
    /// An idle session (failed start, or stopped) is restarted before it is
    /// polled. Returns the verdict drawn, `None` until a valid CO2 reading.
    pub fn refresh<K>(
        &mut self,
        canvas: &mut K,
    ) -> Option<QualityLevel>
    where
        K: Canvas + ?Sized,
    {
        restart_if_idle(&mut self.co2, &mut self.delay);
        let co2 = self.co2.get_measurement(&mut self.delay);
        self.dashboard.set_co2(co2);

        restart_if_idle(&mut self.particulate, &mut self.delay);
        let particulate = self.particulate.get_measurement(&mut self.delay);
        self.dashboard.set_particulate(particulate);

        restart_if_idle(&mut self.voc, &mut self.delay);
        let voc = self.voc.get_measurement(&mut self.delay);
        self.dashboard.set_voc(voc);

        self.dashboard.render(canvas)
    }

    /// Host is about to sleep.
    pub fn on_sleep(&mut self) {
        self.co2.on_sleep();
        self.particulate.on_sleep();
        self.voc.on_sleep();
    }

    /// Host woke up. Every sleeping session is restarted and recalibrated.
    pub fn on_resume(&mut self) {
        if let Err(e) = self.co2.on_resume(&mut self.delay) {
            warn!("{}: resume failed: {}", self.co2.name(), e);
        }
        if let Err(e) = self.particulate.on_resume(&mut self.delay) {
            warn!("{}: resume failed: {}", self.particulate.name(), e);
        }
        if let Err(e) = self.voc.on_resume(&mut self.delay) {
            warn!("{}: resume failed: {}", self.voc.name(), e);
        }
    }

    #[inline]
    pub const fn dashboard(&self) -> &Dashboard { &self.dashboard }

    #[inline]
    pub const fn co2_session(&self) -> &SensorSession<C> { &self.co2 }

    #[inline]
    pub fn co2_session_mut(&mut self) -> &mut SensorSession<C> { &mut self.co2 }

    #[inline]
    pub const fn particulate_session(&self) -> &SensorSession<P> { &self.particulate }

    #[inline]
    pub fn particulate_session_mut(&mut self) -> &mut SensorSession<P> { &mut self.particulate }

    #[inline]
    pub const fn voc_session(&self) -> &SensorSession<V> { &self.voc }

    #[inline]
    pub fn voc_session_mut(&mut self) -> &mut SensorSession<V> { &mut self.voc }
}

// =============================================================================
// Unit Tests
// =============================================================================
