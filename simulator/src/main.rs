//! Air-quality dashboard simulator for desktop.
//!
//! Runs the dashboard core against simulated sensors and shows the e-paper
//! frame in an embedded-graphics-simulator window.
//!
//! Keys: `S` puts the host to sleep, `R` resumes it, `Q` quits.
//! Log verbosity follows `RUST_LOG` (default `info`).

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod sensors;
mod timing;

use std::thread;
use std::time::Instant;

use airdash_common::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use airdash_common::widgets::QUALITY_PLACEHOLDER;
use airdash_common::{
    AirMonitor,
    Co2Settings,
    GraphicsCanvas,
    MeasureMode,
    ParticulateSettings,
    QualityLevel,
    SensorSession,
    VocSettings,
};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};

use crate::sensors::{SimulatedScd4x, SimulatedSgp30, SimulatedSps30};
use crate::timing::{EVENT_POLL_INTERVAL, REFRESH_INTERVAL, StdDelay};

type SimCanvas = GraphicsCanvas<SimulatorDisplay<BinaryColor>>;

/// Copy the frame to the window if the dashboard presented one.
fn flush(
    canvas: &mut SimCanvas,
    window: &mut Window,
) {
    if let Some(full_refresh) = canvas.take_refresh() {
        debug!("panel refresh (full: {})", full_refresh);
        window.update(canvas.target());
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
    let mut canvas = GraphicsCanvas::new(display);
    let output_settings = OutputSettingsBuilder::new()
        .scale(2)
        .theme(BinaryColorTheme::LcdWhite)
        .build();
    let mut window = Window::new("Air Quality Dashboard Sim", &output_settings);
    window.update(canvas.target());

    let mut monitor = AirMonitor::new(
        SensorSession::new("scd4x", SimulatedScd4x::new(), Co2Settings::default(), MeasureMode::SingleShot),
        SensorSession::new(
            "sps30",
            SimulatedSps30::new(),
            ParticulateSettings::default(),
            MeasureMode::NormalPeriodic,
        ),
        SensorSession::new("sgp30", SimulatedSgp30::new(), VocSettings::default(), MeasureMode::NormalPeriodic),
        StdDelay,
    );

    monitor.start(&mut canvas);
    flush(&mut canvas, &mut window);

    let mut last_refresh = Instant::now();
    let mut sleeping = false;

    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Q => return,
                        Keycode::S if !sleeping => {
                            info!("host going to sleep");
                            monitor.on_sleep();
                            sleeping = true;
                        }
                        Keycode::R if sleeping => {
                            info!("host resumed");
                            monitor.on_resume();
                            sleeping = false;
                            last_refresh = Instant::now();
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if !sleeping && last_refresh.elapsed() >= REFRESH_INTERVAL {
            let level = monitor.refresh(&mut canvas);
            let dashboard = monitor.dashboard();
            info!("{} | air quality: {}", dashboard.co2(), level.map_or(QUALITY_PLACEHOLDER, QualityLevel::label));
            debug!("{}", dashboard.particulate());
            debug!("{}", dashboard.voc());
            last_refresh = Instant::now();
        }

        flush(&mut canvas, &mut window);
        thread::sleep(EVENT_POLL_INTERVAL);
    }
}
