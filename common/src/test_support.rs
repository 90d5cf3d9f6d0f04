//! Scripted doubles shared by the unit tests.
//!
//! Drivers and delays append to one shared [`CallLog`] so a test can assert
//! the exact interleaving of bus transactions and settling waits.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Size};
use embedded_hal::delay::DelayNs;

use crate::canvas::Canvas;
use crate::readings::Reading;
use crate::session::SensorDriver;
use crate::styles::Font;

/// One observable side effect of a driver or delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Delay(u32),
    Begin,
    ApplySettings,
    StartPeriodic { low_power: bool },
    TriggerSingleShot,
    Stop,
    IsDataReady,
    Read,
    PowerDown,
    WakeUp,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn call_log() -> CallLog { Rc::new(RefCell::new(Vec::new())) }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeBusError;

/// Sensor driver answering from scripted queues.
///
/// An exhausted `ready` queue answers "not ready", an exhausted `readings`
/// queue answers with a bus error.
pub struct FakeDriver<R> {
    log: CallLog,
    pub ready: VecDeque<Result<bool, FakeBusError>>,
    pub readings: VecDeque<Result<R, FakeBusError>>,
    pub fail_begin: bool,
}

impl<R> FakeDriver<R> {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ready: VecDeque::new(),
            readings: VecDeque::new(),
            fail_begin: false,
        }
    }

    /// Script one successful poll returning `reading`.
    pub fn script(
        &mut self,
        reading: R,
    ) {
        self.ready.push_back(Ok(true));
        self.readings.push_back(Ok(reading));
    }

    fn record(
        &self,
        call: Call,
    ) {
        self.log.borrow_mut().push(call);
    }
}

impl<R: Reading> SensorDriver for FakeDriver<R> {
    type Reading = R;
    type Settings = ();
    type Error = FakeBusError;

    const POWER_UP_DELAY_MS: u32 = 1000;
    const SINGLE_SHOT_DELAY_MS: u32 = 500;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.record(Call::Begin);
        if self.fail_begin { Err(FakeBusError) } else { Ok(()) }
    }

    fn apply_settings(
        &mut self,
        _settings: &Self::Settings,
    ) -> Result<(), Self::Error> {
        self.record(Call::ApplySettings);
        Ok(())
    }

    fn start_periodic(
        &mut self,
        low_power: bool,
    ) -> Result<(), Self::Error> {
        self.record(Call::StartPeriodic { low_power });
        Ok(())
    }

    fn trigger_single_shot(&mut self) -> Result<(), Self::Error> {
        self.record(Call::TriggerSingleShot);
        Ok(())
    }

    fn stop_measurement(&mut self) -> Result<(), Self::Error> {
        self.record(Call::Stop);
        Ok(())
    }

    fn is_data_ready(&mut self) -> Result<bool, Self::Error> {
        self.record(Call::IsDataReady);
        self.ready.pop_front().unwrap_or(Ok(false))
    }

    fn read_measurement(&mut self) -> Result<Self::Reading, Self::Error> {
        self.record(Call::Read);
        self.readings.pop_front().unwrap_or(Err(FakeBusError))
    }

    fn power_down(&mut self) -> Result<(), Self::Error> {
        self.record(Call::PowerDown);
        Ok(())
    }

    fn wake_up(&mut self) -> Result<(), Self::Error> {
        self.record(Call::WakeUp);
        Ok(())
    }
}

/// Delay that records instead of waiting.
pub struct FakeDelay {
    log: CallLog,
}

impl FakeDelay {
    pub fn new(log: CallLog) -> Self { Self { log } }
}

impl DelayNs for FakeDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.log.borrow_mut().push(Call::Delay(ns / 1_000_000));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.log.borrow_mut().push(Call::Delay(ms));
    }
}

/// One canvas operation, with the cursor and face in effect for text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Fill(BinaryColor),
    Text {
        at: Point,
        font: Option<Font>,
        text: String,
    },
    Rect {
        top_left: Point,
        size: Size,
    },
    Line {
        start: Point,
        end: Point,
    },
    HLine {
        start: Point,
        length: u32,
    },
    Present {
        full_refresh: bool,
    },
}

/// Canvas that records every operation instead of drawing.
#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    cursor: Point,
    font: Option<Font>,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    /// Recorded text, in print order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position and face `text` was printed with.
    pub fn text_at(
        &self,
        wanted: &str,
    ) -> Option<(Point, Option<Font>)> {
        self.calls.iter().find_map(|call| match call {
            DrawCall::Text { at, font, text } if text == wanted => Some((*at, *font)),
            _ => None,
        })
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line { start, end } => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Point, Size)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect { top_left, size } => Some((*top_left, *size)),
                _ => None,
            })
            .collect()
    }

    pub fn hlines(&self) -> Vec<(Point, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::HLine { start, length } => Some((*start, *length)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
        self.cursor = Point::zero();
        self.font = None;
    }

    fn fill_background(
        &mut self,
        color: BinaryColor,
    ) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn set_cursor(
        &mut self,
        position: Point,
    ) {
        self.cursor = position;
    }

    fn cursor(&self) -> Point { self.cursor }

    fn set_font(
        &mut self,
        font: Option<Font>,
    ) {
        self.font = font;
    }

    fn print(
        &mut self,
        text: &str,
    ) {
        self.calls.push(DrawCall::Text {
            at: self.cursor,
            font: self.font,
            text: text.to_string(),
        });
        self.cursor.x += 6 * text.len() as i32;
    }

    fn draw_rect(
        &mut self,
        top_left: Point,
        size: Size,
        _color: BinaryColor,
    ) {
        self.calls.push(DrawCall::Rect { top_left, size });
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        _color: BinaryColor,
    ) {
        self.calls.push(DrawCall::Line { start, end });
    }

    fn draw_hline(
        &mut self,
        start: Point,
        length: u32,
        _color: BinaryColor,
    ) {
        self.calls.push(DrawCall::HLine { start, length });
    }

    fn present(
        &mut self,
        full_refresh: bool,
    ) {
        self.calls.push(DrawCall::Present { full_refresh });
    }
}
