//! Coordinate scaling for the history plots.
//!
//! [`scale`] turns a run of integer samples into pixel-space line segments
//! inside a `width x height` plot area whose origin is the top-left corner.
//! The value axis is inverted so larger values plot higher.
//!
//! # Effective Range
//!
//! The caller supplies the range it expects a metric to live in. That range
//! is widened to include the observed minimum and maximum, so an excursion
//! outside the expected range is still drawn inside the plot area instead of
//! being clipped off-canvas.
//!
//! # Degenerate Input
//!
//! - Fewer than two samples: nothing to join, the plot is empty (not an error).
//! - Effective `min == max`: the vertical scale would divide by zero, so
//!   [`scale`] rejects the input with [`PlotError::DegenerateRange`].

use core::fmt::Write;
use core::iter::FusedIterator;

use embedded_graphics::prelude::{Point, Size};
use heapless::String;
use thiserror::Error;

use crate::history::Sample;

/// Maximum length of an axis label ("-2147483648").
pub const LABEL_LEN: usize = 12;

/// Reasons a sample run cannot be scaled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum PlotError {
    /// Every sample and both expected bounds are the same value.
    #[error("plot range collapses to the single value {value}")]
    DegenerateRange { value: Sample },
}

/// One straight line between two consecutive plotted samples.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A value annotation placed at a vertical position of the plot area.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AxisLabel {
    /// Value the label stands for.
    pub value: Sample,
    /// Vertical offset inside the plot area.
    pub y: i32,
}

impl AxisLabel {
    /// Textual form of the label value.
    pub fn text(&self) -> String<LABEL_LEN> {
        let mut text: String<LABEL_LEN> = String::new();
        let _ = write!(text, "{}", self.value);
        text
    }
}

/// Labels for the top, middle and bottom of the plot area.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AxisLabels {
    pub max: AxisLabel,
    pub mid: AxisLabel,
    pub min: AxisLabel,
}

impl AxisLabels {
    /// Labels from top to bottom.
    pub const fn as_array(&self) -> [AxisLabel; 3] { [self.max, self.mid, self.min] }
}

/// Scaled view of a sample run.
///
/// Segments are computed lazily from the borrowed samples, so a plot never
/// allocates regardless of history capacity.
#[derive(Clone, Copy, Debug)]
pub struct Plot<'a> {
    samples: &'a [Sample],
    value_min: Sample,
    value_max: Sample,
    dx: f32,
    dy: f32,
    height: u32,
}

impl<'a> Plot<'a> {
    const fn empty() -> Self {
        Self {
            samples: &[],
            value_min: 0,
            value_max: 0,
            dx: 0.0,
            dy: 0.0,
            height: 0,
        }
    }

    /// Check if the plot has no segment to draw.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.samples.len() < 2 }

    /// Number of segments ([`Self::segments`] yields exactly this many).
    #[inline]
    pub const fn segment_count(&self) -> usize { self.samples.len().saturating_sub(1) }

    /// Effective `(min, max)` range after widening to the observed samples.
    #[inline]
    pub const fn range(&self) -> (Sample, Sample) { (self.value_min, self.value_max) }

    /// Pixel position of sample `index`.
    fn point(
        &self,
        index: usize,
    ) -> Point {
        let x = index as f32 * self.dx;
        let offset = (self.samples[index] as f32 - self.value_min as f32) * self.dy;
        let y = self.height as f32 - offset;
        Point::new(x as i32, y as i32)
    }

    /// Line segments joining consecutive samples, oldest first.
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            plot: *self,
            index: 0,
        }
    }

    /// Top, middle and bottom labels, or `None` for an empty plot.
    pub fn labels(&self) -> Option<AxisLabels> {
        if self.is_empty() {
            return None;
        }

        let height = self.height as i32;
        // Midpoint in i64 so a full-width i32 range cannot overflow
        let mid = (i64::from(self.value_max) - i64::from(self.value_min)) / 2 + i64::from(self.value_min);
        Some(AxisLabels {
            max: AxisLabel {
                value: self.value_max,
                y: 0,
            },
            mid: AxisLabel {
                value: mid as Sample,
                y: height / 2,
            },
            min: AxisLabel {
                value: self.value_min,
                y: height,
            },
        })
    }
}

/// Iterator over the segments of a [`Plot`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    plot: Plot<'a>,
    index: usize,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 >= self.plot.samples.len() {
            return None;
        }
        let segment = Segment {
            start: self.plot.point(self.index),
            end: self.plot.point(self.index + 1),
        };
        self.index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plot.segment_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

/// Scale `samples` into a plot area of `size` pixels.
///
/// `value_min`/`value_max` is the expected range of the metric; it is
/// widened to the observed range of `samples` before scaling.
pub fn scale(
    samples: &[Sample],
    value_min: Sample,
    value_max: Sample,
    size: Size,
) -> Result<Plot<'_>, PlotError> {
    if samples.len() <= 1 {
        return Ok(Plot::empty());
    }

    let (observed_min, observed_max) = samples
        .iter()
        .fold((Sample::MAX, Sample::MIN), |(min, max), &value| (min.min(value), max.max(value)));
    let min = value_min.min(observed_min);
    let max = value_max.max(observed_max);

    if min == max {
        return Err(PlotError::DegenerateRange { value: min });
    }

    let dx = size.width as f32 / (samples.len() - 1) as f32;
    let dy = size.height as f32 / (max as f32 - min as f32);

    Ok(Plot {
        samples,
        value_min: min,
        value_max: max,
        dx,
        dy,
        height: size.height,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
