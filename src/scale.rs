//! Mapping a linear data scale onto an angular sweep.
//!
//! A gauge that spans `start_deg..end_deg` for values `start..end` moves
//! [`get_angle_in_degrees_for_unit_of_scale`] degrees per unit of value.
//! [`Scale`] and [`Sweep`] package that ratio with checked construction and
//! value-to-angle conversion for needle placement.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use serde::{Deserialize, Serialize};

use crate::angle::point_at_angle;
use crate::point::Point;

/// Error returned by [`Scale::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Start and end coincide, so one unit of scale has no angular width.
    #[error("degenerate scale: start and end are both {start}")]
    DegenerateScale { start: f64 },
    /// A bound is NaN or infinite.
    #[error("non-finite scale bounds: {start}..{end}")]
    NonFiniteScale { start: f64, end: f64 },
    /// Both bounds are finite but `end - start` overflows to infinity.
    #[error("scale span overflows: {start}..{end}")]
    SpanOverflow { start: f64, end: f64 },
}

/// Degrees swept per unit of a linear scale.
///
/// Yields a non-finite value when `scale_start == scale_end`; use
/// [`Scale::try_new`] to reject that up front.
#[must_use]
pub fn get_angle_in_degrees_for_unit_of_scale(
    starting_angle_in_degrees: f64,
    ending_angle_in_degrees: f64,
    scale_start: f64,
    scale_end: f64,
) -> f64 {
    (ending_angle_in_degrees - starting_angle_in_degrees) / (scale_end - scale_start)
}

/// A linear range of data values. `end` may be below `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub start: f64,
    pub end: f64,
}

impl Scale {
    /// Unchecked constructor.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteScale`] when either bound is NaN or
    /// infinite, [`GeometryError::SpanOverflow`] when their difference is not
    /// finite and [`GeometryError::DegenerateScale`] when they are equal.
    pub fn try_new(start: f64, end: f64) -> Result<Self, GeometryError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GeometryError::NonFiniteScale { start, end });
        }
        let span = end - start;
        if !span.is_finite() {
            return Err(GeometryError::SpanOverflow { start, end });
        }
        if span == 0.0 {
            return Err(GeometryError::DegenerateScale { start });
        }
        Ok(Self { start, end })
    }

    /// Signed width of the range, `end - start`.
    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Clamp `value` into the range, whichever way round it runs.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = if self.start <= self.end { (self.start, self.end) } else { (self.end, self.start) };
        value.clamp(lo, hi)
    }
}

/// An angular sweep paired with the data scale it displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub start_deg: f64,
    pub end_deg: f64,
    pub scale: Scale,
}

impl Sweep {
    #[must_use]
    pub fn new(start_deg: f64, end_deg: f64, scale: Scale) -> Self {
        Self { start_deg, end_deg, scale }
    }

    #[must_use]
    pub fn degrees_per_unit(self) -> f64 {
        get_angle_in_degrees_for_unit_of_scale(self.start_deg, self.end_deg, self.scale.start, self.scale.end)
    }

    /// Angle for `value`. Values outside the scale extrapolate past the sweep.
    #[must_use]
    pub fn angle_for_value(self, value: f64) -> f64 {
        self.start_deg + (value - self.scale.start) * self.degrees_per_unit()
    }

    /// Angle for `value` after clamping it into the scale.
    #[must_use]
    pub fn angle_for_value_clamped(self, value: f64) -> f64 {
        self.angle_for_value(self.scale.clamp(value))
    }

    /// Needle tip for `value` on a dial of `radius` centred on `origin`.
    #[must_use]
    pub fn point_for_value(self, origin: Point, value: f64, radius: f64) -> Point {
        point_at_angle(origin, self.angle_for_value(value), radius)
    }
}
