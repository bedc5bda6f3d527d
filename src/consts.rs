//! Shared angular constants.

/// Degrees in a full turn (a perigon).
pub const DEGREES_FOR_PERIGON: f64 = 360.0;

/// Degrees in a right angle, a quarter of [`DEGREES_FOR_PERIGON`].
pub const DEGREES_FOR_RIGHT_ANGLE: f64 = DEGREES_FOR_PERIGON / 4.0;

/// Degrees in a straight angle; π radians.
pub const DEGREES_FOR_STRAIGHT_ANGLE: f64 = DEGREES_FOR_PERIGON / 2.0;
