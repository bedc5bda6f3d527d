//! Degree/radian conversion and angle-to-point math.
//!
//! Angles are degrees, counterclockwise from the positive x-axis, with y
//! growing upward. Renderers whose y axis points down should negate `y` on
//! the way out.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::PI;

use crate::consts::{DEGREES_FOR_PERIGON, DEGREES_FOR_STRAIGHT_ANGLE};
use crate::point::Point;

/// Convert degrees to radians. The input is not wrapped.
#[must_use]
pub fn convert_angle_to_radians(angle_in_degrees: f64) -> f64 {
    (PI / DEGREES_FOR_STRAIGHT_ANGLE) * angle_in_degrees
}

/// Convert radians to degrees. The input is not wrapped.
#[must_use]
pub fn convert_radians_to_degrees(angle_in_radians: f64) -> f64 {
    (DEGREES_FOR_STRAIGHT_ANGLE / PI) * angle_in_radians
}

/// Wrap an angle into `[0, 360)`. Negative angles count back from 360.
#[must_use]
pub fn normalize_degrees(angle_in_degrees: f64) -> f64 {
    let wrapped = angle_in_degrees.rem_euclid(DEGREES_FOR_PERIGON);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= DEGREES_FOR_PERIGON { 0.0 } else { wrapped }
}

/// The point `magnitude` away from `origin` along `angle_in_degrees`.
///
/// Computes `origin + magnitude * (cos θ, sin θ)` on the normalised angle, so
/// quadrant II flips x, quadrant III flips both axes and quadrant IV flips y.
/// A negative magnitude points the opposite way. Non-finite inputs propagate.
#[must_use]
pub fn point_at_angle(origin: Point, angle_in_degrees: f64, magnitude: f64) -> Point {
    let radians = convert_angle_to_radians(normalize_degrees(angle_in_degrees));
    let (sin, cos) = radians.sin_cos();
    origin.offset(cos * magnitude, sin * magnitude)
}

/// Point on the circle of `radius` centred on `focus`.
#[must_use]
pub fn get_point_on_circle_from_angle(angle_in_degrees: f64, focus: Point, radius: f64) -> Point {
    point_at_angle(focus, angle_in_degrees, radius)
}

/// Point reached by travelling `distance` from `point` along the angle.
#[must_use]
pub fn get_point_from_given_distance(angle_in_degrees: f64, point: Point, distance: f64) -> Point {
    point_at_angle(point, angle_in_degrees, distance)
}
