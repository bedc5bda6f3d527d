//! Angle and circle-point helpers for dial, gauge and chart renderers.
//!
//! Everything here is a pure function over plain numbers and [`Point`]s. The
//! crate performs no I/O and holds no state; callers supply angles, foci,
//! distances and scale bounds and consume the returned coordinates.
//!
//! Angles are in degrees, measured counterclockwise from the positive x-axis.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`angle`] | Degree/radian conversion, normalisation, points at an angle |
//! | [`point`] | The [`Point`] value type |
//! | [`scale`] | Angle-per-unit ratio and value-to-angle mapping for gauges |
//! | [`format`] | Fixed-locale number formatting for labels |
//! | [`consts`] | Full-turn and right-angle constants |

pub mod angle;
pub mod consts;
pub mod format;
pub mod point;
pub mod scale;

pub use angle::{
    convert_angle_to_radians, convert_radians_to_degrees, get_point_from_given_distance,
    get_point_on_circle_from_angle, normalize_degrees, point_at_angle,
};
pub use consts::{DEGREES_FOR_PERIGON, DEGREES_FOR_RIGHT_ANGLE};
pub use format::format_number;
pub use point::Point;
pub use scale::{GeometryError, Scale, Sweep, get_angle_in_degrees_for_unit_of_scale};
