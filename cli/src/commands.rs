//! Command implementations, kept free of argument parsing so they can be
//! tested directly.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use dialgeom::{
    GeometryError, Point, Scale, Sweep, convert_angle_to_radians, convert_radians_to_degrees, format_number,
    get_point_from_given_distance, get_point_on_circle_from_angle, normalize_degrees,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid gauge: {0}")]
    Geometry(#[from] GeometryError),
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a command prints on stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Scalar(f64),
    Text(String),
    Json(Value),
}

/// Angular sweep and data range as given on the command line.
#[derive(Debug, Clone, Copy)]
pub struct GaugeSpec {
    pub start_angle: f64,
    pub end_angle: f64,
    pub scale_start: f64,
    pub scale_end: f64,
}

#[derive(Debug, Serialize)]
struct NeedleReading {
    value: f64,
    angle_deg: f64,
    label: String,
    tip: Point,
}

pub fn radians(degrees: f64) -> Output {
    Output::Scalar(convert_angle_to_radians(degrees))
}

pub fn degrees(radians: f64) -> Output {
    Output::Scalar(convert_radians_to_degrees(radians))
}

pub fn normalize(degrees: f64) -> Output {
    Output::Scalar(normalize_degrees(degrees))
}

pub fn circle_point(angle_deg: f64, focus: Point, radius: f64) -> Result<Output, CliError> {
    let point = get_point_on_circle_from_angle(angle_deg, focus, radius);
    Ok(Output::Json(serde_json::to_value(point)?))
}

pub fn distance_point(angle_deg: f64, from: Point, distance: f64) -> Result<Output, CliError> {
    let point = get_point_from_given_distance(angle_deg, from, distance);
    Ok(Output::Json(serde_json::to_value(point)?))
}

pub fn format(number: f64) -> Output {
    Output::Text(format_number(number))
}

pub fn unit_angle(gauge: GaugeSpec) -> Result<Output, CliError> {
    let sweep = checked_sweep(gauge)?;
    Ok(Output::Scalar(sweep.degrees_per_unit()))
}

/// Needle angle and tip for `value` on a dial of `radius` centred on `center`.
pub fn needle(gauge: GaugeSpec, value: f64, center: Point, radius: f64, clamp: bool) -> Result<Output, CliError> {
    let sweep = checked_sweep(gauge)?;
    let value = if clamp { sweep.scale.clamp(value) } else { value };
    let angle_deg = sweep.angle_for_value(value);
    tracing::debug!(value, angle_deg, clamp, "needle placed");

    let reading = NeedleReading {
        value,
        angle_deg,
        label: format_number(value),
        tip: sweep.point_for_value(center, value, radius),
    };
    Ok(Output::Json(serde_json::to_value(reading)?))
}

fn checked_sweep(gauge: GaugeSpec) -> Result<Sweep, CliError> {
    let scale = Scale::try_new(gauge.scale_start, gauge.scale_end).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected gauge scale");
    })?;
    Ok(Sweep::new(gauge.start_angle, gauge.end_angle, scale))
}

/// Render an output for stdout.
pub fn render(output: &Output, pretty: bool) -> Result<String, CliError> {
    match output {
        Output::Scalar(value) => Ok(value.to_string()),
        Output::Text(text) => Ok(text.clone()),
        Output::Json(value) if pretty => Ok(serde_json::to_string_pretty(value)?),
        Output::Json(value) => Ok(serde_json::to_string(value)?),
    }
}
