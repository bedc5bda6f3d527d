//! Number formatting for dial labels and readouts.
//!
//! Output follows a fixed English convention regardless of the host locale:
//! `,` groups thousands, `.` separates the fraction, and the fraction shows
//! at least two and at most three digits.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const MIN_FRACTION_DIGITS: usize = 2;
pub const MAX_FRACTION_DIGITS: usize = 3;

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;

/// Render `number` for display, e.g. `1234.5` as `"1,234.50"`.
///
/// Rounds the shortest decimal form of `number` half-up to
/// [`MAX_FRACTION_DIGITS`] places, so `1.0005` and `8.0005` both round up,
/// then drops trailing zeros down to [`MIN_FRACTION_DIGITS`]. Negative values, including `-0.0` and values
/// that round to zero, keep their `-`. NaN renders as `NaN` and infinities
/// as `∞`.
#[must_use]
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    let sign = if number.is_sign_negative() { "-" } else { "" };
    if number.is_infinite() {
        return format!("{sign}∞");
    }

    let (whole, fraction) = round_decimal(number.abs());
    format!("{sign}{}.{}", group_thousands(&whole), trim_fraction(&fraction))
}

/// Split `abs` into whole and fraction digits, rounded half-up at
/// [`MAX_FRACTION_DIGITS`]. `f64` display is the shortest round-trip form and
/// never uses an exponent.
fn round_decimal(abs: f64) -> (String, String) {
    let shortest = abs.to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    if fraction.len() <= MAX_FRACTION_DIGITS {
        return (whole.to_owned(), fraction.to_owned());
    }

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(MAX_FRACTION_DIGITS)).collect();
    if fraction.as_bytes().get(MAX_FRACTION_DIGITS).is_some_and(|&d| d >= b'5') {
        carry_one(&mut digits);
    }
    let split = digits.len() - MAX_FRACTION_DIGITS;
    let (whole, fraction) = digits.split_at(split);
    (String::from_utf8_lossy(whole).into_owned(), String::from_utf8_lossy(fraction).into_owned())
}

/// Add one to the last ASCII digit, carrying leftward.
fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / GROUP_SIZE);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

fn trim_fraction(fraction: &str) -> String {
    let mut out: String = fraction.chars().take(MAX_FRACTION_DIGITS).collect();
    while out.len() < MIN_FRACTION_DIGITS {
        out.push('0');
    }
    while out.len() > MIN_FRACTION_DIGITS && out.ends_with('0') {
        out.pop();
    }
    out
}
