//! Field-level validation for fetched patient records.
//!
//! Pure functions with no failure path: malformed input yields an
//! `is_valid: false` result rather than an error, so downstream scoring can
//! count invalid readings instead of aborting on them.

use serde_json::Value as JsonValue;

/// Parsed blood-pressure reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: Option<i64>,
    pub diastolic: Option<i64>,
    pub is_valid: bool,
}

/// Parsed temperature reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Temperature {
    pub value: Option<f64>,
    pub is_valid: bool,
}

/// Parsed age field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Age {
    pub value: Option<i64>,
    pub is_valid: bool,
}

/// Parses a `"systolic/diastolic"` string.
///
/// The format is strict: digits, one `/`, digits. Either side may be absent
/// (`"120/"`, `"/80"`), in which case the present side is still parsed but the
/// reading is not valid. Anything else yields an all-null invalid reading.
pub fn blood_pressure(raw: &str) -> BloodPressure {
    let invalid = BloodPressure {
        systolic: None,
        diastolic: None,
        is_valid: false,
    };

    let Some((left, right)) = raw.split_once('/') else {
        return invalid;
    };
    let (Some(systolic), Some(diastolic)) = (parse_side(left), parse_side(right)) else {
        return invalid;
    };

    BloodPressure {
        systolic,
        diastolic,
        is_valid: systolic.is_some() && diastolic.is_some(),
    }
}

/// Outer Option is parse success; inner Option is presence.
fn parse_side(side: &str) -> Option<Option<i64>> {
    if side.is_empty() {
        return Some(None);
    }
    if !side.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    side.parse::<i64>().ok().map(Some)
}

/// Parses a temperature field; valid readings fall in [90, 120] °F.
///
/// Accepts JSON numbers and numeric strings. An out-of-range value is kept
/// (`value` is populated) but marked invalid.
pub fn temperature(raw: &JsonValue) -> Temperature {
    let Some(value) = as_f64(raw) else {
        return Temperature {
            value: None,
            is_valid: false,
        };
    };
    Temperature {
        value: Some(value),
        is_valid: (90.0..=120.0).contains(&value),
    }
}

/// Parses an age field; valid ages are strictly between 0 and 120.
pub fn age(raw: &JsonValue) -> Age {
    let parsed = match raw {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    let Some(value) = parsed else {
        return Age {
            value: None,
            is_valid: false,
        };
    };
    Age {
        value: Some(value),
        is_valid: value > 0 && value < 120,
    }
}

fn as_f64(raw: &JsonValue) -> Option<f64> {
    match raw {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
