//! Numeric values computed from record fields

use super::error::{GenerationError, Result};
use crate::model::{parse_size, Category};

/// Hours in a game day
const HOURS_PER_DAY: f64 = 24.0;

/// Render a float the way def files expect: whole numbers keep one decimal
/// (`10.0`), everything else uses the shortest exact form (`0.05`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Severity lost per day so an effect of severity 1 wears off after
/// `duration_hours`.
pub fn severity_per_day(
    category: Category,
    def_name: &str,
    duration_hours: f64,
) -> Result<f64> {
    if duration_hours == 0.0 {
        return Err(GenerationError::DivisionByZero {
            category,
            def_name: def_name.to_string(),
            field: "highDuration",
            derived: "severityPerDay",
        });
    }
    if !duration_hours.is_finite() {
        return Err(GenerationError::InvalidNumber {
            category,
            def_name: def_name.to_string(),
            field: "highDuration",
            value: duration_hours.to_string(),
        });
    }
    Ok(-HOURS_PER_DAY / duration_hours)
}

/// `W,H` footprint rendered as the engine's `(W,H)` vector
pub fn size_vector(category: Category, def_name: &str, size: &str) -> Result<String> {
    let (w, h) = parse_size(size).ok_or_else(|| GenerationError::InvalidNumber {
        category,
        def_name: def_name.to_string(),
        field: "size",
        value: size.to_string(),
    })?;
    Ok(format!("({},{})", w, h))
}
