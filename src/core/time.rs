//! core/time.rs
//! Clock formatting and duration-label parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationLabelError {
    #[error("duration label {0:?} has no ':' separator")]
    MissingSeparator(String),
    #[error("duration label {0:?} has invalid minutes")]
    InvalidMinutes(String),
    #[error("duration label {0:?} has invalid seconds")]
    InvalidSeconds(String),
}

/// Format seconds as `M:SS`. Fractions are floored.
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0).floor() as u32;
    let m = total / 60;
    let s = total % 60;
    format!("{m}:{s:02}")
}

/// Elapsed seconds for a progress percentage over `total_secs`.
pub fn elapsed_secs(progress_percent: f32, total_secs: u32) -> f32 {
    progress_percent / 100.0 * total_secs as f32
}

/// Parse a `M:SS` label into whole seconds.
pub fn parse_duration_label(label: &str) -> Result<u32, DurationLabelError> {
    let Some((mins, secs)) = label.trim().split_once(':') else {
        return Err(DurationLabelError::MissingSeparator(label.to_string()));
    };

    let invalid_minutes = || DurationLabelError::InvalidMinutes(label.to_string());
    let invalid_seconds = || DurationLabelError::InvalidSeconds(label.to_string());

    if !is_digits(mins) {
        return Err(invalid_minutes());
    }
    let mins: u32 = mins.parse().map_err(|_| invalid_minutes())?;

    // Seconds must be exactly two digits and below 60.
    if secs.len() != 2 || !is_digits(secs) {
        return Err(invalid_seconds());
    }
    let secs: u32 = secs.parse().map_err(|_| invalid_seconds())?;
    if secs >= 60 {
        return Err(invalid_seconds());
    }

    mins.checked_mul(60)
        .and_then(|m| m.checked_add(secs))
        .ok_or_else(invalid_minutes)
}

/// Non-empty and ASCII digits only (no sign, no whitespace).
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "./time_test.rs"]
mod time_test;
