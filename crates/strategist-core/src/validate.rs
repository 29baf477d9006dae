// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field-level validation helpers shared by drafts and patches.

use crate::error::StrategistError;

/// Rejects missing or whitespace-only required text fields.
pub fn non_blank(field: &'static str, value: &str) -> Result<(), StrategistError> {
    if value.trim().is_empty() {
        return Err(StrategistError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Rejects negative counters.
pub fn non_negative(field: &'static str, value: i64) -> Result<(), StrategistError> {
    if value < 0 {
        return Err(StrategistError::validation(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects negative optional quantities (hours, minutes, seconds).
pub fn non_negative_opt(field: &'static str, value: Option<f64>) -> Result<(), StrategistError> {
    if let Some(v) = value
        && v < 0.0
    {
        return Err(StrategistError::validation(
            field,
            format!("must be non-negative, got {v}"),
        ));
    }
    Ok(())
}

/// Rejects percentages outside [0, 100].
pub fn percentage(field: &'static str, value: f64) -> Result<(), StrategistError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(StrategistError::validation(
            field,
            format!("must be between 0 and 100, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_rejected() {
        assert!(non_blank("title", "").is_err());
        assert!(non_blank("title", "   ").is_err());
        assert!(non_blank("title", "ok").is_ok());
    }

    #[test]
    fn percentage_bounds() {
        assert!(percentage("retention_rate", 0.0).is_ok());
        assert!(percentage("retention_rate", 100.0).is_ok());
        assert!(percentage("retention_rate", 100.1).is_err());
        assert!(percentage("retention_rate", -0.1).is_err());
    }
}
