//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by
//! the CRUD handlers. The repository stores whatever it is given;
//! everything user-supplied is checked here first.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: event, venue, partner, promoter, staff
pub const MAX_NAME_LEN: usize = 200;

/// Locations (area / city)
pub const MAX_LOCATION_LEN: usize = 200;

/// Free-text payment terms and notes
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ───────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a calendar date string (`YYYY-MM-DD`).
pub fn validate_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!("{field} must be a YYYY-MM-DD date, got {value:?}"))
    })
}

/// Validate a wall-clock time string (`HH:MM`).
pub fn validate_time(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::validation(format!("{field} must be an HH:MM time, got {value:?}")))
}
