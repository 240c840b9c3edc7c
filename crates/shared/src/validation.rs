//! Common validation utilities.

use chrono::{DateTime, Utc};
use validator::ValidationError;

/// Validates that a time window ends after it starts.
pub fn validate_time_window(
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end_at > start_at {
        Ok(())
    } else {
        let mut err = ValidationError::new("window_order");
        err.message = Some("end_at must be after start_at".into());
        Err(err)
    }
}

/// Validates that capacity bounds are ordered when both are present.
pub fn validate_capacity_bounds(
    min_participants: Option<u32>,
    max_participants: Option<u32>,
) -> Result<(), ValidationError> {
    match (min_participants, max_participants) {
        (Some(min), Some(max)) if min > max => {
            let mut err = ValidationError::new("capacity_bounds");
            err.message = Some("min_participants must not exceed max_participants".into());
            Err(err)
        }
        _ => Ok(()),
    }
}
