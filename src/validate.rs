//! Basic field-presence and invariant checks for incoming records.

use crate::error::DiveLogError;
use crate::models::{DiveEntry, User};
use crate::parse::{parse_date, parse_time};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Check a dive entry against its invariants and the known users.
///
/// Returns the first problem found.
pub fn validate_entry(entry: &DiveEntry, users: &[User]) -> Result<(), DiveLogError> {
    let invalid = |message: String| DiveLogError::InvalidEntry {
        entry_id: entry.id.0.clone(),
        message,
    };

    if entry.id.0.trim().is_empty() {
        return Err(invalid("missing id".to_string()));
    }
    if entry.user_id.0.trim().is_empty() {
        return Err(invalid("missing userId".to_string()));
    }
    if entry.location.trim().is_empty() {
        return Err(invalid("missing location".to_string()));
    }

    parse_date(&entry.date)?;
    parse_time(&entry.time)?;

    if !entry.depth.is_finite() || entry.depth <= 0.0 {
        return Err(invalid(format!("depth must be positive, got {}", entry.depth)));
    }
    if entry.duration == 0 {
        return Err(invalid("duration must be positive".to_string()));
    }
    if let Some(rating) = entry.rating {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(invalid(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
            )));
        }
    }
    if let Some(c) = entry.catches.iter().find(|c| c.quantity == 0) {
        return Err(invalid(format!("catch {} has zero quantity", c.id.0)));
    }

    if !users.iter().any(|u| u.id == entry.user_id) {
        tracing::warn!(
            entry_id = %entry.id.0,
            user_id = %entry.user_id.0,
            "dive entry references unknown user"
        );
        return Err(DiveLogError::UnknownUser {
            entry_id: entry.id.0.clone(),
            user_id: entry.user_id.0.clone(),
        });
    }

    Ok(())
}

pub fn validate_user(user: &User) -> Result<(), DiveLogError> {
    let missing = |field: &str| DiveLogError::InvalidUser {
        user_id: user.id.0.clone(),
        message: format!("missing {field}"),
    };

    if user.id.0.trim().is_empty() {
        return Err(missing("id"));
    }
    if user.username.trim().is_empty() {
        return Err(missing("username"));
    }
    if user.email.trim().is_empty() {
        return Err(missing("email"));
    }
    Ok(())
}
