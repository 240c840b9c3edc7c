//! Event status resolution: maps the join decision plus coarse event flags
//! to a single display status for badges.

use serde::{Deserialize, Serialize};

use super::join_window::JoinDecision;
use crate::models::EventFlags;

/// Severity tone for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Ok,
    Info,
    Warn,
    Error,
}

/// Machine-readable status reason code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusReason {
    Deleted,
    Canceled,
    Ongoing,
    Closed,
    NotOpenYet,
    Lock,
    Full,
    Started,
    Available,
}

/// Display status for an event. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventStatus {
    pub label: String,
    pub tone: StatusTone,
    pub reason: StatusReason,
}

/// Resolve the display status from caller-supplied flags and the join
/// decision.
///
/// Fixed precedence, first match wins: deleted, canceled, ongoing, manually
/// closed, before open, pre-cutoff lock, full, started, available. This
/// ordering is intentionally different from the join-window override order
/// (ended is not checked here; the caller supplies ongoing/started flags
/// pre-computed) and the two must not be unified.
pub fn resolve_event_status(flags: &EventFlags, decision: &JoinDecision) -> EventStatus {
    let (label, tone, reason) = if flags.is_deleted {
        ("Event deleted", StatusTone::Error, StatusReason::Deleted)
    } else if flags.is_canceled {
        ("Event canceled", StatusTone::Error, StatusReason::Canceled)
    } else if flags.is_ongoing {
        ("Happening now", StatusTone::Info, StatusReason::Ongoing)
    } else if decision.is_manually_closed {
        ("Joining closed", StatusTone::Warn, StatusReason::Closed)
    } else if decision.is_before_open {
        (
            "Registration opens soon",
            StatusTone::Info,
            StatusReason::NotOpenYet,
        )
    } else if decision.is_pre_cutoff_closed {
        ("Registration locked", StatusTone::Warn, StatusReason::Lock)
    } else if decision.is_full {
        ("No spots left", StatusTone::Error, StatusReason::Full)
    } else if flags.has_started {
        ("Already started", StatusTone::Warn, StatusReason::Started)
    } else {
        (
            "Open for registration",
            StatusTone::Ok,
            StatusReason::Available,
        )
    };

    EventStatus {
        label: label.to_string(),
        tone,
        reason,
    }
}
