//! Event scheduling snapshot consumed by the registration-window services.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Policy determining how a user gets into an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinMode {
    /// Joining is immediate.
    Open,
    /// Joining requires organizer approval.
    Request,
    /// Restricted to invitees; the join button is never actionable.
    InviteOnly,
}

impl std::fmt::Display for JoinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinMode::Open => write!(f, "OPEN"),
            JoinMode::Request => write!(f, "REQUEST"),
            JoinMode::InviteOnly => write!(f, "INVITE_ONLY"),
        }
    }
}

/// Error returned when parsing an unknown join mode string.
#[derive(Debug, Error)]
#[error("unknown join mode: {0}")]
pub struct ParseJoinModeError(String);

impl std::str::FromStr for JoinMode {
    type Err = ParseJoinModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(JoinMode::Open),
            "REQUEST" => Ok(JoinMode::Request),
            "INVITE_ONLY" => Ok(JoinMode::InviteOnly),
            other => Err(ParseJoinModeError(other.to_string())),
        }
    }
}

/// Event format, used for capacity presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventFormat {
    /// A pairing with a fixed capacity of two.
    OneToOne,
    /// A group event that needs a quorum to run.
    Group,
    /// Any other hosted format.
    Workshop,
}

impl std::fmt::Display for EventFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventFormat::OneToOne => write!(f, "ONE_TO_ONE"),
            EventFormat::Group => write!(f, "GROUP"),
            EventFormat::Workshop => write!(f, "WORKSHOP"),
        }
    }
}

/// Error returned when parsing an unknown event format string.
#[derive(Debug, Error)]
#[error("unknown event format: {0}")]
pub struct ParseEventFormatError(String);

impl std::str::FromStr for EventFormat {
    type Err = ParseEventFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONE_TO_ONE" => Ok(EventFormat::OneToOne),
            "GROUP" => Ok(EventFormat::Group),
            "WORKSHOP" => Ok(EventFormat::Workshop),
            other => Err(ParseEventFormatError(other.to_string())),
        }
    }
}

/// Immutable scheduling and capacity snapshot for one evaluation.
///
/// Callers validate once at the data-fetch boundary; the window services
/// assume a validated snapshot and do not re-check it. Minute offsets and
/// counts are unsigned, so negative values are unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
#[validate(schema(function = "validate_event_schedule"))]
pub struct EventSchedule {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,

    /// Minutes before start when joining opens. Absent means joining is open
    /// from the beginning of time up to the cutoff/start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_opens_minutes_before_start: Option<u32>,

    /// Minutes before start after which ordinary joining is locked. Absent
    /// means no pre-start cutoff applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_cutoff_minutes_before_start: Option<u32>,

    /// Whether joining is possible after the event has started.
    pub allow_join_late: bool,

    /// Minutes after start when late joining closes. Absent with
    /// `allow_join_late` means late joining stays open until `end_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_join_cutoff_minutes_after_start: Option<u32>,

    /// Organizer kill-switch that forces joining off regardless of windows.
    pub join_manually_closed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_participants: Option<u32>,

    /// Absent means unbounded capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    pub joined_count: u32,

    pub join_mode: JoinMode,
}

fn validate_event_schedule(schedule: &EventSchedule) -> Result<(), ValidationError> {
    shared::validation::validate_time_window(schedule.start_at, schedule.end_at)?;
    shared::validation::validate_capacity_bounds(
        schedule.min_participants,
        schedule.max_participants,
    )
}

/// Boundary instants derived once per evaluation and shared by the
/// join-decision and countdown services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WindowBoundaries {
    /// When joining opens; absent means no opening boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<DateTime<Utc>>,
    /// When ordinary joining locks before start; absent means no cutoff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_cutoff_at: Option<DateTime<Utc>>,
    /// When late joining closes; absent means late joining runs to `end_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_cutoff_at: Option<DateTime<Utc>>,
}

impl EventSchedule {
    /// Derive the optional window boundary instants from the minute offsets.
    pub fn boundaries(&self) -> WindowBoundaries {
        WindowBoundaries {
            opens_at: self
                .join_opens_minutes_before_start
                .map(|mins| self.start_at - Duration::minutes(i64::from(mins))),
            pre_cutoff_at: self
                .join_cutoff_minutes_before_start
                .map(|mins| self.start_at - Duration::minutes(i64::from(mins))),
            late_cutoff_at: self
                .late_join_cutoff_minutes_after_start
                .map(|mins| self.start_at + Duration::minutes(i64::from(mins))),
        }
    }

    /// Check whether the event has reached its capacity limit.
    /// Always false when `max_participants` is absent.
    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|max| self.joined_count >= max)
    }

    /// Remaining spots (None if unbounded).
    pub fn remaining_spots(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.joined_count))
    }
}

/// Coarse event state supplied by the caller, not derived here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventFlags {
    pub is_deleted: bool,
    pub is_canceled: bool,
    pub is_ongoing: bool,
    pub has_started: bool,
}
