//! Join-window evaluation: decides whether joining is currently possible
//! and which call-to-action the UI should show.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EventSchedule, JoinMode};

/// User-facing call-to-action for the join button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaLabel {
    Join,
    RequestToJoin,
    InviteOnly,
    NotOpenYet,
    Locked,
    Closed,
    Full,
    Ended,
}

impl std::fmt::Display for CtaLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CtaLabel::Join => write!(f, "Join event"),
            CtaLabel::RequestToJoin => write!(f, "Request to join"),
            CtaLabel::InviteOnly => write!(f, "Invite only"),
            CtaLabel::NotOpenYet => write!(f, "Not open yet"),
            CtaLabel::Locked => write!(f, "Registration closed"),
            CtaLabel::Closed => write!(f, "Joining closed"),
            CtaLabel::Full => write!(f, "No spots left"),
            CtaLabel::Ended => write!(f, "Event ended"),
        }
    }
}

/// Outcome of one join-window evaluation. Recomputed on every check; holds
/// no reference back to the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JoinDecision {
    pub can_join: bool,
    pub cta_label: CtaLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub is_before_open: bool,
    pub is_pre_cutoff_closed: bool,
    pub is_manually_closed: bool,
    pub is_full: bool,
    pub is_late_join_open: bool,
}

/// Evaluate the join window at `now`.
///
/// Override precedence, highest first: ended, full, manually closed,
/// pre-cutoff lock, not-yet-open. The first matching override wins and
/// forces `can_join` off; the join-mode default applies only when no
/// override matches. Boundary instants are inclusive on the closed side
/// (`>=`) and exclusive on the still-open side (`<`).
pub fn evaluate_join_window(now: DateTime<Utc>, schedule: &EventSchedule) -> JoinDecision {
    let bounds = schedule.boundaries();

    let is_before_open = bounds.opens_at.is_some_and(|opens_at| now < opens_at);
    let is_pre_cutoff_closed = bounds
        .pre_cutoff_at
        .is_some_and(|cutoff_at| cutoff_at <= now && now < schedule.start_at);
    let is_late_join_open = schedule.allow_join_late
        && schedule.start_at <= now
        && now < schedule.end_at
        && bounds.late_cutoff_at.map_or(true, |late_at| now < late_at);
    let is_full = schedule.is_full();
    let is_manually_closed = schedule.join_manually_closed;

    let in_pre_start_window =
        !is_before_open && !is_pre_cutoff_closed && now < schedule.start_at;
    let window_open = (in_pre_start_window || is_late_join_open) && !is_manually_closed;

    let (mut can_join, mut cta_label, mut reason) = match schedule.join_mode {
        JoinMode::Open => (window_open && !is_full, CtaLabel::Join, None),
        JoinMode::Request => (window_open && !is_full, CtaLabel::RequestToJoin, None),
        JoinMode::InviteOnly => (
            false,
            CtaLabel::InviteOnly,
            Some("Only invited members can join this event".to_string()),
        ),
    };

    // Ordered override rules; the first hit wins.
    let overrides = [
        (
            now >= schedule.end_at,
            CtaLabel::Ended,
            "This event has already ended",
        ),
        (is_full, CtaLabel::Full, "All spots are taken"),
        (
            is_manually_closed,
            CtaLabel::Closed,
            "The organizer closed joining for this event",
        ),
        (
            is_pre_cutoff_closed,
            CtaLabel::Locked,
            "Registration locks shortly before the event starts",
        ),
        (
            is_before_open,
            CtaLabel::NotOpenYet,
            "Registration has not opened yet",
        ),
    ];
    if let Some((_, label, text)) = overrides.iter().find(|(hit, _, _)| *hit) {
        can_join = false;
        cta_label = *label;
        reason = Some((*text).to_string());
    }

    JoinDecision {
        can_join,
        cta_label,
        reason,
        is_before_open,
        is_pre_cutoff_closed,
        is_manually_closed,
        is_full,
        is_late_join_open,
    }
}
