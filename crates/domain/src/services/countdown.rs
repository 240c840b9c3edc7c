//! Countdown phase classification: picks the next boundary instant and the
//! label/color pair that should drive the live countdown pill.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{EventFlags, EventSchedule, WindowBoundaries};

/// Mutually exclusive stage of the countdown lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountdownPhase {
    BeforeOpen,
    OpenBeforeCutoff,
    CutoffBeforeStart,
    StartedLateJoin,
    StartedNoLateJoin,
    /// Terminal; never carried by an emitted tick.
    Ended,
}

/// Countdown label shown next to the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownLabel {
    OpensIn,
    ClosesIn,
    StartsIn,
    LateJoinClosesIn,
    EndsIn,
}

impl std::fmt::Display for CountdownLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountdownLabel::OpensIn => write!(f, "Opens in"),
            CountdownLabel::ClosesIn => write!(f, "Closes in"),
            CountdownLabel::StartsIn => write!(f, "Starts in"),
            CountdownLabel::LateJoinClosesIn => write!(f, "Late join closes in"),
            CountdownLabel::EndsIn => write!(f, "Ends in"),
        }
    }
}

/// Color tag for the countdown pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseColor {
    Info,
    Success,
    Warn,
    Error,
}

/// One countdown evaluation. Recomputed every tick; no persisted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CountdownTick {
    pub phase: CountdownPhase,
    pub target: DateTime<Utc>,
    pub label: CountdownLabel,
    pub color: PhaseColor,
}

impl CountdownTick {
    /// Remaining time until the target, clamped to zero.
    pub fn remaining_from(&self, now: DateTime<Utc>) -> Duration {
        (self.target - now).max(Duration::zero())
    }

    /// Two-unit display text for the remaining time, e.g. "1h 30m".
    pub fn remaining_text(&self, now: DateTime<Utc>) -> String {
        shared::format::compact_duration(self.remaining_from(now))
    }
}

/// Classify `now` into the six-phase countdown lifecycle.
pub fn lifecycle_phase(
    now: DateTime<Utc>,
    schedule: &EventSchedule,
    bounds: &WindowBoundaries,
) -> CountdownPhase {
    if now >= schedule.end_at {
        return CountdownPhase::Ended;
    }
    if bounds.opens_at.is_some_and(|opens_at| now < opens_at) {
        return CountdownPhase::BeforeOpen;
    }
    if now < schedule.start_at {
        return match bounds.pre_cutoff_at {
            Some(cutoff_at) if now >= cutoff_at => CountdownPhase::CutoffBeforeStart,
            _ => CountdownPhase::OpenBeforeCutoff,
        };
    }
    let late_join_open = schedule.allow_join_late
        && bounds.late_cutoff_at.map_or(true, |late_at| now < late_at);
    if late_join_open {
        CountdownPhase::StartedLateJoin
    } else {
        CountdownPhase::StartedNoLateJoin
    }
}

/// Compute the countdown display tuple for `now`, or `None` when nothing
/// should render: the event is deleted or canceled, joining is manually
/// closed, or no boundary remains in the future.
///
/// Every emitted tick has `target > now`; once a boundary is crossed the
/// caller re-classifies on the next tick instead of showing a negative
/// duration.
pub fn classify_countdown_phase(
    now: DateTime<Utc>,
    schedule: &EventSchedule,
    flags: &EventFlags,
) -> Option<CountdownTick> {
    if flags.is_deleted || flags.is_canceled || schedule.join_manually_closed {
        return None;
    }

    let bounds = schedule.boundaries();
    let phase = lifecycle_phase(now, schedule, &bounds);

    let (target, label, color) = match phase {
        CountdownPhase::BeforeOpen => {
            (bounds.opens_at?, CountdownLabel::OpensIn, PhaseColor::Info)
        }
        CountdownPhase::OpenBeforeCutoff => match bounds.pre_cutoff_at {
            Some(cutoff_at) => (cutoff_at, CountdownLabel::ClosesIn, PhaseColor::Warn),
            None => (
                schedule.start_at,
                CountdownLabel::StartsIn,
                PhaseColor::Success,
            ),
        },
        CountdownPhase::CutoffBeforeStart => (
            schedule.start_at,
            CountdownLabel::StartsIn,
            PhaseColor::Success,
        ),
        CountdownPhase::StartedLateJoin => match bounds.late_cutoff_at {
            Some(late_at) => (late_at, CountdownLabel::LateJoinClosesIn, PhaseColor::Warn),
            None => (schedule.end_at, CountdownLabel::EndsIn, PhaseColor::Error),
        },
        CountdownPhase::StartedNoLateJoin => {
            (schedule.end_at, CountdownLabel::EndsIn, PhaseColor::Error)
        }
        CountdownPhase::Ended => return None,
    };

    Some(CountdownTick {
        phase,
        target,
        label,
        color,
    })
}
