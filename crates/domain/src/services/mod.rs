//! Registration-window services for the event platform.
//!
//! Services contain pure decision logic that operates on schedule snapshots.
//! Every function takes its own `now` and snapshot; nothing here touches the
//! network, storage, or shared mutable state.

pub mod capacity;
pub mod countdown;
pub mod event_status;
pub mod join_window;
pub mod ticker;

pub use capacity::{format_capacity_detail, CapacityDetail, CapacityVariant};

pub use countdown::{
    classify_countdown_phase, CountdownLabel, CountdownPhase, CountdownTick, PhaseColor,
};

pub use event_status::{resolve_event_status, EventStatus, StatusReason, StatusTone};

pub use join_window::{evaluate_join_window, CtaLabel, JoinDecision};

pub use ticker::{CountdownObserver, CountdownTicker};
