//! Domain models for the event platform.

pub mod event;

pub use event::{
    EventFlags, EventFormat, EventSchedule, JoinMode, ParseEventFormatError, ParseJoinModeError,
    WindowBoundaries,
};
