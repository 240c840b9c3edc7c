//! Shared utilities and common types for the event platform backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Clock abstraction so time-dependent code is testable
//! - Display formatting helpers (durations, participant counts)
//! - Common validation logic

pub mod clock;
pub mod format;
pub mod validation;
