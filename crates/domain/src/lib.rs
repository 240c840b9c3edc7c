//! Domain layer for the event platform backend.
//!
//! This crate contains:
//! - Domain models (event schedule snapshots, window boundaries, flags)
//! - Registration-window business logic services
//! - The countdown ticker that drives live displays

pub mod models;
pub mod services;
