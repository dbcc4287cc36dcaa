//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the counting rules with the editor ports:
//!
//! - [`update_status`]: Recount the active document and refresh the status
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod update_status;

pub use dto::{HideReason, StatusOutcome};
pub use update_status::UpdateCharacterCount;
