//! # Ports
//!
//! Interface definitions for the editor host.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`editor`]: The active document and its selections
//! - [`settings`]: User configuration, read fresh for every count
//! - [`status`]: Where the count is displayed
//!
//! These ports allow the counting use case to remain independent of any
//! particular editor, configuration store or widget toolkit.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod editor;
pub mod settings;
pub mod status;
