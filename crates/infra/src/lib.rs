// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod editor;
pub mod persistence;
pub mod settings;
pub mod status;
pub mod watch;
