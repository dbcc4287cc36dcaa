// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod text_range;

pub use counts::CharCount;
pub use text_range::TextRange;
