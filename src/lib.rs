//! 原稿用の文字数カウンター。
//!
//! The counting core is re-exported from the domain crate:
//!
//! ```
//! use novel_count::{TextRange, count_document, count_selections, should_count};
//!
//! assert_eq!(count_document("|漢字《かんじ》を 書く").value(), 5);
//! assert_eq!(count_selections("abc def", &[TextRange::new(0, 3)]).unwrap().value(), 3);
//! assert!(should_count("markdown", None));
//! ```
//!
//! The rest of the crate is the command-line host around it.

// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod version;

pub use app::{run, run_with_config};
pub use novel_count_domain::{
    CharacterCounter, CountUnit, OffsetEncoding, count_document, count_selections, filter_uncounted_characters,
    should_count,
};
pub use novel_count_shared_kernel::{CharCount, DomainError, TextRange};
pub use version::VERSION;
