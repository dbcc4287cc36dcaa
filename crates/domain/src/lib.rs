//! # Domain
//!
//! 原稿の文字数カウント規則。
//!
//! - [`filter`]: 空白・ルビ記法を取り除く
//! - [`counter`]: 文書全体／選択範囲の文字数を数える
//! - [`language`]: カウント対象の言語判定
//! - [`offsets`]: 選択範囲オフセットの単位変換
//!
//! Everything here is pure: no I/O, no state shared between calls.

#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod filter;
pub mod language;
pub mod offsets;

pub use counter::{CharacterCounter, CountUnit, count_document, count_selections};
pub use filter::{FilterRule, filter_uncounted_characters};
pub use language::{BUILTIN_LANGUAGES, MARKDOWN, PLAINTEXT, language_id_for_extension, should_count};
pub use offsets::OffsetEncoding;
