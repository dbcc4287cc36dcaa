// crates/domain/src/counter.rs
use std::str::FromStr;

use novel_count_shared_kernel::{CharCount, DomainError, DomainResult, TextRange};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::{filter::filter_uncounted_characters, offsets::OffsetEncoding};

/// 文字数の数え方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountUnit {
    /// UTF-16 コードユニット数（エディタの文字列長と同じ）
    #[default]
    Utf16,
    /// Unicode スカラー値の数
    Chars,
    /// 書記素クラスタ数（見た目の文字数）
    Graphemes,
}

impl CountUnit {
    pub fn measure(self, text: &str) -> CharCount {
        let len = match self {
            Self::Utf16 => text.encode_utf16().count(),
            Self::Chars => text.chars().count(),
            Self::Graphemes => text.graphemes(true).count(),
        };
        CharCount::new(len)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf16 => "utf16",
            Self::Chars => "chars",
            Self::Graphemes => "graphemes",
        }
    }
}

impl FromStr for CountUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf16" | "utf-16" => Ok(Self::Utf16),
            "chars" | "char" | "scalars" => Ok(Self::Chars),
            "graphemes" | "grapheme" => Ok(Self::Graphemes),
            other => Err(DomainError::InvalidConfiguration { reason: format!("unknown count unit: {other}") }),
        }
    }
}

/// Applies the exclusion rules and measures what is left.
///
/// Holds only its two units; every call starts from the text it is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterCounter {
    unit: CountUnit,
    offsets: OffsetEncoding,
}

impl CharacterCounter {
    pub const fn new(unit: CountUnit, offsets: OffsetEncoding) -> Self {
        Self { unit, offsets }
    }

    /// 文書全体の文字数
    pub fn count_document(&self, text: &str) -> CharCount {
        self.unit.measure(&filter_uncounted_characters(text))
    }

    /// 単一の選択範囲の文字数
    ///
    /// # Errors
    ///
    /// Fails when `range` is reversed, out of bounds, or splits a character.
    pub fn count_range(&self, text: &str, range: TextRange) -> DomainResult<CharCount> {
        let selected = self.offsets.slice(text, range)?;
        Ok(self.count_document(selected))
    }

    /// 各選択範囲を個別にフィルタして合計する。
    ///
    /// Ranges share no filtering state: a `《` in one range and its `》` in
    /// another are not treated as a ruby span in either.
    ///
    /// # Errors
    ///
    /// The first malformed range aborts the sum; see [`Self::count_range`].
    pub fn count_selections(&self, text: &str, ranges: &[TextRange]) -> DomainResult<CharCount> {
        ranges.iter().map(|range| self.count_range(text, *range)).sum()
    }
}

/// [`CharacterCounter::count_document`] with UTF-16 counting.
pub fn count_document(text: &str) -> CharCount {
    CharacterCounter::default().count_document(text)
}

/// [`CharacterCounter::count_selections`] with UTF-16 offsets and counting.
///
/// # Errors
///
/// Fails on malformed ranges instead of panicking.
pub fn count_selections(text: &str, ranges: &[TextRange]) -> DomainResult<CharCount> {
    CharacterCounter::default().count_selections(text, ranges)
}
