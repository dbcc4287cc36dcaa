// crates/domain/src/offsets.rs
use std::{cmp::Ordering, str::FromStr};

use novel_count_shared_kernel::{DomainError, DomainResult, TextRange};
use serde::{Deserialize, Serialize};

/// Unit in which a host reports selection offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetEncoding {
    /// UTF-8 byte offsets (Rust string indices).
    Utf8,
    /// UTF-16 code units, as editors and LSP clients report positions.
    #[default]
    Utf16,
    /// Unicode scalar values.
    Char,
}

impl OffsetEncoding {
    /// Convert `offset` in this encoding into a byte index into `text`.
    ///
    /// # Errors
    ///
    /// [`DomainError::OffsetOutOfBounds`] past the end of `text`,
    /// [`DomainError::NotCharBoundary`] when the offset splits a character.
    pub fn to_byte_offset(self, text: &str, offset: usize) -> DomainResult<usize> {
        match self {
            Self::Utf8 => utf8_offset(text, offset),
            Self::Utf16 => utf16_offset(text, offset),
            Self::Char => char_offset(text, offset),
        }
    }

    /// Resolve `range` against `text` and return the selected substring.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidRange`] when `start > end`, otherwise as [`Self::to_byte_offset`].
    pub fn slice(self, text: &str, range: TextRange) -> DomainResult<&str> {
        if range.start > range.end {
            return Err(DomainError::InvalidRange { start: range.start, end: range.end });
        }
        let start = self.to_byte_offset(text, range.start)?;
        let end = self.to_byte_offset(text, range.end)?;
        Ok(&text[start..end])
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
            Self::Char => "char",
        }
    }
}

impl FromStr for OffsetEncoding {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" | "byte" | "bytes" => Ok(Self::Utf8),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            "char" | "chars" => Ok(Self::Char),
            other => Err(DomainError::InvalidConfiguration { reason: format!("unknown offset encoding: {other}") }),
        }
    }
}

fn utf8_offset(text: &str, offset: usize) -> DomainResult<usize> {
    if offset > text.len() {
        return Err(DomainError::OffsetOutOfBounds { offset, len: text.len() });
    }
    if !text.is_char_boundary(offset) {
        return Err(DomainError::NotCharBoundary { offset });
    }
    Ok(offset)
}

fn utf16_offset(text: &str, offset: usize) -> DomainResult<usize> {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        match units.cmp(&offset) {
            Ordering::Equal => return Ok(byte),
            Ordering::Greater => return Err(DomainError::NotCharBoundary { offset }),
            Ordering::Less => {}
        }
        units += ch.len_utf16();
    }
    match units.cmp(&offset) {
        Ordering::Equal => Ok(text.len()),
        Ordering::Greater => Err(DomainError::NotCharBoundary { offset }),
        Ordering::Less => Err(DomainError::OffsetOutOfBounds { offset, len: units }),
    }
}

fn char_offset(text: &str, offset: usize) -> DomainResult<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(offset)
        .ok_or_else(|| DomainError::OffsetOutOfBounds { offset, len: text.chars().count() })
}
