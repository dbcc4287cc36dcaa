// crates/domain/src/filter.rs
use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// ルビ開始記号（半角・全角）
pub const RUBY_MARKERS: [char; 2] = ['|', '｜'];

/// カウントから除外する規則。[`FilterRule::ORDERED`] の順に適用する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterRule {
    /// すべての空白文字（改行・全角スペースを含む）
    Whitespace,
    /// `《…》` で囲まれたルビとその記号
    RubyAnnotation,
    /// ルビ開始記号 `|` / `｜`
    RubyMarker,
}

impl FilterRule {
    /// Later rules see the output of earlier ones; the order is part of the counting rule.
    pub const ORDERED: [Self; 3] = [Self::Whitespace, Self::RubyAnnotation, Self::RubyMarker];

    /// Apply this single rule, borrowing the input when nothing is removed.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Whitespace => strip_chars(text, is_uncounted_whitespace),
            Self::RubyAnnotation => ruby_annotation_re().replace_all(text, ""),
            Self::RubyMarker => strip_chars(text, is_ruby_marker),
        }
    }
}

/// カウントに含めない文字を削除した文字列を返す。
///
/// ```
/// use novel_count_domain::filter_uncounted_characters;
///
/// assert_eq!(filter_uncounted_characters("|漢字《かんじ》を 書く"), "漢字を書く");
/// ```
pub fn filter_uncounted_characters(text: &str) -> String {
    let mut current = Cow::Borrowed(text);
    for rule in FilterRule::ORDERED {
        let next = match rule.apply(&current) {
            Cow::Owned(filtered) => Some(filtered),
            Cow::Borrowed(_) => None,
        };
        if let Some(filtered) = next {
            current = Cow::Owned(filtered);
        }
    }
    current.into_owned()
}

/// Unicode `White_Space` plus U+FEFF, which editors report as whitespace too.
#[inline]
pub fn is_uncounted_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[inline]
pub fn is_ruby_marker(c: char) -> bool {
    RUBY_MARKERS.contains(&c)
}

fn strip_chars(text: &str, remove: fn(char) -> bool) -> Cow<'_, str> {
    if text.contains(remove) {
        Cow::Owned(text.chars().filter(|&c| !remove(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

// At least one character between the brackets; `》` directly after `《` does not close the span.
fn ruby_annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"《.+?》").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_all_whitespace_kinds() {
        assert_eq!(filter_uncounted_characters("a b\tc\r\nd\u{3000}e\u{FEFF}f\u{00A0}g"), "abcdefg");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(filter_uncounted_characters(""), "");
    }

    #[test]
    fn removes_ruby_span_with_brackets() {
        assert_eq!(filter_uncounted_characters("《ふりがな》本文"), "本文");
        assert_eq!(filter_uncounted_characters("|東京《とうきょう》へ"), "東京へ");
    }

    #[test]
    fn ruby_spans_are_non_greedy() {
        assert_eq!(filter_uncounted_characters("漢《かん》字《じ》だ"), "漢字だ");
    }

    #[test]
    fn nested_looking_span_ends_at_first_close() {
        // `《あ《い》` is one span; the trailing `う》` survives.
        assert_eq!(filter_uncounted_characters("《あ《い》う》"), "う》");
    }

    #[test]
    fn unclosed_open_bracket_is_kept() {
        assert_eq!(filter_uncounted_characters("本《文"), "本《文");
        assert_eq!(filter_uncounted_characters("》本《"), "》本《");
    }

    #[test]
    fn empty_brackets_need_a_later_close() {
        assert_eq!(filter_uncounted_characters("《》"), "《》");
        assert_eq!(filter_uncounted_characters("《》本》文"), "文");
    }

    #[test]
    fn whitespace_inside_span_is_removed_first() {
        // After whitespace removal `《 》` becomes `《》`, which is not a span on its own.
        assert_eq!(filter_uncounted_characters("《 》"), "《》");
        assert_eq!(filter_uncounted_characters("《か\nな》本"), "本");
    }

    #[test]
    fn removes_both_marker_widths() {
        assert_eq!(filter_uncounted_characters("漢|字｜テスト"), "漢字テスト");
        assert_eq!(filter_uncounted_characters("||｜｜"), "");
    }

    #[test]
    fn marker_inside_span_goes_with_span() {
        assert_eq!(filter_uncounted_characters("本《|ほん》"), "本");
    }

    #[test]
    fn rule_apply_borrows_when_untouched() {
        assert!(matches!(FilterRule::Whitespace.apply("本文"), Cow::Borrowed(_)));
        assert!(matches!(FilterRule::RubyAnnotation.apply("本文"), Cow::Borrowed(_)));
        assert!(matches!(FilterRule::RubyMarker.apply("本文"), Cow::Borrowed(_)));
    }

    #[test]
    fn rule_order_is_whitespace_span_marker() {
        assert_eq!(
            FilterRule::ORDERED,
            [FilterRule::Whitespace, FilterRule::RubyAnnotation, FilterRule::RubyMarker]
        );
    }
}
