// crates/domain/src/language.rs

/// Markdown の言語 ID
pub const MARKDOWN: &str = "markdown";
/// プレーンテキストの言語 ID
pub const PLAINTEXT: &str = "plaintext";

/// 設定なしでカウント対象になる言語 ID
pub const BUILTIN_LANGUAGES: [&str; 2] = [MARKDOWN, PLAINTEXT];

/// Whether documents of `language_id` get a character count.
///
/// `additional` is the already-resolved extra language from the user's
/// settings; `None` means only the built-ins are counted.
pub fn should_count(language_id: &str, additional: Option<&str>) -> bool {
    BUILTIN_LANGUAGES.contains(&language_id) || additional.is_some_and(|extra| extra == language_id)
}

/// Map a file extension to the language ID an editor would assign.
///
/// Files without an extension open as plain text.
pub fn language_id_for_extension(ext: Option<&str>) -> String {
    let Some(ext) = ext else {
        return PLAINTEXT.to_string();
    };
    match ext.to_ascii_lowercase().as_str() {
        "md" | "markdown" | "mdown" | "mkd" => MARKDOWN.to_string(),
        "txt" | "text" | "" => PLAINTEXT.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_always_count() {
        assert!(should_count("markdown", None));
        assert!(should_count("plaintext", None));
        assert!(should_count("plaintext", Some("yaml")));
    }

    #[test]
    fn other_languages_need_configuration() {
        assert!(!should_count("yaml", None));
        assert!(should_count("yaml", Some("yaml")));
        assert!(!should_count("yaml", Some("json")));
    }

    #[test]
    fn comparison_is_exact() {
        assert!(!should_count("Markdown", None));
        assert!(!should_count("YAML", Some("yaml")));
    }

    #[test]
    fn maps_extensions() {
        assert_eq!(language_id_for_extension(Some("md")), MARKDOWN);
        assert_eq!(language_id_for_extension(Some("TXT")), PLAINTEXT);
        assert_eq!(language_id_for_extension(None), PLAINTEXT);
        assert_eq!(language_id_for_extension(Some("Yaml")), "yaml");
    }
}
