// crates/ports/src/editor.rs
use novel_count_shared_kernel::{Result, TextRange};

/// Everything the counter needs from the active editor at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub language_id: String,
    pub text: String,
    pub selections: Vec<TextRange>,
}

impl EditorSnapshot {
    pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { language_id: language_id.into(), text: text.into(), selections: Vec::new() }
    }

    #[must_use]
    pub fn with_selections(mut self, selections: Vec<TextRange>) -> Self {
        self.selections = selections;
        self
    }

    /// At least one range is more than a bare cursor.
    ///
    /// Reversed ranges count as selections so that counting them reports the error.
    pub fn has_selection(&self) -> bool {
        self.selections.iter().any(|range| range.start != range.end)
    }
}

/// Port for reading the active editor.
///
/// `Ok(None)` means no editor is active; the status is hidden in that case.
pub trait ActiveEditor: Send + Sync {
    fn snapshot(&self) -> Result<Option<EditorSnapshot>>;
}
