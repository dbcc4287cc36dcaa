// crates/infra/src/editor.rs
use std::path::{Path, PathBuf};

use log::debug;
use novel_count_domain::language_id_for_extension;
use novel_count_ports::editor::{ActiveEditor, EditorSnapshot};
use novel_count_shared_kernel::{Result, TextRange};

use crate::persistence::FileReader;

/// Treats a file on disk as the active document.
///
/// The file is read again on every snapshot. A missing file behaves like a
/// closed editor.
#[derive(Debug, Clone)]
pub struct FileEditor {
    path: PathBuf,
    language_id: Option<String>,
    selections: Vec<TextRange>,
}

impl FileEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), language_id: None, selections: Vec::new() }
    }

    /// Use `language_id` instead of detecting it from the extension.
    #[must_use]
    pub fn with_language(mut self, language_id: Option<String>) -> Self {
        self.language_id = language_id;
        self
    }

    #[must_use]
    pub fn with_selections(mut self, selections: Vec<TextRange>) -> Self {
        self.selections = selections;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn language_id(&self) -> String {
        self.language_id.clone().unwrap_or_else(|| {
            language_id_for_extension(self.path.extension().and_then(|ext| ext.to_str()))
        })
    }
}

impl ActiveEditor for FileEditor {
    fn snapshot(&self) -> Result<Option<EditorSnapshot>> {
        let Some(text) = FileReader::read_text(&self.path)? else {
            debug!("{} does not exist", self.path.display());
            return Ok(None);
        };
        Ok(Some(EditorSnapshot::new(self.language_id(), text).with_selections(self.selections.clone())))
    }
}

/// An editor whose content was captured once, e.g. from standard input.
#[derive(Debug, Clone)]
pub struct BufferedEditor {
    snapshot: EditorSnapshot,
}

impl BufferedEditor {
    pub fn new(snapshot: EditorSnapshot) -> Self {
        Self { snapshot }
    }
}

impl ActiveEditor for BufferedEditor {
    fn snapshot(&self) -> Result<Option<EditorSnapshot>> {
        Ok(Some(self.snapshot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn detects_language_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chapter1.md");
        fs::write(&path, "第一章").unwrap();

        let snapshot = FileEditor::new(&path).snapshot().unwrap().expect("file exists");
        assert_eq!(snapshot.language_id, "markdown");
        assert_eq!(snapshot.text, "第一章");
        assert!(snapshot.selections.is_empty());
    }

    #[test]
    fn language_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.yaml");
        fs::write(&path, "a: b").unwrap();

        let editor = FileEditor::new(&path).with_language(Some("plaintext".into()));
        assert_eq!(editor.snapshot().unwrap().unwrap().language_id, "plaintext");
    }

    #[test]
    fn rereads_file_on_every_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        fs::write(&path, "一").unwrap();
        let editor = FileEditor::new(&path).with_selections(vec![TextRange::new(0, 1)]);

        assert_eq!(editor.snapshot().unwrap().unwrap().text, "一");
        fs::write(&path, "一二").unwrap();
        let snapshot = editor.snapshot().unwrap().unwrap();
        assert_eq!(snapshot.text, "一二");
        assert_eq!(snapshot.selections, vec![TextRange::new(0, 1)]);
    }

    #[test]
    fn missing_file_is_no_editor() {
        let dir = tempfile::tempdir().unwrap();
        let editor = FileEditor::new(dir.path().join("gone.txt"));
        assert!(editor.snapshot().unwrap().is_none());
    }

    #[test]
    fn buffered_editor_returns_its_snapshot() {
        let editor = BufferedEditor::new(EditorSnapshot::new("plaintext", "本文"));
        assert_eq!(editor.snapshot().unwrap().unwrap().text, "本文");
    }
}
