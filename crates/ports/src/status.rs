// crates/ports/src/status.rs
use std::fmt;

use novel_count_shared_kernel::{CharCount, Result};
use serde::Serialize;

/// What the status indicator shows for a counted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub language_id: String,
    pub document: CharCount,
    /// Sum over non-empty selections; `None` when nothing is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<CharCount>,
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selection {
            Some(selected) => write!(f, "✎ {selected} / {} 文字", self.document),
            None => write!(f, "✎ {} 文字", self.document),
        }
    }
}

/// Port for the status indicator.
pub trait StatusSink: Send + Sync {
    fn show(&self, view: &StatusView) -> Result<()>;
    fn hide(&self) -> Result<()>;
}
