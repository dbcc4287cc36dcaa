// crates/usecase/src/dto.rs
use std::fmt;

use novel_count_ports::status::StatusView;

/// Why the status indicator was hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HideReason {
    NoActiveEditor,
    LanguageNotCounted(String),
}

impl fmt::Display for HideReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveEditor => f.write_str("no active editor"),
            Self::LanguageNotCounted(id) => write!(f, "language '{id}' is not counted"),
        }
    }
}

/// Result of one status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Shown(StatusView),
    Hidden(HideReason),
}

impl StatusOutcome {
    pub const fn view(&self) -> Option<&StatusView> {
        match self {
            Self::Shown(view) => Some(view),
            Self::Hidden(_) => None,
        }
    }
}
