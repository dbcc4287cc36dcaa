// crates/ports/src/settings.rs
use novel_count_domain::{CountUnit, OffsetEncoding};
use novel_count_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// User-facing configuration. Every field is optional in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountSettings {
    /// 追加でカウント対象にする言語 ID
    pub additional_language: Option<String>,
    pub count_unit: CountUnit,
    pub offset_encoding: OffsetEncoding,
}

/// Port for loading settings; called once per count so edits apply on the next event.
pub trait SettingsSource: Send + Sync {
    fn load(&self) -> Result<CountSettings>;
}
