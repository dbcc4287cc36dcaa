// crates/infra/src/settings.rs
use std::path::{Path, PathBuf};

use log::debug;
use novel_count_domain::{CountUnit, OffsetEncoding};
use novel_count_ports::settings::{CountSettings, SettingsSource};
use novel_count_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// 設定ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl SettingsFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn parse(self, text: &str) -> Result<CountSettings> {
        if text.trim().is_empty() {
            return Ok(CountSettings::default());
        }
        let settings = match self {
            Self::Json => serde_json::from_str(text)?,
            #[cfg(feature = "yaml")]
            Self::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(settings)
    }
}

/// Settings stored in a JSON or YAML file, re-read on every [`SettingsSource::load`].
///
/// No path, or a path that does not exist, yields the defaults.
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    path: Option<PathBuf>,
}

impl SettingsFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SettingsSource for SettingsFile {
    fn load(&self) -> Result<CountSettings> {
        let Some(path) = &self.path else {
            return Ok(CountSettings::default());
        };
        let format = SettingsFormat::from_path(path)
            .ok_or_else(|| InfrastructureError::UnsupportedSettingsFormat { path: path.clone() })?;
        let Some(text) = FileReader::read_text(path)? else {
            debug!("settings file {} not found; using defaults", path.display());
            return Ok(CountSettings::default());
        };
        format.parse(&text)
    }
}

/// Values given on the command line; each one replaces the loaded setting when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub additional_language: Option<String>,
    pub count_unit: Option<CountUnit>,
    pub offset_encoding: Option<OffsetEncoding>,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: CountSettings) -> CountSettings {
        if let Some(language) = &self.additional_language {
            settings.additional_language = Some(language.clone());
        }
        if let Some(unit) = self.count_unit {
            settings.count_unit = unit;
        }
        if let Some(encoding) = self.offset_encoding {
            settings.offset_encoding = encoding;
        }
        settings
    }
}

/// A settings source with command-line overrides layered on top.
#[derive(Debug, Clone, Default)]
pub struct LayeredSettings<S> {
    base: S,
    overrides: SettingsOverrides,
}

impl<S: SettingsSource> LayeredSettings<S> {
    pub fn new(base: S, overrides: SettingsOverrides) -> Self {
        Self { base, overrides }
    }
}

impl<S: SettingsSource> SettingsSource for LayeredSettings<S> {
    fn load(&self) -> Result<CountSettings> {
        self.base.load().map(|settings| self.overrides.apply(settings))
    }
}
