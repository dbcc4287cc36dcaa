// src/config.rs
use std::{path::PathBuf, time::Duration};

use log::LevelFilter;
use novel_count_infra::{settings::SettingsOverrides, status::StatusFormat};
use novel_count_shared_kernel::TextRange;

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    Stdin,
    File(PathBuf),
}

/// Fully resolved run configuration, built from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: DocumentInput,
    pub selections: Vec<TextRange>,
    /// Language ID override; detected from the file extension when `None`.
    pub language: Option<String>,
    pub settings_path: Option<PathBuf>,
    pub overrides: SettingsOverrides,
    pub format: StatusFormat,
    pub watch: bool,
    pub watch_interval: Duration,
    pub log_level: LevelFilter,
}

impl Config {
    /// Files whose modification should trigger a recount in watch mode.
    pub fn watched_files(&self) -> Vec<PathBuf> {
        let document = match &self.input {
            DocumentInput::File(path) => Some(path.clone()),
            DocumentInput::Stdin => None,
        };
        document.into_iter().chain(self.settings_path.clone()).collect()
    }
}
