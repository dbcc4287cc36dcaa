// src/app.rs
use std::io;

use anyhow::{Context, Result, bail};
use log::{debug, info, warn};
use novel_count_domain::PLAINTEXT;
use novel_count_infra::{
    editor::{BufferedEditor, FileEditor},
    persistence::FileReader,
    settings::{LayeredSettings, SettingsFile},
    status::ConsoleStatus,
    watch::{WatchService, WatchTargets},
};
use novel_count_ports::editor::{ActiveEditor, EditorSnapshot};
use novel_count_usecase::UpdateCharacterCount;

use crate::{
    cli,
    config::{Config, DocumentInput},
    logging,
};

/// Parse the command line, install logging and count once (or keep watching).
pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    if let Err(err) = logging::init(config.log_level) {
        eprintln!("[warn] {err}");
    }
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<()> {
    debug!("novel_count v{} · {:?}", crate::VERSION, config.input);

    let editor = build_editor(config)?;
    let settings = LayeredSettings::new(SettingsFile::new(config.settings_path.clone()), config.overrides.clone());
    let sink = ConsoleStatus::stdout(config.format);
    let update = UpdateCharacterCount::new(editor.as_ref(), &settings, &sink);

    if !config.watch {
        update.run().context("failed to count characters")?;
        return Ok(());
    }

    let files = config.watched_files();
    let targets = WatchTargets::new(files.iter().map(|path| path.as_path()));
    info!("watching {} file(s) every {:?}", files.len(), config.watch_interval);
    WatchService::run(&targets, config.watch_interval, || {
        // Errors are logged; the watch keeps running.
        if let Err(err) = update.run() {
            warn!("recount failed: {err}");
        }
        Ok(())
    })
    .context("watch mode stopped")
}

fn build_editor(config: &Config) -> Result<Box<dyn ActiveEditor>> {
    let editor: Box<dyn ActiveEditor> = match &config.input {
        DocumentInput::File(path) if !config.watch && !path.exists() => {
            bail!("{} does not exist", path.display());
        }
        DocumentInput::File(path) => Box::new(
            FileEditor::new(path)
                .with_language(config.language.clone())
                .with_selections(config.selections.clone()),
        ),
        DocumentInput::Stdin => {
            let text = FileReader::read_text_from(io::stdin().lock()).context("failed to read standard input")?;
            let language = config.language.clone().unwrap_or_else(|| PLAINTEXT.to_string());
            Box::new(BufferedEditor::new(
                EditorSnapshot::new(language, text).with_selections(config.selections.clone()),
            ))
        }
    };
    Ok(editor)
}
