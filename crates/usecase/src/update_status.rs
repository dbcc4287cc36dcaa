// crates/usecase/src/update_status.rs
use log::{debug, info};
use novel_count_domain::{CharacterCounter, should_count};
use novel_count_ports::{
    editor::{ActiveEditor, EditorSnapshot},
    settings::{CountSettings, SettingsSource},
    status::{StatusSink, StatusView},
};
use novel_count_shared_kernel::{ErrorContext, Result};

use crate::dto::{HideReason, StatusOutcome};

/// エディタの状態が変わるたびに呼ばれ、文字数表示を更新する。
///
/// The use case keeps no state between runs: the document, its selections
/// and the settings are all fetched again on every call.
pub struct UpdateCharacterCount<'a> {
    editor: &'a dyn ActiveEditor,
    settings: &'a dyn SettingsSource,
    sink: &'a dyn StatusSink,
}

impl<'a> UpdateCharacterCount<'a> {
    pub fn new(editor: &'a dyn ActiveEditor, settings: &'a dyn SettingsSource, sink: &'a dyn StatusSink) -> Self {
        Self { editor, settings, sink }
    }

    /// Recount and push the result to the sink.
    ///
    /// # Errors
    ///
    /// Propagates port failures and malformed selection ranges. The sink is
    /// left untouched when an error occurs.
    pub fn run(&self) -> Result<StatusOutcome> {
        let outcome = self.evaluate()?;
        match &outcome {
            StatusOutcome::Shown(view) => {
                debug!("status: {view}");
                self.sink.show(view)?;
            }
            StatusOutcome::Hidden(reason) => {
                info!("status hidden: {reason}");
                self.sink.hide()?;
            }
        }
        Ok(outcome)
    }

    fn evaluate(&self) -> Result<StatusOutcome> {
        let Some(snapshot) = self.editor.snapshot().context("reading active editor")? else {
            return Ok(StatusOutcome::Hidden(HideReason::NoActiveEditor));
        };
        let settings = self.settings.load().context("loading settings")?;

        if !should_count(&snapshot.language_id, settings.additional_language.as_deref()) {
            return Ok(StatusOutcome::Hidden(HideReason::LanguageNotCounted(snapshot.language_id)));
        }

        count_snapshot(snapshot, &settings).map(StatusOutcome::Shown)
    }
}

fn count_snapshot(snapshot: EditorSnapshot, settings: &CountSettings) -> Result<StatusView> {
    let counter = CharacterCounter::new(settings.count_unit, settings.offset_encoding);
    let document = counter.count_document(&snapshot.text);
    let selection = if snapshot.has_selection() {
        let selected = counter
            .count_selections(&snapshot.text, &snapshot.selections)
            .context("counting selections")?;
        Some(selected)
    } else {
        None
    };
    debug!(
        "counted {} chars ({}) in {} selection(s)",
        document,
        settings.count_unit.as_str(),
        snapshot.selections.len()
    );

    Ok(StatusView { language_id: snapshot.language_id, document, selection })
}
