// crates/infra/src/status.rs
use std::{
    io::{self, Write},
    sync::Mutex,
};

use novel_count_ports::status::{StatusSink, StatusView};
use novel_count_shared_kernel::{InfrastructureError, Result};
use serde::Serialize;

/// 表示形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFormat {
    /// `✎ 35 / 1200 文字`
    #[default]
    Status,
    /// Bare numbers: `1200`, or `35 1200` with a selection.
    Plain,
    /// One JSON object per update.
    Json,
}

#[derive(Serialize)]
struct JsonStatus<'a> {
    visible: bool,
    #[serde(flatten)]
    view: Option<&'a StatusView>,
}

/// Writes one line per status update, flushing after each.
///
/// Hiding writes an empty line (or `{"visible":false}` as JSON) so that a
/// consumer following the stream sees the indicator disappear.
pub struct ConsoleStatus<W: Write + Send> {
    writer: Mutex<W>,
    format: StatusFormat,
}

impl ConsoleStatus<io::Stdout> {
    pub fn stdout(format: StatusFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write + Send> ConsoleStatus<W> {
    pub fn new(writer: W, format: StatusFormat) -> Self {
        Self { writer: Mutex::new(writer), format }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn render(&self, view: Option<&StatusView>) -> Result<String> {
        let line = match (self.format, view) {
            (StatusFormat::Status, Some(view)) => view.to_string(),
            (StatusFormat::Plain, Some(view)) => match view.selection {
                Some(selected) => format!("{selected} {}", view.document),
                None => view.document.to_string(),
            },
            (StatusFormat::Status | StatusFormat::Plain, None) => String::new(),
            (StatusFormat::Json, view) => serde_json::to_string(&JsonStatus { visible: view.is_some(), view })?,
        };
        Ok(line)
    }

    fn emit(&self, line: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| InfrastructureError::OutputError { message: "status writer poisoned".to_string(), source: None })?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> StatusSink for ConsoleStatus<W> {
    fn show(&self, view: &StatusView) -> Result<()> {
        let line = self.render(Some(view))?;
        self.emit(&line)
    }

    fn hide(&self) -> Result<()> {
        let line = self.render(None)?;
        self.emit(&line)
    }
}
