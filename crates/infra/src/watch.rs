use std::{
    collections::BTreeSet,
    ffi::OsString,
    path::{Path, PathBuf},
    time::Duration,
};

#[cfg(not(feature = "watch"))]
use novel_count_shared_kernel::InfrastructureError;
use novel_count_shared_kernel::Result;

#[cfg(feature = "watch")]
use {
    log::{debug, warn},
    notify::{RecommendedWatcher, RecursiveMode, Watcher, event::EventKind},
    novel_count_shared_kernel::{InfrastructureError, NovelCountError},
    std::{sync::mpsc, thread, time::Instant},
};

/// Files whose changes should trigger a recount.
///
/// Editors often save by writing a temporary file and renaming it over the
/// original, which drops a watch placed on the file itself, so the parent
/// directories are watched and events are filtered by file name.
#[derive(Debug, Clone, Default)]
pub struct WatchTargets {
    dirs: BTreeSet<PathBuf>,
    names: BTreeSet<OsString>,
}

impl WatchTargets {
    pub fn new<'a>(files: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut targets = Self::default();
        for file in files {
            let Some(name) = file.file_name() else { continue };
            let dir = match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            targets.dirs.insert(dir);
            targets.names.insert(name.to_os_string());
        }
        targets
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether an event touching `paths` concerns one of the watched files.
    pub fn matches<P: AsRef<Path>>(&self, paths: &[P]) -> bool {
        paths
            .iter()
            .filter_map(|path| path.as_ref().file_name())
            .any(|name| self.names.contains(name))
    }
}

#[cfg(feature = "watch")]
pub struct WatchService;

#[cfg(feature = "watch")]
impl WatchService {
    /// Run the watch service: try to use filesystem notifications and fall back to polling.
    ///
    /// `on_change` runs once up front and then after each burst of relevant
    /// events, `interval` after the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if the provided `on_change` callback returns an error.
    pub fn run<F>(targets: &WatchTargets, interval: Duration, mut on_change: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        on_change()?;
        match Self::watch_with_notify(targets, interval, &mut on_change) {
            Ok(()) => Ok(()),
            Err(err @ NovelCountError::Infrastructure(InfrastructureError::Watch { .. })) => {
                warn!("file watcher unavailable ({err}). Falling back to polling every {interval:?}.");
                Self::poll_loop(interval, &mut on_change)
            }
            Err(err) => Err(err),
        }
    }

    fn watch_with_notify<F>(targets: &WatchTargets, interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let (watcher, rx) = Self::create_watcher(targets)?;
        // Keep `watcher` alive in this scope so it continues watching.
        let _keep = &watcher;
        Self::event_loop(targets, &rx, interval, on_change)
    }

    fn create_watcher(
        targets: &WatchTargets,
    ) -> std::result::Result<
        (RecommendedWatcher, mpsc::Receiver<std::result::Result<notify::Event, notify::Error>>),
        InfrastructureError,
    > {
        let (tx, rx) = mpsc::channel();
        let mut watcher: RecommendedWatcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .map_err(watch_error)?;

        for dir in targets.dirs() {
            debug!("watching {}", dir.display());
            watcher.watch(dir, RecursiveMode::NonRecursive).map_err(watch_error)?;
        }

        Ok((watcher, rx))
    }

    fn event_loop<F>(
        targets: &WatchTargets,
        rx: &mpsc::Receiver<std::result::Result<notify::Event, notify::Error>>,
        interval: Duration,
        on_change: &mut F,
    ) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        let mut pending: Option<Instant> = None;

        loop {
            let received = match pending {
                Some(since) => {
                    let remaining = interval.checked_sub(since.elapsed()).unwrap_or_default();
                    rx.recv_timeout(remaining)
                }
                None => rx.recv().map_err(|_| mpsc::RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(Ok(event)) => {
                    if Self::is_relevant(event.kind) && targets.matches(&event.paths) {
                        pending = Some(Instant::now());
                    }
                }
                Ok(Err(err)) => warn!("watcher error: {err}"),
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    pending = None;
                    on_change()?;
                }
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    warn!("watcher channel closed; polling every {interval:?}");
                    return Self::poll_loop(interval, on_change);
                }
            }
        }
    }

    fn poll_loop<F>(interval: Duration, on_change: &mut F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        loop {
            thread::sleep(interval);
            on_change()?;
        }
    }

    const fn is_relevant(kind: EventKind) -> bool {
        matches!(
            kind,
            EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Other
        )
    }
}

#[cfg(feature = "watch")]
fn watch_error(err: notify::Error) -> InfrastructureError {
    InfrastructureError::Watch { message: err.to_string(), source: Some(Box::new(err)) }
}

#[cfg(not(feature = "watch"))]
pub struct WatchService;

#[cfg(not(feature = "watch"))]
impl WatchService {
    pub fn run<F>(_targets: &WatchTargets, _interval: Duration, _on_change: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        Err(InfrastructureError::Watch { message: "watch feature disabled at compile time".to_string(), source: None }
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watches_parent_directories_once() {
        let targets = WatchTargets::new([Path::new("drafts/ch1.md"), Path::new("drafts/novel_count.json")]);
        assert_eq!(targets.dirs().collect::<Vec<_>>(), vec![Path::new("drafts")]);
        assert!(!targets.is_empty());
    }

    #[test]
    fn bare_file_name_watches_current_dir() {
        let targets = WatchTargets::new([Path::new("ch1.md")]);
        assert_eq!(targets.dirs().collect::<Vec<_>>(), vec![Path::new(".")]);
    }

    #[test]
    fn matches_by_file_name() {
        let targets = WatchTargets::new([Path::new("/work/ch1.md")]);
        assert!(targets.matches(&[PathBuf::from("/work/ch1.md")]));
        assert!(!targets.matches(&[PathBuf::from("/work/.ch1.md.swp")]));
        assert!(!targets.matches::<PathBuf>(&[]));
    }
}
