use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches an appearance file for changes and sends a notification on every
/// write, so a running bar can re-load and re-distribute its configuration.
///
/// # Example
/// ```no_run
/// # use tabstrip_appearance::AppearanceWatcher;
/// # async fn example() {
/// let (_watcher, mut rx) = AppearanceWatcher::spawn("/home/user/.config/tabstrip/appearance.toml");
/// while rx.recv().await.is_some() {
///     println!("appearance changed — reloading");
/// }
/// # }
/// ```
pub struct AppearanceWatcher {
    path: PathBuf,
}

impl AppearanceWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<notify::Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", path.display());
        return;
    }

    info!("Watching appearance file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if e.kind.is_modify() || e.kind.is_create() => {
                if tx.send(()).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
