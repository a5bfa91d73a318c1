//! Data Hot Reload (debug builds only)
//!
//! Watches the data directory and swaps a freshly loaded content store into
//! the shared state. Compiled out of release builds.

use std::path::Path;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::{content::ContentStore, AppState};

/// Start watching `dir`. The returned watcher must be kept alive.
pub fn spawn(dir: &Path, state: AppState) -> notify::Result<RecommendedWatcher> {
    let data_dir = dir.to_path_buf();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        match result {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                match ContentStore::load_from(&data_dir) {
                    Ok(store) => {
                        state.replace(store);
                        tracing::info!("content reloaded");
                    }
                    // Mid-edit data can be invalid; keep serving the last good load.
                    Err(err) => tracing::error!("content reload failed: {err}"),
                }
            }
            Ok(_) => {}
            Err(err) => tracing::error!("watch error: {err}"),
        }
    })?;

    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    tracing::info!("watching {} for changes", dir.display());
    Ok(watcher)
}
