use std::sync::Mutex;
use std::time::Duration;

use clock::YearWatcher;

/// How often the rollover watcher re-reads the wall clock. The year changes
/// once per year; a stale footer is visible for at most this long.
pub const ROLLOVER_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Global application state managed by Tauri
#[derive(Default)]
pub struct AppState {
    pub watcher: Mutex<Option<YearWatcher>>,
}
