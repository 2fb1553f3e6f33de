// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod state;
mod surface;

use std::sync::Arc;

use tauri::webview::PageLoadEvent;
use tauri::Manager;
use tracing::{info, warn};

use clock::{update_year, SystemClock, YearWatcher};

use crate::state::{AppState, ROLLOVER_POLL_INTERVAL};
use crate::surface::WebviewTarget;

fn main() {
    tracing_subscriber::fmt::init();

    tauri::Builder::default()
        .manage(AppState::default())
        .on_page_load(|webview, payload| {
            // The document is only safe to touch once parsing has finished
            if payload.event() != PageLoadEvent::Finished {
                return;
            }

            let target = WebviewTarget::new(webview.clone());
            match update_year(&SystemClock, &target) {
                Ok(year) => info!(year, "footer year applied"),
                Err(err) => warn!(%err, "failed to apply footer year"),
            }

            // One watcher for the lifetime of the app, surviving page reloads
            let app_state = webview.state::<AppState>();
            let mut watcher = app_state.watcher.lock().unwrap();
            if watcher.is_none() {
                let rollover_target = WebviewTarget::new(webview.clone());

                let mut w = YearWatcher::new();
                w.start(
                    Arc::new(SystemClock),
                    ROLLOVER_POLL_INTERVAL,
                    move |rollover| {
                        info!(
                            previous = rollover.previous,
                            current = rollover.current,
                            "calendar year rolled over"
                        );
                        if let Err(err) = update_year(&SystemClock, &rollover_target) {
                            warn!(%err, "failed to refresh footer year");
                        }
                    },
                );
                *watcher = Some(w);
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
