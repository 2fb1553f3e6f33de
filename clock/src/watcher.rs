//! Year Watcher - background thread that re-checks the clock at regular intervals
//!
//! A long-lived window would otherwise keep showing last year after the
//! midnight rollover on New Year's Eve.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::source::TimeSource;

/// Calendar year change observed between two clock polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollover {
    pub previous: i32,
    pub current: i32,
}

/// Watcher that manages a background thread polling the clock for a year change
pub struct YearWatcher {
    is_running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl YearWatcher {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start polling the clock at the specified interval
    ///
    /// # Arguments
    /// * `clock` - Shared clock to poll
    /// * `poll_interval` - Time between polls (a minute is plenty; the year changes once)
    /// * `on_rollover` - Called once per observed year change
    pub fn start<C, F>(&mut self, clock: Arc<C>, poll_interval: Duration, on_rollover: F)
    where
        C: TimeSource + Send + Sync + 'static,
        F: Fn(Rollover) + Send + 'static,
    {
        // Don't start if already running
        if self.is_running.load(Ordering::Relaxed) {
            warn!("year watcher already running");
            return;
        }

        debug!(?poll_interval, "starting year watcher");
        self.is_running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            let mut last_year = clock.current_year();

            while running.load(Ordering::Relaxed) {
                sleep_while_running(&running, poll_interval);
                if !running.load(Ordering::Relaxed) {
                    break;
                }

                let year = clock.current_year();
                if year != last_year {
                    on_rollover(Rollover {
                        previous: last_year,
                        current: year,
                    });
                    last_year = year;
                }
            }
            debug!("year watcher thread stopped");
        });

        self.thread_handle = Some(handle);
    }

    /// Stop polling
    pub fn stop(&mut self) {
        if !self.is_running.load(Ordering::Relaxed) {
            return;
        }

        debug!("stopping year watcher...");
        self.is_running.store(false, Ordering::Relaxed);

        // Wait for thread to finish
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join(); // Thread panic result intentionally ignored during shutdown
        }
    }

    /// Check if the watcher is currently running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }
}

impl Default for YearWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for YearWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Sleep in short slices so stop() never blocks on a full poll interval.
fn sleep_while_running(running: &AtomicBool, total: Duration) {
    const SLICE: Duration = Duration::from_millis(50);

    let mut remaining = total;
    while !remaining.is_zero() && running.load(Ordering::Relaxed) {
        let step = remaining.min(SLICE);
        thread::sleep(step);
        remaining -= step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, AtomicU32};

    struct SteppingClock {
        year: AtomicI32,
    }

    impl SteppingClock {
        fn starting_at(year: i32) -> Self {
            Self {
                year: AtomicI32::new(year),
            }
        }
    }

    impl TimeSource for SteppingClock {
        fn current_year(&self) -> i32 {
            self.year.load(Ordering::Relaxed)
        }
    }

    #[test]
    fn test_rollover_fires_once_per_year_change() {
        let clock = Arc::new(SteppingClock::starting_at(2024));
        let rollovers = Arc::new(AtomicU32::new(0));
        let rollovers_clone = Arc::clone(&rollovers);

        let mut watcher = YearWatcher::new();
        watcher.start(
            Arc::clone(&clock),
            Duration::from_millis(50),
            move |rollover| {
                assert_eq!(rollover.previous, 2024);
                assert_eq!(rollover.current, 2025);
                rollovers_clone.fetch_add(1, Ordering::Relaxed);
            },
        );

        // Stable clock: no callbacks
        thread::sleep(Duration::from_millis(200));
        assert_eq!(rollovers.load(Ordering::Relaxed), 0);

        // Step the year and give the watcher a few polls to notice
        clock.year.store(2025, Ordering::Relaxed);
        thread::sleep(Duration::from_millis(300));
        watcher.stop();

        assert_eq!(rollovers.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_start_twice_is_a_noop() {
        let clock = Arc::new(SteppingClock::starting_at(2024));

        let mut watcher = YearWatcher::new();
        watcher.start(Arc::clone(&clock), Duration::from_millis(50), |_| {});
        assert!(watcher.is_running());

        // Second start must not replace the running thread
        watcher.start(clock, Duration::from_millis(50), |_| {
            panic!("second callback must never be installed");
        });
        assert!(watcher.is_running());

        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[test]
    fn test_stop_returns_promptly_despite_long_interval() {
        let clock = Arc::new(SteppingClock::starting_at(2024));

        let mut watcher = YearWatcher::new();
        watcher.start(clock, Duration::from_secs(60), |_| {});
        thread::sleep(Duration::from_millis(100));

        let started = std::time::Instant::now();
        watcher.stop();
        assert!(
            started.elapsed() < Duration::from_secs(2),
            "stop() blocked on the poll interval"
        );
    }
}
