//! Countdown Runner - Background thread that recomputes the countdown at regular intervals

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::model::Profile;
use crate::tick::{compute_tick, TickReport};

/// Nominal tick period
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns the single active countdown timer.
///
/// Starting a new countdown always cancels the previous one first, and
/// `stop` only returns once the tick thread has exited.
pub struct CountdownRunner {
    is_running: Arc<AtomicBool>,
    stop_signal: Option<Sender<()>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl CountdownRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            stop_signal: None,
            thread_handle: None,
        }
    }

    /// Start ticking for `profile`, replacing any countdown already running
    ///
    /// # Arguments
    /// * `profile` - Profile snapshot, read-only for the lifetime of this timer
    /// * `clock` - Source of "now", queried once per tick
    /// * `interval` - Time between ticks (1s in normal use)
    /// * `callback` - Receives each tick's report; the first one fires immediately
    pub fn start<F>(
        &mut self,
        profile: Arc<Profile>,
        clock: Arc<dyn Clock>,
        interval: Duration,
        callback: F,
    ) where
        F: Fn(TickReport) + Send + 'static,
    {
        if self.thread_handle.is_some() {
            debug!("Cancelling active countdown before re-arming");
            self.stop();
        }

        info!("Starting countdown runner ({}ms intervals)", interval.as_millis());
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        self.is_running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            let running = RunningFlag(running);
            while running.0.load(Ordering::SeqCst) {
                let report = compute_tick(clock.now(), &profile);
                callback(report);

                // Wakes early on stop or when the runner is dropped
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("Countdown runner thread stopped");
        });

        self.stop_signal = Some(stop_tx);
        self.thread_handle = Some(handle);
    }

    /// Stop ticking and wait for the tick thread to exit
    pub fn stop(&mut self) {
        let Some(handle) = self.thread_handle.take() else {
            return;
        };

        info!("Stopping countdown runner...");
        self.is_running.store(false, Ordering::SeqCst);
        if let Some(stop_tx) = self.stop_signal.take() {
            // Err means the thread already left its loop
            let _ = stop_tx.send(());
        }

        if handle.join().is_err() {
            warn!("Countdown runner thread panicked");
        }
    }

    /// Check if a countdown is currently running. Turns false as soon as the
    /// tick thread exits, including when the callback panics.
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::SeqCst)
    }
}

/// Clears the running flag when the tick thread exits, even by unwinding
struct RunningFlag(Arc<AtomicBool>);

impl Drop for RunningFlag {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for CountdownRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountdownRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
