//! One-shot completion signal between a worker and a blocked caller.
//!
//! The worker owns the only [`Completer`]. Completing consumes it, so an
//! outcome is delivered at most once. If the worker goes away without
//! completing (panic, runtime shutdown) the completer is dropped and the
//! waiter sees [`Wait::Empty`] instead of hanging until the deadline.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::time::Duration;

use crate::auth::outcome::AuthorizationOutcome;

/// What the waiting side observed.
#[derive(Debug)]
pub enum Wait {
    /// Signaled with an outcome present.
    Completed(AuthorizationOutcome),
    /// Signaled without an outcome.
    Empty,
    /// Deadline elapsed first.
    TimedOut,
}

/// Create a fresh signal for one call.
pub fn completion_signal() -> (Completer, Waiter) {
    let (tx, rx) = mpsc::sync_channel(1);
    (Completer { tx }, Waiter { rx })
}

/// Write side, held by the worker.
#[derive(Debug)]
pub struct Completer {
    tx: SyncSender<AuthorizationOutcome>,
}

impl Completer {
    /// Store the outcome and wake the waiter.
    ///
    /// Returns the outcome back if the waiter already gave up.
    pub fn complete(self, outcome: AuthorizationOutcome) -> Result<(), AuthorizationOutcome> {
        // Capacity 1 and a single send: the slot can only be missing a receiver.
        self.tx.try_send(outcome).map_err(|e| match e {
            mpsc::TrySendError::Full(o) | mpsc::TrySendError::Disconnected(o) => o,
        })
    }
}

/// Read side, held by the calling thread.
#[derive(Debug)]
pub struct Waiter {
    rx: Receiver<AuthorizationOutcome>,
}

impl Waiter {
    /// Block until the worker signals or `timeout` elapses.
    pub fn wait(self, timeout: Duration) -> Wait {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Wait::Completed(outcome),
            Err(RecvTimeoutError::Disconnected) => Wait::Empty,
            Err(RecvTimeoutError::Timeout) => Wait::TimedOut,
        }
    }
}
