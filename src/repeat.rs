//! Repeated invocation over an integer range, eagerly or on a timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::ops::Flow;
use crate::types::{Sequence, Value};

/// Collects the results of invoking the callback for each integer in
/// `0..n`.
pub fn times<F>(n: i64, callback: F) -> Sequence
where
    F: FnMut(i64) -> Value,
{
    times_range(0, n, callback)
}

/// Collects the results of invoking the callback for each integer in
/// `start..end`. An empty range yields an empty sequence.
pub fn times_range<F>(start: i64, end: i64, mut callback: F) -> Sequence
where
    F: FnMut(i64) -> Value,
{
    let mut out = Vec::new();
    for i in start..end {
        out.push(callback(i));
    }
    out
}

/// Handle to a running [`repeat_every`] worker.
///
/// Cancellation is coarse-grained: it stops all remaining invocations, never
/// a single one. An invocation already underway when cancellation is
/// requested still runs to completion.
pub struct Repeater {
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Repeater {
    /// Requests cancellation of all remaining invocations.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Blocks until the worker has finished, whether by running out of
    /// invocations, breaking from the callback, or cancellation.
    pub fn join(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Invokes the callback for each integer in `0..n` on a worker thread,
/// sleeping `every` before each invocation. Ordering between invocations is
/// elapsed-time ordering only. Returning [`Flow::Break`] from the callback
/// cancels all remaining invocations, as does [`Repeater::cancel`].
pub fn repeat_every<F>(n: i64, every: Duration, mut callback: F) -> Repeater
where
    F: FnMut(i64) -> Flow + Send + 'static,
{
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let worker = thread::spawn(move || {
        for i in 0..n {
            thread::sleep(every);

            if flag.load(Ordering::Relaxed) {
                break;
            }

            if let Flow::Break = callback(i) {
                break;
            }
        }
    });

    Repeater { cancel, worker: Some(worker) }
}
