//! Background jobs with progress polling and cooperative cancellation.
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread::JoinHandle;

use anyhow::{Context, Result, anyhow};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Handed to a job to publish its progress and check for cancellation.
#[derive(Clone, Debug)]
pub struct ProgressReporter {
    progress: Arc<watch::Sender<u8>>,
    abort: Arc<AtomicBool>,
}

impl ProgressReporter {
    /// Publishes `percent`, clamped to 100. Only the latest value is kept.
    ///
    /// Returns `false` once the job was cancelled.
    pub fn report(&self, percent: u8) -> bool {
        self.progress.send_replace(percent.min(100));
        !self.is_aborted()
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum WorkOutcome<T> {
    Completed(T),
    Cancelled,
}

pub struct WorkerHandle<T> {
    name: String,
    thread: JoinHandle<Result<T>>,
    progress: watch::Receiver<u8>,
    abort: Arc<AtomicBool>,
}

impl<T> WorkerHandle<T> {
    /// The latest reported percentage.
    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// The latest percentage if it changed since the last call.
    pub fn take_progress(&mut self) -> Option<u8> {
        match self.progress.has_changed() {
            Ok(true) => Some(*self.progress.borrow_and_update()),
            _ => None,
        }
    }

    /// Asks the job to stop, it has to poll [`ProgressReporter::is_aborted`].
    pub fn cancel(&self) {
        debug!("cancelling worker {}", self.name);
        self.abort.store(true, Ordering::Relaxed);
    }
    pub fn is_cancelled(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the job. A cancelled job yields [`WorkOutcome::Cancelled`] whatever it returned.
    pub fn join(self) -> Result<WorkOutcome<T>> {
        let result = self
            .thread
            .join()
            .map_err(|_| anyhow!("worker {} panicked", self.name))?;
        if self.abort.load(Ordering::Relaxed) {
            if let Err(err) = &result {
                warn!("cancelled worker {} failed: {err:#}", self.name);
            }
            return Ok(WorkOutcome::Cancelled);
        }
        let value = result.with_context(|| format!("worker {} failed", self.name))?;
        Ok(WorkOutcome::Completed(value))
    }
}

/// Runs `job` on a new named thread.
pub fn spawn<T, F>(name: &str, job: F) -> Result<WorkerHandle<T>>
where
    T: Send + 'static,
    F: FnOnce(&ProgressReporter) -> Result<T> + Send + 'static,
{
    let (sender, receiver) = watch::channel(0);
    let abort = Arc::new(AtomicBool::new(false));
    let reporter = ProgressReporter {
        progress: Arc::new(sender),
        abort: abort.clone(),
    };

    let thread = std::thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let result = job(&reporter);
            if result.is_ok() && !reporter.is_aborted() {
                reporter.report(100);
            }
            result
        })
        .with_context(|| format!("failed to spawn worker {name}"))?;
    debug!("spawned worker {name}");

    Ok(WorkerHandle {
        name: name.to_string(),
        thread,
        progress: receiver,
        abort,
    })
}
