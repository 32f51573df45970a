use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tokio::task::{JoinError, JoinHandle};

use super::cancel::CancellationToken;
use super::run::{RunReport, new_run_id};
use crate::error::{JobError, SlotError};

/// The run currently owning the slot.
#[derive(Debug)]
struct ActiveRun {
    run_id: String,
    started_at: DateTime<Utc>,
    token: CancellationToken,
}

/// Handle to a spawned job loop.
///
/// Dropping it detaches the loop; it keeps running until its token is closed
/// or a step fails.
#[derive(Debug)]
pub struct RunHandle {
    run_id: String,
    join: JoinHandle<Result<RunReport, JobError>>,
}

impl RunHandle {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Wait for the loop's terminal result.
    pub async fn join(self) -> Result<Result<RunReport, JobError>, JoinError> {
        self.join.await
    }
}

/// Exclusive ownership of the single background job.
///
/// Start and stop transitions happen under one mutex, which is never held
/// across an `.await` or for the lifetime of the loop.
#[derive(Debug, Default)]
pub struct JobSlot {
    active: Mutex<Option<ActiveRun>>,
    launches: AtomicU64,
}

impl JobSlot {
    pub fn new() -> Self {
        Self::default()
    }

    // The guarded value is a plain Option, so a poisoned lock still holds a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, Option<ActiveRun>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Launch a job loop if none is active.
    ///
    /// `job` receives a fresh cancellation token and run id and returns the
    /// loop future, which is spawned onto the tokio runtime. Returns without
    /// waiting for the loop. Must be called from within a tokio runtime.
    pub fn try_start<F, Fut>(&self, job: F) -> Result<RunHandle, SlotError>
    where
        F: FnOnce(CancellationToken, String) -> Fut,
        Fut: Future<Output = Result<RunReport, JobError>> + Send + 'static,
    {
        let mut active = self.lock();
        if let Some(run) = active.as_ref() {
            tracing::info!(run_id = %run.run_id, "start rejected, job already running");
            return Err(SlotError::AlreadyRunning);
        }

        let token = CancellationToken::new();
        let run_id = new_run_id();
        let run = job(token.clone(), run_id.clone());
        let launch = self.launches.fetch_add(1, Ordering::SeqCst) + 1;

        let task_run_id = run_id.clone();
        let join = tokio::spawn(async move {
            let result = run.await;
            match &result {
                Ok(report) => tracing::info!(
                    run_id = %report.run_id,
                    iterations = report.iterations,
                    duration_ms = report.duration_ms,
                    "job loop finished"
                ),
                Err(e) => tracing::error!(
                    run_id = %task_run_id,
                    iteration = ?e.iteration(),
                    "Error running spam: {e}"
                ),
            }
            result
        });

        tracing::info!(%run_id, launch, "job started");
        *active = Some(ActiveRun {
            run_id: run_id.clone(),
            started_at: Utc::now(),
            token,
        });

        Ok(RunHandle { run_id, join })
    }

    /// Signal the active loop to stop and release the slot.
    ///
    /// The slot is free as soon as this returns; the loop itself exits at its
    /// next iteration boundary.
    pub fn try_stop(&self) -> Result<(), SlotError> {
        let mut active = self.lock();
        let Some(run) = active.take() else {
            tracing::info!("stop rejected, no job running");
            return Err(SlotError::NotRunning);
        };

        let delivered = run.token.close();
        let uptime_ms = (Utc::now() - run.started_at).num_milliseconds();
        tracing::info!(run_id = %run.run_id, uptime_ms, delivered, "job stopped");
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.lock().is_some()
    }

    pub fn current_run_id(&self) -> Option<String> {
        self.lock().as_ref().map(|run| run.run_id.clone())
    }

    /// Number of loops launched over the slot's lifetime.
    pub fn launches(&self) -> u64 {
        self.launches.load(Ordering::SeqCst)
    }
}
