use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::cancel::CancellationToken;
use crate::error::JobError;
use crate::workload::{FundingPolicy, Workload};

/// Phases a run moves through: SETUP → RUNNING → STOPPED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    Setup,
    Running,
    Stopped,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Setup => write!(f, "SETUP"),
            RunPhase::Running => write!(f, "RUNNING"),
            RunPhase::Stopped => write!(f, "STOPPED"),
        }
    }
}

/// Parameters for a single job loop run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Wait between the end of one iteration and the next cancellation check.
    pub pacing: Duration,
    pub funding: FundingPolicy,
}

/// Summary produced when a run stops cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub phase: RunPhase,
    pub iterations: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl RunReport {
    pub(crate) fn finish(run_id: String, iterations: u64, started_at: DateTime<Utc>) -> Self {
        let finished_at = Utc::now();
        Self {
            run_id,
            phase: RunPhase::Stopped,
            iterations,
            started_at,
            finished_at,
            duration_ms: (finished_at - started_at).num_milliseconds(),
        }
    }
}

pub fn new_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Run the job loop until `token` is closed or a step fails.
///
/// Cancellation is only checked at iteration boundaries: an iteration that
/// has started always runs its funding and work steps to completion (or
/// failure) and then paces before the next check.
pub async fn run_job<W: Workload>(
    workload: &W,
    config: &JobConfig,
    token: &CancellationToken,
    run_id: String,
) -> Result<RunReport, JobError> {
    let started_at = Utc::now();

    tracing::info!(%run_id, phase = %RunPhase::Setup, "preparing accounts");
    workload.setup().await.map_err(JobError::Setup)?;

    tracing::info!(
        %run_id,
        phase = %RunPhase::Running,
        pacing = ?config.pacing,
        "entering iteration loop"
    );

    let mut completed: u64 = 0;
    loop {
        if token.is_closed() {
            tracing::info!(%run_id, iterations = completed, "spam process stopped");
            return Ok(RunReport::finish(run_id, completed, started_at));
        }

        let iteration = completed + 1;
        let amount = config.funding.amount_for(iteration);
        tracing::debug!(%run_id, iteration, amount_wei = %amount, "funding accounts");
        workload
            .fund(amount)
            .await
            .map_err(|source| JobError::Funding { iteration, source })?;

        tracing::debug!(%run_id, iteration, "sending transactions");
        workload
            .work()
            .await
            .map_err(|source| JobError::Work { iteration, source })?;

        completed = iteration;
        tokio::time::sleep(config.pacing).await;
    }
}
