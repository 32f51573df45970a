//! Start/stop endpoints for the single spam job.
//!
//! - POST /spam/start — launch the job loop, 409 if one is active
//! - POST /spam/stop — signal the active loop, 400 if none is active

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::routing::post;

use super::error::ApiResult;
use super::state::AppState;
use crate::job::run_job;
use crate::workload::Workload;

/// POST /spam/start
///
/// Returns as soon as the loop is spawned. Failures inside the loop are
/// logged, not reported here.
pub async fn start_spam<W: Workload>(State(state): State<Arc<AppState<W>>>) -> ApiResult<&'static str> {
    let workload = Arc::clone(&state.workload);
    let config = state.job.clone();

    state.slot.try_start(move |token, run_id| async move {
        run_job(&*workload, &config, &token, run_id).await
    })?;

    Ok("Spam started")
}

/// POST /spam/stop
pub async fn stop_spam<W: Workload>(State(state): State<Arc<AppState<W>>>) -> ApiResult<&'static str> {
    state.slot.try_stop()?;
    Ok("Spam stopped")
}

/// Build the spam control router.
pub fn router<W: Workload>() -> Router<Arc<AppState<W>>> {
    Router::new()
        .route("/spam/start", post(start_spam::<W>))
        .route("/spam/stop", post(stop_spam::<W>))
}
