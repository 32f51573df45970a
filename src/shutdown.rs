use std::future::Future;

/// Resolve once the operator presses Ctrl-C.
///
/// If the handler cannot be installed this never resolves, so the process
/// keeps running instead of treating the failure as a stop request.
pub async fn ctrl_c() {
    stop_requested(tokio::signal::ctrl_c()).await
}

/// Wait for `signal`; an error is logged and then waits forever.
pub async fn stop_requested<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("interrupt received"),
        Err(e) => {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
