//! HTTP control surface for the job slot.

pub mod error;
pub mod health;
pub mod spam;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use crate::workload::Workload;

/// Assemble the full control router.
pub fn router<W: Workload>(state: Arc<AppState<W>>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(spam::router::<W>())
        .with_state(state)
}

/// Serve the control surface until `shutdown` resolves.
///
/// Any job still holding the slot at shutdown is signalled to stop.
pub async fn serve<W, F>(listener: TcpListener, state: Arc<AppState<W>>, shutdown: F) -> std::io::Result<()>
where
    W: Workload,
    F: Future<Output = ()> + Send + 'static,
{
    let slot = Arc::clone(&state.slot);
    let app = router(state);

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Starting server");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("shutdown requested");
            if slot.try_stop().is_ok() {
                tracing::info!("stopped active job before exit");
            }
        })
        .await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::job::JobConfig;
    use crate::workload::testing::MockWorkload;
    use crate::workload::{FundingPolicy, SpamKind};

    fn state() -> Arc<AppState<MockWorkload>> {
        Arc::new(AppState::new(
            MockWorkload::new(),
            JobConfig {
                pacing: Duration::from_millis(20),
                funding: FundingPolicy::new(1, SpamKind::Basic),
            },
        ))
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn start_stop_sequence() {
        let state = state();
        let app = router(Arc::clone(&state));

        let (status, body) = send(&app, "POST", "/spam/start").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Spam started");
        assert!(state.slot.is_active());

        let (status, body) = send(&app, "POST", "/spam/start").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, "Spam already running");
        assert_eq!(state.slot.launches(), 1);

        let (status, body) = send(&app, "POST", "/spam/stop").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Spam stopped");
        assert!(!state.slot.is_active());

        let (status, body) = send(&app, "POST", "/spam/stop").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "No spam running");
    }

    #[tokio::test(start_paused = true)]
    async fn health_ignores_job_state() {
        let state = state();
        let app = router(Arc::clone(&state));

        let (status, body) = send(&app, "GET", "/health").await;
        assert_eq!((status, body.as_str()), (StatusCode::OK, "Healthy"));

        send(&app, "POST", "/spam/start").await;
        let (status, body) = send(&app, "GET", "/health").await;
        assert_eq!((status, body.as_str()), (StatusCode::OK, "Healthy"));

        send(&app, "POST", "/spam/stop").await;
    }

    #[tokio::test(start_paused = true)]
    async fn start_requires_post() {
        let app = router(state());
        let (status, _) = send(&app, "GET", "/spam/start").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test(start_paused = true)]
    async fn started_job_drives_workload() {
        let state = state();
        let app = router(Arc::clone(&state));

        send(&app, "POST", "/spam/start").await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        send(&app, "POST", "/spam/stop").await;

        assert_eq!(state.workload.setups(), 1);
        assert!(state.workload.works() >= 1);
    }

    #[tokio::test]
    async fn serves_over_tcp_and_stops_job_on_shutdown() {
        let state = state();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(serve(listener, Arc::clone(&state), async move {
            let _ = shutdown_rx.await;
        }));

        let client = reqwest::Client::new();
        let response = client
            .post(format!("http://{addr}/spam/start"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "Spam started");

        let response = client
            .get(format!("http://{addr}/health"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert!(state.slot.is_active());

        // Release pooled keep-alive connections so graceful shutdown can finish.
        drop(client);
        shutdown_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
        assert!(!state.slot.is_active());
    }
}
