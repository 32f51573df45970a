use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use super::Workload;
use super::error::WorkloadError;
use super::funding::{SpamKind, Wei};
use super::types::{CreateRequest, FundRequest, SetupRequest, WorkRequest};

/// Workload that delegates every step to an external worker over HTTP.
pub struct HttpWorkload {
    client: Client,
    base_url: String,
    kind: SpamKind,
}

impl HttpWorkload {
    pub fn new(base_url: impl Into<String>, kind: SpamKind) -> Result<Self, WorkloadError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            kind,
        })
    }

    pub fn kind(&self) -> SpamKind {
        self.kind
    }

    /// Ask the worker to generate `count` ephemeral accounts.
    ///
    /// One-shot utility; not part of the job loop.
    pub async fn create(&self, count: u64) -> Result<(), WorkloadError> {
        self.post("create", &CreateRequest { count }).await
    }

    async fn post<T: Serialize + Sync>(&self, endpoint: &str, body: &T) -> Result<(), WorkloadError> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, "calling worker");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(WorkloadError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

impl Workload for HttpWorkload {
    async fn setup(&self) -> Result<(), WorkloadError> {
        self.post("setup", &SetupRequest::default()).await
    }

    async fn fund(&self, amount: Wei) -> Result<(), WorkloadError> {
        self.post("fund", &FundRequest::new(amount)).await
    }

    async fn work(&self) -> Result<(), WorkloadError> {
        self.post("work", &WorkRequest { kind: self.kind }).await
    }
}
