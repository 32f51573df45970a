//! The per-iteration work the job loop drives, treated as opaque by the loop.

pub mod error;
pub mod funding;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;

pub use error::WorkloadError;
pub use funding::{FundingPolicy, SpamKind, Wei};
pub use http::HttpWorkload;

/// Operations the job loop invokes.
///
/// `setup` runs once per run; `fund` and `work` run once per iteration, in
/// that order.
pub trait Workload: Send + Sync + 'static {
    fn setup(&self) -> impl Future<Output = Result<(), WorkloadError>> + Send;

    fn fund(&self, amount: Wei) -> impl Future<Output = Result<(), WorkloadError>> + Send;

    fn work(&self) -> impl Future<Output = Result<(), WorkloadError>> + Send;
}
