use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Wei, Workload, WorkloadError};
use crate::job::CancellationToken;

/// Scriptable in-memory workload that counts every call.
#[derive(Default)]
pub struct MockWorkload {
    pub setup_calls: AtomicU64,
    pub fund_calls: AtomicU64,
    pub work_calls: AtomicU64,
    pub amounts: Mutex<Vec<Wei>>,
    fail_setup: bool,
    fail_fund_at: Option<u64>,
    fail_work_at: Option<u64>,
    close_after: Option<(u64, CancellationToken)>,
}

impl MockWorkload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_setup(mut self) -> Self {
        self.fail_setup = true;
        self
    }

    /// Fail the `n`-th funding call (1-based).
    pub fn failing_fund_at(mut self, n: u64) -> Self {
        self.fail_fund_at = Some(n);
        self
    }

    /// Fail the `n`-th work call (1-based).
    pub fn failing_work_at(mut self, n: u64) -> Self {
        self.fail_work_at = Some(n);
        self
    }

    /// Close `token` from inside the `n`-th work call.
    pub fn closing_after(mut self, n: u64, token: CancellationToken) -> Self {
        self.close_after = Some((n, token));
        self
    }

    pub fn setups(&self) -> u64 {
        self.setup_calls.load(Ordering::SeqCst)
    }

    pub fn funds(&self) -> u64 {
        self.fund_calls.load(Ordering::SeqCst)
    }

    pub fn works(&self) -> u64 {
        self.work_calls.load(Ordering::SeqCst)
    }
}

fn mock_error(step: &str) -> WorkloadError {
    WorkloadError::Status {
        status: 500,
        message: format!("mock {step} failure"),
    }
}

impl Workload for MockWorkload {
    async fn setup(&self) -> Result<(), WorkloadError> {
        self.setup_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_setup {
            return Err(mock_error("setup"));
        }
        Ok(())
    }

    async fn fund(&self, amount: Wei) -> Result<(), WorkloadError> {
        let n = self.fund_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.amounts.lock().unwrap().push(amount);
        if self.fail_fund_at == Some(n) {
            return Err(mock_error("fund"));
        }
        Ok(())
    }

    async fn work(&self) -> Result<(), WorkloadError> {
        let n = self.work_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some((after, token)) = &self.close_after {
            if *after == n {
                token.close();
            }
        }
        if self.fail_work_at == Some(n) {
            return Err(mock_error("work"));
        }
        Ok(())
    }
}
