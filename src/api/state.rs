use std::sync::Arc;

use crate::job::{JobConfig, JobSlot};
use crate::workload::Workload;

/// Shared state handed to every control handler.
pub struct AppState<W> {
    pub slot: Arc<JobSlot>,
    pub workload: Arc<W>,
    pub job: JobConfig,
}

impl<W: Workload> AppState<W> {
    pub fn new(workload: W, job: JobConfig) -> Self {
        Self {
            slot: Arc::new(JobSlot::new()),
            workload: Arc::new(workload),
            job,
        }
    }
}
