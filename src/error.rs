use thiserror::Error;

use crate::workload::WorkloadError;

#[derive(Debug, Error)]
pub enum LivefuzzError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a job loop run terminated with a failure.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("setup failed: {0}")]
    Setup(#[source] WorkloadError),

    #[error("funding failed on iteration {iteration}: {source}")]
    Funding {
        iteration: u64,
        #[source]
        source: WorkloadError,
    },

    #[error("work failed on iteration {iteration}: {source}")]
    Work {
        iteration: u64,
        #[source]
        source: WorkloadError,
    },
}

impl JobError {
    /// Iteration the run failed on, or `None` if it never got past setup.
    pub fn iteration(&self) -> Option<u64> {
        match self {
            JobError::Setup(_) => None,
            JobError::Funding { iteration, .. } | JobError::Work { iteration, .. } => {
                Some(*iteration)
            }
        }
    }
}

/// Rejected job slot transitions. Both are expected outcomes, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Spam already running")]
    AlreadyRunning,

    #[error("No spam running")]
    NotRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_down() -> WorkloadError {
        WorkloadError::Status {
            status: 502,
            message: "bad gateway".into(),
        }
    }

    #[test]
    fn slot_error_display() {
        assert_eq!(SlotError::AlreadyRunning.to_string(), "Spam already running");
        assert_eq!(SlotError::NotRunning.to_string(), "No spam running");
    }

    #[test]
    fn job_error_display() {
        let err = JobError::Work {
            iteration: 3,
            source: worker_down(),
        };
        assert_eq!(
            err.to_string(),
            "work failed on iteration 3: worker returned status 502: bad gateway"
        );
        assert_eq!(
            JobError::Setup(worker_down()).to_string(),
            "setup failed: worker returned status 502: bad gateway"
        );
    }

    #[test]
    fn job_error_iteration() {
        assert_eq!(JobError::Setup(worker_down()).iteration(), None);
        let err = JobError::Funding {
            iteration: 7,
            source: worker_down(),
        };
        assert_eq!(err.iteration(), Some(7));
    }
}
