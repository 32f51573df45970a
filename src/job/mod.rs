mod cancel;
mod run;
mod slot;

pub use cancel::CancellationToken;
pub use run::{JobConfig, RunPhase, RunReport, new_run_id, run_job};
pub use slot::{JobSlot, RunHandle};
