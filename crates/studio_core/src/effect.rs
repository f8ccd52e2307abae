use crate::state::{JobId, TaskId};

/// IO requested by `update`, executed by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchJob {
        task_id: Option<TaskId>,
        job_id: Option<JobId>,
    },
    FlushLogs,
}
