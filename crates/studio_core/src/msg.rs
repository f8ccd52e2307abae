use crate::query::FilterExpr;
use crate::state::{Job, JobId, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Load the job named by the current route, with the one-time
    /// initialization parameters carried in the query string. Unparsed
    /// identifiers are passed along as `None`; the store validates.
    LoadJob {
        task_id: Option<TaskId>,
        job_id: Option<JobId>,
        initial_frame: Option<u32>,
        initial_filters: Vec<FilterExpr>,
        initial_open_guide: bool,
    },
    /// Move the player to a frame. Bounds are checked by the store,
    /// not by the caller.
    ChangeFrame { frame: u32 },
    /// Flush accumulated interaction logs.
    SaveLogs,
    /// Tear down the annotation slice when the page is left.
    CloseJob,
    /// Store-internal: the job source produced the requested job.
    JobFetched { job: Job },
    /// Store-internal: the job source failed; the view stays empty.
    JobFetchFailed,
}
