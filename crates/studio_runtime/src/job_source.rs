use std::collections::HashMap;
use std::sync::Mutex;

use studio_core::{Job, JobId, TaskId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobSourceError {
    #[error("route carried no usable job id")]
    MissingId,
    #[error("job {0} not found")]
    NotFound(JobId),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Seam toward the annotation backend.
pub trait JobSource: Send + Sync {
    fn fetch(&self, task_id: Option<TaskId>, job_id: Option<JobId>)
        -> Result<Job, JobSourceError>;
}

/// Job source backed by a fixed in-memory table, for tests and demos.
#[derive(Default)]
pub struct InMemoryJobSource {
    jobs: Mutex<HashMap<JobId, Job>>,
}

impl InMemoryJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, job: Job) {
        self.jobs.lock().expect("lock job table").insert(job.id, job);
    }
}

impl JobSource for InMemoryJobSource {
    fn fetch(
        &self,
        _task_id: Option<TaskId>,
        job_id: Option<JobId>,
    ) -> Result<Job, JobSourceError> {
        let job_id = job_id.ok_or(JobSourceError::MissingId)?;
        self.jobs
            .lock()
            .expect("lock job table")
            .get(&job_id)
            .cloned()
            .ok_or(JobSourceError::NotFound(job_id))
    }
}
