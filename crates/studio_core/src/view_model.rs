use crate::state::{Job, JobId, Workspace};

/// Read-only view of the store, as seen by a page. Never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreSnapshot {
    pub requested_id: Option<JobId>,
    pub job: Option<Job>,
    pub fetching: bool,
    pub workspace: Workspace,
    pub frame_number: u32,
}

/// What the annotation page renders from: the store scoped to one route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView {
    pub job: Option<Job>,
    pub frame_number: u32,
    pub fetching: bool,
    pub workspace: Workspace,
}
