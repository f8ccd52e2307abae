use crate::query::FilterExpr;
use crate::view_model::StoreSnapshot;

pub type TaskId = u64;
pub type JobId = u64;

/// Active annotation workspace layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workspace {
    #[default]
    Standard,
    Attributes,
    SingleShape,
    Tags,
    Review,
}

/// A loaded annotation job. Opaque to the page beyond identity and range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub task_id: TaskId,
    pub frame_count: u32,
}

/// The annotation slice of application state.
///
/// Mutated only through `update`; everything else reads it via `snapshot`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    requested_id: Option<JobId>,
    job: Option<Job>,
    fetching: bool,
    workspace: Workspace,
    frame_number: u32,
    guide_open: bool,
    filters: Vec<FilterExpr>,
    pending_initial_frame: Option<u32>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only projection consumed by `derive_view`.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            requested_id: self.requested_id,
            job: self.job.clone(),
            fetching: self.fetching,
            workspace: self.workspace,
            frame_number: self.frame_number,
        }
    }

    pub fn guide_open(&self) -> bool {
        self.guide_open
    }

    pub fn filters(&self) -> &[FilterExpr] {
        &self.filters
    }

    pub(crate) fn begin_load(
        &mut self,
        job_id: Option<JobId>,
        initial_frame: Option<u32>,
        filters: Vec<FilterExpr>,
        open_guide: bool,
    ) {
        // A resident job from a previous route must not leak into the new
        // page while the fetch is in flight.
        self.requested_id = job_id;
        self.job = None;
        self.fetching = true;
        self.frame_number = 0;
        self.guide_open = open_guide;
        self.filters = filters;
        self.pending_initial_frame = initial_frame;
    }

    /// Installs a fetched job. Completions for anything other than the
    /// most recently requested id are dropped as stale.
    pub(crate) fn complete_load(&mut self, job: Job) -> bool {
        if self.requested_id != Some(job.id) {
            return false;
        }
        let last_frame = job.frame_count.saturating_sub(1);
        self.frame_number = self
            .pending_initial_frame
            .take()
            .map_or(0, |frame| frame.min(last_frame));
        self.job = Some(job);
        self.fetching = false;
        true
    }

    pub(crate) fn fail_load(&mut self) {
        self.fetching = false;
        self.pending_initial_frame = None;
    }

    /// Moves the player, rejecting frames outside the loaded job's range.
    pub(crate) fn set_frame(&mut self, frame: u32) -> bool {
        match &self.job {
            Some(job) if frame < job.frame_count => {
                self.frame_number = frame;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
