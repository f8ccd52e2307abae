/// Path parameters extracted from the current URL.
///
/// Recomputed by the router on every navigation; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    pub task_id: String,
    pub job_id: String,
}

impl RouteContext {
    pub fn new(task_id: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            job_id: job_id.into(),
        }
    }
}

/// Parses a path identifier. Anything that is not a non-negative integer
/// maps to `None`, the "no selection" sentinel.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
