use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadJob {
            task_id,
            job_id,
            initial_frame,
            initial_filters,
            initial_open_guide,
        } => {
            state.begin_load(job_id, initial_frame, initial_filters, initial_open_guide);
            vec![Effect::FetchJob { task_id, job_id }]
        }
        Msg::JobFetched { job } => {
            let job_id = job.id;
            if !state.complete_load(job) {
                log::warn!("dropped stale completion for job {job_id}");
            }
            Vec::new()
        }
        Msg::JobFetchFailed => {
            state.fail_load();
            Vec::new()
        }
        Msg::ChangeFrame { frame } => {
            if !state.set_frame(frame) {
                log::warn!("rejected frame change to {frame}: no job loaded or out of range");
            }
            Vec::new()
        }
        Msg::SaveLogs => vec![Effect::FlushLogs],
        Msg::CloseJob => {
            state.reset();
            Vec::new()
        }
    };

    (state, effects)
}
