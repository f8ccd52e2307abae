use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use studio_core::{update, AppState, Dispatch, Effect, Msg, StoreSnapshot};
use ui_logging::{ui_info, ui_warn};

use crate::job_source::JobSource;
use crate::log_drain::LogDrain;

/// Handle to the store worker. Cloning shares the same store.
#[derive(Clone)]
pub struct StoreHandle {
    shared: Arc<Mutex<AppState>>,
    tx: mpsc::Sender<Msg>,
}

impl StoreHandle {
    pub fn snapshot(&self) -> StoreSnapshot {
        self.shared.lock().expect("lock store state").snapshot()
    }
}

impl Dispatch for StoreHandle {
    fn dispatch(&self, msg: Msg) {
        let _ = self.tx.send(msg);
    }
}

pub struct Store;

impl Store {
    /// Spawns the store worker.
    ///
    /// Messages are applied one at a time and each message's effects run on
    /// the worker thread before the next message is taken, so command
    /// application stays serialized with a single writer.
    pub fn spawn(job_source: Arc<dyn JobSource>, log_drain: Arc<dyn LogDrain>) -> StoreHandle {
        let (tx, rx) = mpsc::channel::<Msg>();
        let shared = Arc::new(Mutex::new(AppState::new()));
        let handle = StoreHandle {
            shared: shared.clone(),
            tx: tx.clone(),
        };

        thread::spawn(move || {
            while let Ok(msg) = rx.recv() {
                let effects = {
                    let mut guard = shared.lock().expect("lock store state");
                    let state = std::mem::take(&mut *guard);
                    let (state, effects) = update(state, msg);
                    *guard = state;
                    effects
                };
                for effect in effects {
                    run_effect(effect, job_source.as_ref(), log_drain.as_ref(), &tx);
                }
            }
        });

        handle
    }
}

fn run_effect(
    effect: Effect,
    job_source: &dyn JobSource,
    log_drain: &dyn LogDrain,
    tx: &mpsc::Sender<Msg>,
) {
    match effect {
        Effect::FetchJob { task_id, job_id } => match job_source.fetch(task_id, job_id) {
            Ok(job) => {
                ui_info!(
                    "fetched job {} (task {}, {} frames)",
                    job.id,
                    job.task_id,
                    job.frame_count
                );
                let _ = tx.send(Msg::JobFetched { job });
            }
            Err(err) => {
                ui_warn!("job fetch failed: {}", err);
                let _ = tx.send(Msg::JobFetchFailed);
            }
        },
        Effect::FlushLogs => log_drain.flush(),
    }
}
