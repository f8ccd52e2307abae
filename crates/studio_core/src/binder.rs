use std::sync::mpsc;

use url::Url;

use crate::msg::Msg;
use crate::query::InitParams;
use crate::route::{parse_id, RouteContext};
use crate::state::{JobId, TaskId};
use crate::view_model::{DerivedView, StoreSnapshot};

/// Navigation seam: rewrites the visible URL without reloading the page.
pub trait Navigator {
    fn replace(&self, path: &str);
}

/// Dispatch seam toward the store. Fire-and-forget.
pub trait Dispatch {
    fn dispatch(&self, msg: Msg);
}

impl Dispatch for mpsc::Sender<Msg> {
    fn dispatch(&self, msg: Msg) {
        // The store may already be gone during teardown; dropping the
        // message is the documented fire-and-forget behavior.
        let _ = self.send(msg);
    }
}

/// Projects the store onto the page scoped by `route`.
///
/// The job is exposed only when the route names the job the store was most
/// recently asked to fetch; a stale instance left over from another page
/// reads as no selection. Two unparseable identifiers compare equal
/// (`None == None`), so an id-less route against an id-less store is not a
/// perpetual mismatch.
pub fn derive_view(route: &RouteContext, snapshot: &StoreSnapshot) -> DerivedView {
    let job = if parse_id(&route.job_id) == snapshot.requested_id {
        snapshot.job.clone()
    } else {
        None
    };
    DerivedView {
        job,
        frame_number: snapshot.frame_number,
        fetching: snapshot.fetching,
        workspace: snapshot.workspace,
    }
}

/// Command constructors bound to one route and its one-time query
/// parameters. Stateless between calls; all state lives in the store.
pub struct CommandBindings<D: Dispatch> {
    task_id: Option<TaskId>,
    job_id: Option<JobId>,
    init: InitParams,
    dispatch: D,
}

impl<D: Dispatch> CommandBindings<D> {
    /// Binds `route` to the store.
    ///
    /// When `current_url` still carries query parameters, the navigator is
    /// told once to replace the URL with the bare path, so a reload does
    /// not reapply the one-time initialization values. Binding an
    /// already-stripped URL performs no navigation.
    pub fn bind(
        route: &RouteContext,
        current_url: &Url,
        navigator: &dyn Navigator,
        dispatch: D,
    ) -> Self {
        let init = InitParams::from_url(current_url);
        if InitParams::query_present(current_url) {
            navigator.replace(current_url.path());
        }
        Self {
            task_id: parse_id(&route.task_id),
            job_id: parse_id(&route.job_id),
            init,
            dispatch,
        }
    }

    pub fn get_job(&self) {
        self.dispatch.dispatch(Msg::LoadJob {
            task_id: self.task_id,
            job_id: self.job_id,
            initial_frame: self.init.frame,
            initial_filters: self.init.filters.clone(),
            initial_open_guide: self.init.open_guide,
        });
    }

    /// No bounds check here; the store's update function validates.
    pub fn change_frame(&self, frame: u32) {
        self.dispatch.dispatch(Msg::ChangeFrame { frame });
    }

    pub fn save_logs(&self) {
        self.dispatch.dispatch(Msg::SaveLogs);
    }

    pub fn close_job(&self) {
        self.dispatch.dispatch(Msg::CloseJob);
    }
}
