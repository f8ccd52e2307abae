//! Studio core: pure route binding and the annotation store state machine.
mod binder;
mod effect;
mod msg;
mod query;
mod route;
mod state;
mod update;
mod view_model;

pub use binder::{derive_view, CommandBindings, Dispatch, Navigator};
pub use effect::Effect;
pub use msg::Msg;
pub use query::{FilterExpr, InitParams};
pub use route::{parse_id, RouteContext};
pub use state::{AppState, Job, JobId, TaskId, Workspace};
pub use update::update;
pub use view_model::{DerivedView, StoreSnapshot};
