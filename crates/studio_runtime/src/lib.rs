//! Studio runtime: single-writer store loop and effect execution.
mod address;
mod job_source;
mod log_drain;
mod page;
mod store;

pub use address::AddressBar;
pub use job_source::{InMemoryJobSource, JobSource, JobSourceError};
pub use log_drain::{LogDrain, NullLogDrain};
pub use page::{connect, view};
pub use store::{Store, StoreHandle};
