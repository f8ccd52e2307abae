use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::thread;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use studio_core::{Job, RouteContext};
use studio_runtime::{
    connect, view, AddressBar, InMemoryJobSource, LogDrain, NullLogDrain, Store,
};
use url::Url;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn wait_for(what: &str, cond: impl Fn() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while !cond() {
        assert!(Instant::now() < deadline, "timed out waiting for {what}");
        thread::sleep(Duration::from_millis(10));
    }
}

#[derive(Default)]
struct CountingLogDrain {
    flushes: AtomicUsize,
}

impl LogDrain for CountingLogDrain {
    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}

fn seeded_source() -> Arc<InMemoryJobSource> {
    let source = Arc::new(InMemoryJobSource::new());
    source.insert(Job {
        id: 42,
        task_id: 3,
        frame_count: 10,
    });
    source
}

#[test]
fn page_loads_job_through_the_store() {
    init_logging();
    let store = Store::spawn(seeded_source(), Arc::new(NullLogDrain));
    let route = RouteContext::new("3", "42");
    let address = AddressBar::new(
        Url::parse("https://studio.example/tasks/3/jobs/42?frame=2&openGuide").expect("test url"),
    );

    let bindings = connect(&route, &address, &store);
    assert_eq!(address.current().query(), None);

    bindings.get_job();
    wait_for("job to load", || view(&route, &store).job.is_some());

    let page = view(&route, &store);
    assert!(!page.fetching);
    assert_eq!(page.frame_number, 2);
    assert_eq!(page.job.map(|job| job.id), Some(42));
}

#[test]
fn unknown_job_leaves_the_view_empty() {
    init_logging();
    let store = Store::spawn(seeded_source(), Arc::new(NullLogDrain));
    let route = RouteContext::new("3", "99");
    let address =
        AddressBar::new(Url::parse("https://studio.example/tasks/3/jobs/99").expect("test url"));

    let bindings = connect(&route, &address, &store);
    bindings.get_job();
    wait_for("fetch to settle", || !view(&route, &store).fetching);

    assert_eq!(view(&route, &store).job, None);
}

#[test]
fn frame_changes_apply_in_dispatch_order() {
    init_logging();
    let store = Store::spawn(seeded_source(), Arc::new(NullLogDrain));
    let route = RouteContext::new("3", "42");
    let address =
        AddressBar::new(Url::parse("https://studio.example/tasks/3/jobs/42").expect("test url"));

    let bindings = connect(&route, &address, &store);
    bindings.get_job();
    wait_for("job to load", || view(&route, &store).job.is_some());

    bindings.change_frame(5);
    bindings.change_frame(8);
    // Out of range: must be rejected after the in-range ones applied.
    bindings.change_frame(10);
    wait_for("frame changes to apply", || {
        view(&route, &store).frame_number == 8
    });

    assert_eq!(view(&route, &store).frame_number, 8);
}

#[test]
fn save_logs_reaches_the_drain() {
    init_logging();
    let drain = Arc::new(CountingLogDrain::default());
    let store = Store::spawn(seeded_source(), drain.clone());
    let route = RouteContext::new("3", "42");
    let address =
        AddressBar::new(Url::parse("https://studio.example/tasks/3/jobs/42").expect("test url"));

    let bindings = connect(&route, &address, &store);
    bindings.save_logs();
    wait_for("log flush", || drain.flushes.load(Ordering::SeqCst) == 1);
}

#[test]
fn close_job_resets_the_store() {
    init_logging();
    let store = Store::spawn(seeded_source(), Arc::new(NullLogDrain));
    let route = RouteContext::new("3", "42");
    let address =
        AddressBar::new(Url::parse("https://studio.example/tasks/3/jobs/42").expect("test url"));

    let bindings = connect(&route, &address, &store);
    bindings.get_job();
    wait_for("job to load", || view(&route, &store).job.is_some());

    bindings.close_job();
    wait_for("store to reset", || {
        store.snapshot().requested_id.is_none()
    });

    // Route still names job 42, store no longer does: no selection.
    assert_eq!(view(&route, &store).job, None);
}

#[test]
fn rebinding_after_strip_keeps_the_bare_path() {
    init_logging();
    let store = Store::spawn(seeded_source(), Arc::new(NullLogDrain));
    let route = RouteContext::new("3", "42");
    let address = AddressBar::new(
        Url::parse("https://studio.example/tasks/3/jobs/42?serverID=5&type=image")
            .expect("test url"),
    );

    let _first = connect(&route, &address, &store);
    let stripped = address.current();
    assert_eq!(stripped.query(), None);
    assert_eq!(stripped.path(), "/tasks/3/jobs/42");

    let _second = connect(&route, &address, &store);
    assert_eq!(address.current(), stripped);
}
