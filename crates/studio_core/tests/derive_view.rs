use studio_core::{derive_view, Job, RouteContext, StoreSnapshot, Workspace};

fn loaded_snapshot(requested_id: Option<u64>) -> StoreSnapshot {
    StoreSnapshot {
        requested_id,
        job: Some(Job {
            id: 42,
            task_id: 3,
            frame_count: 100,
        }),
        fetching: false,
        workspace: Workspace::Review,
        frame_number: 17,
    }
}

#[test]
fn job_exposed_when_route_matches_requested_id() {
    let route = RouteContext::new("3", "42");
    let view = derive_view(&route, &loaded_snapshot(Some(42)));

    assert_eq!(view.job.as_ref().map(|job| job.id), Some(42));
}

#[test]
fn job_hidden_when_route_names_another_job() {
    let route = RouteContext::new("3", "42");
    let view = derive_view(&route, &loaded_snapshot(Some(43)));

    assert_eq!(view.job, None);
}

#[test]
fn stale_resident_job_hidden_when_route_id_is_unparseable() {
    let route = RouteContext::new("3", "abc");
    let view = derive_view(&route, &loaded_snapshot(Some(42)));

    assert_eq!(view.job, None);
}

#[test]
fn both_unparseable_ids_compare_equal() {
    // "No job selected" on both sides must not read as a mismatch.
    let route = RouteContext::new("3", "abc");
    let view = derive_view(&route, &loaded_snapshot(None));

    assert_eq!(view.job.as_ref().map(|job| job.id), Some(42));
}

#[test]
fn fetching_workspace_and_frame_pass_through() {
    let route = RouteContext::new("3", "42");
    let snapshot = StoreSnapshot {
        fetching: true,
        ..loaded_snapshot(Some(42))
    };

    let view = derive_view(&route, &snapshot);

    assert!(view.fetching);
    assert_eq!(view.workspace, Workspace::Review);
    assert_eq!(view.frame_number, 17);
}

#[test]
fn derive_view_is_pure() {
    let route = RouteContext::new("3", "42");
    let snapshot = loaded_snapshot(Some(42));

    let first = derive_view(&route, &snapshot);
    let second = derive_view(&route, &snapshot);

    assert_eq!(first, second);
    assert_eq!(snapshot, loaded_snapshot(Some(42)));
}
