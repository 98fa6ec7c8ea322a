use pattern_router_rs::{Route, RouteRequest, Router, RouterError, RouterOptions};
use std::sync::Arc;
use std::thread;

#[test]
fn router_when_add_called_after_seal_then_returns_error() {
    let router = Router::new(None);
    router
        .add(Route::new("/once", "once").expect("route should build"))
        .expect("initial add should succeed");
    router.seal().expect("seal should succeed");

    let err = router.add(Route::new("/twice/", "twice").expect("route should build"));
    match err.expect_err("expected add while sealed error") {
        RouterError::AddWhileSealed { path } => assert_eq!(path, "/twice"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_configure_called_after_seal_then_returns_error() {
    let router: Router<()> = Router::new(None);
    router.seal().expect("seal should succeed");

    let err = router.configure(|table| {
        table.get("/late", ())?;
        Ok(())
    });
    match err.expect_err("expected configure while sealed error") {
        RouterError::ConfigureWhileSealed => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_get_readonly_called_before_seal_then_returns_error() {
    let router = Router::new(None);
    router
        .add(Route::new("/pending", ()).expect("route should build"))
        .expect("route should register");

    assert!(!router.is_sealed());
    match router.get_readonly().expect_err("expected readonly unavailable error") {
        RouterError::ReadOnlyUnavailable => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_sealed_twice_then_snapshot_is_kept() {
    let router = Router::new(None);
    router
        .add(Route::new("/a", "a").expect("route should build"))
        .expect("route should register");

    router.seal().expect("first seal should succeed");
    let first = router.get_readonly().expect("snapshot should exist");
    router.seal().expect("second seal should be a no-op");
    let second = router.get_readonly().expect("snapshot should exist");

    assert!(router.is_sealed());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 1);
}

#[test]
fn router_when_dispatching_before_and_after_seal_then_results_agree() {
    let options = RouterOptions::builder().case_sensitive(false).build();
    let router = Router::new(Some(options));
    router
        .configure(|table| {
            table.get("/users/{id}", "show")?.is_digit("id")?;
            table.post("/users", "create")?;
            Ok(())
        })
        .expect("routes should register");

    let request = RouteRequest::new("/Users/7").method("GET");
    let lookup = |router: &Router<&'static str>| {
        router.dispatch_with(&request, |matched| {
            (
                *matched.callback(),
                matched.parameters().value("id").map(str::to_string),
            )
        })
    };

    let before = lookup(&router);
    router.seal().expect("seal should succeed");
    let after = lookup(&router);

    assert_eq!(before, Some(("show", Some("7".to_string()))));
    assert_eq!(before, after);
    assert_eq!(
        router.dispatch_with(&RouteRequest::new("/users/x").method("GET"), |m| m.id()),
        None
    );
}

#[test]
fn router_when_sealed_then_snapshot_dispatches_across_threads() {
    let router = Arc::new(Router::new(None));
    router
        .configure(|table| {
            table.get("/items/{id}", "item")?;
            table.get("/files/{path}", "file")?.is_anything("path")?;
            Ok(())
        })
        .expect("routes should register");
    router.seal().expect("seal should succeed");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                let snapshot = router.get_readonly().expect("snapshot should exist");
                let item = format!("/items/{worker}");
                let matched = snapshot
                    .dispatch(&RouteRequest::new(&item).method("GET"))
                    .expect("item route should match");
                assert_eq!(*matched.callback(), "item");
                assert_eq!(matched.parameters().value("id"), Some(worker.to_string().as_str()));

                let file = format!("/files/{worker}/a/b.txt");
                let path = router.dispatch_with(&RouteRequest::new(&file).method("GET"), |m| {
                    m.parameters().value("path").map(str::to_string)
                });
                assert_eq!(path, Some(Some(format!("{worker}/a/b.txt"))));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker should finish");
    }
}
