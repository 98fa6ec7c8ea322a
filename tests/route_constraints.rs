use pattern_router_rs::{HttpMethod, Route, RouteOptions, RouteRequest};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn constraints_when_route_built_without_options_then_all_axes_are_open() {
    let route = Route::new("/", ()).expect("route should build");
    assert_eq!(route.method(), None);
    assert_eq!(route.scheme(), None);
    assert_eq!(route.host(), None);
    assert_eq!(route.port(), None);
    assert!(route.constraints().is_unconstrained());
}

#[test]
fn constraints_when_options_supplied_then_values_are_normalized() {
    let options = RouteOptions::builder()
        .host(["foo.com"])
        .method(["GET", "post"])
        .scheme(["HTTP"])
        .port([80, 90])
        .build();
    let route = Route::with_options("/", "call", options).expect("route should build");

    assert_eq!(route.host(), Some(strings(&["foo.com"]).as_slice()));
    assert_eq!(route.method(), Some(strings(&["GET", "POST"]).as_slice()));
    assert_eq!(route.scheme(), Some(strings(&["http"]).as_slice()));
    assert_eq!(route.port(), Some(strings(&["80", "90"]).as_slice()));
    assert_eq!(*route.callback(), "call");
}

#[test]
fn constraints_when_setters_called_then_lists_are_replaced() {
    let mut route = Route::new("/", ()).expect("route should build");

    route.with_method(["PUT", "get", "POST"]);
    assert_eq!(route.method(), Some(strings(&["PUT", "GET", "POST"]).as_slice()));
    route.with_method([HttpMethod::Delete]);
    assert_eq!(route.method(), Some(strings(&["DELETE"]).as_slice()));

    route.with_scheme(["ftp", "http", "Ssh"]);
    assert_eq!(route.scheme(), Some(strings(&["ftp", "http", "ssh"]).as_slice()));

    route.with_host(["foo.com", "Biz.com", "bar.cc"]);
    assert_eq!(route.host(), Some(strings(&["foo.com", "biz.com", "bar.cc"]).as_slice()));

    route.with_port(["80", "443", "8080"]);
    assert_eq!(route.port(), Some(strings(&["80", "443", "8080"]).as_slice()));
}

#[test]
fn constraints_when_list_is_empty_or_blank_then_axis_is_cleared() {
    let mut route = Route::new("/", ()).expect("route should build");
    route
        .with_method(["GET"])
        .with_scheme(["http"])
        .with_host(["foo.com"])
        .with_port([80]);

    route
        .with_method(Vec::<String>::new())
        .with_scheme([""])
        .with_host(["  "])
        .with_port(Vec::<u16>::new());

    assert!(route.constraints().is_unconstrained());
}

#[test]
fn constraints_when_method_set_then_request_method_is_required() {
    let options = RouteOptions::builder().method(["GET"]).build();
    let route = Route::with_options("/foo", (), options).expect("route should build");

    assert!(route.try_match(&RouteRequest::new("/foo")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").method("POST")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").method("GET")).is_some());
    assert!(route.try_match(&RouteRequest::new("/foo").method("get")).is_some());
}

#[test]
fn constraints_when_host_set_then_comparison_ignores_case() {
    let options = RouteOptions::builder().host(["foo.com"]).build();
    let route = Route::with_options("/foo", (), options).expect("route should build");

    assert!(route.try_match(&RouteRequest::new("/foo")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").host("bar.com")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").host("foo.com")).is_some());
    assert!(route.try_match(&RouteRequest::new("/foo").host("Foo.com")).is_some());
}

#[test]
fn constraints_when_scheme_set_then_any_listed_scheme_passes() {
    let options = RouteOptions::builder().scheme(["http", "https"]).build();
    let route = Route::with_options("/foo", (), options).expect("route should build");

    assert!(route.try_match(&RouteRequest::new("/foo")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").scheme("ftp")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").scheme("http")).is_some());
    assert!(route.try_match(&RouteRequest::new("/foo").scheme("https")).is_some());
}

#[test]
fn constraints_when_port_set_then_compared_as_text() {
    let options = RouteOptions::builder().port(["80", "8080"]).build();
    let route = Route::with_options("/foo", (), options).expect("route should build");

    assert!(route.try_match(&RouteRequest::new("/foo")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").port("443")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").port("80")).is_some());
    assert!(route.try_match(&RouteRequest::new("/foo").port("8080")).is_some());
}

#[test]
fn constraints_when_every_axis_set_then_all_must_match() {
    let options = RouteOptions::builder()
        .method(["GET"])
        .scheme(["http", "https"])
        .host(["foo.com"])
        .port([80])
        .build();
    let route = Route::with_options("/foo", (), options).expect("route should build");

    assert!(route.try_match(&RouteRequest::new("/foo")).is_none());
    assert!(route.try_match(&RouteRequest::new("/foo").method("GET")).is_none());
    assert!(
        route
            .try_match(&RouteRequest::new("/foo").method("GET").host("foo.com"))
            .is_none()
    );
    assert!(
        route
            .try_match(&RouteRequest::from_parts(
                "/foo",
                Some("GET"),
                Some("foo.com"),
                Some("http"),
                None,
            ))
            .is_none()
    );
    assert!(
        route
            .try_match(&RouteRequest::from_parts(
                "/foo",
                Some("GET"),
                Some("foo.com"),
                Some("http"),
                Some("80"),
            ))
            .is_some()
    );
    assert!(
        route
            .try_match(&RouteRequest::from_parts(
                "/Foo",
                Some("get"),
                Some("Foo.com"),
                Some("Http"),
                Some("80"),
            ))
            .is_some()
    );
}

#[test]
fn constraints_when_route_is_open_then_request_facts_are_ignored() {
    let route = Route::new("/foo", ()).expect("route should build");

    assert!(route.try_match(&RouteRequest::new("/Foo")).is_some());
    assert!(route.try_match(&RouteRequest::new("/Foo").method("get")).is_some());
    assert!(
        route
            .try_match(&RouteRequest::from_parts(
                "/Foo",
                Some("get"),
                Some("Foo.com"),
                Some("Http"),
                Some("80"),
            ))
            .is_some()
    );
}
