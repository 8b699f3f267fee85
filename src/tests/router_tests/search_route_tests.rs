// src/tests/router_tests/search_route_tests.rs

use super::{body_string, get};
use crate::errors::ServerError;
use crate::responses::errors::status_for;
use crate::responses::html_error_response;
use crate::tests::utils::{make_slow_state, make_state};
use std::time::Duration;

#[test]
fn search_renders_filtered_results() {
    let state = make_state("route_search");

    let mut resp = get(&state, "/search?q=Paris").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("(12)"));
    assert!(body.contains("Paris Stay #1"));
    assert!(body.contains(">Save<"));
}

#[test]
fn search_updates_filters_before_running() {
    let state = make_state("route_search_filters");

    get(&state, "/search?q=Oslo&price=9000&stars=4").unwrap();

    let settings = state.filters();
    assert_eq!(settings.max_price, 9000);
    assert_eq!(settings.min_stars, 4);
    assert!(state
        .search
        .last_results()
        .iter()
        .all(|it| it.price <= 9000 && it.stars >= 4));
}

#[test]
fn filter_change_reruns_last_query() {
    let state = make_state("route_filters");
    get(&state, "/search?q=Oslo").unwrap();

    let resp = get(&state, "/filters?stars=5").unwrap();
    assert_eq!(resp.status(), 200);

    assert_eq!(state.search.last_query(), "Oslo");
    assert_eq!(state.filters().min_stars, 5);
    assert!(state
        .search
        .last_results()
        .iter()
        .all(|it| it.stars == 5 && it.location == "Oslo, Country"));
}

#[test]
fn invalid_filter_value_is_bad_request() {
    let state = make_state("route_bad_filter");

    let err = get(&state, "/search?q=Oslo&price=lots").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(status_for(&err), 400);
    assert_eq!(html_error_response(err).status(), 400);

    // Rejected values never reach the shared settings.
    assert_eq!(state.filters().max_price, 25000);
}

#[test]
fn query_is_url_decoded() {
    let state = make_state("route_decode");

    let mut resp = get(&state, "/search?q=New+York%21").unwrap();
    assert!(body_string(&mut resp).contains("New York! Stay #1"));
}

#[test]
fn overlapping_searches_answer_the_older_one_with_no_content() {
    let state = make_slow_state("route_superseded", 300);

    let (older, newer) = std::thread::scope(|s| {
        let older = s.spawn(|| get(&state, "/search?q=Slow").map(|r| r.status()));
        std::thread::sleep(Duration::from_millis(100));
        let newer = get(&state, "/search?q=Fast").map(|r| r.status());
        (older.join().unwrap(), newer)
    });

    assert_eq!(older.unwrap(), 204);
    assert_eq!(newer.unwrap(), 200);
    assert!(state
        .search
        .last_results()
        .iter()
        .all(|it| it.location == "Fast, Country"));
}

#[test]
fn home_page_shows_indicator_while_search_waits() {
    let state = make_slow_state("route_indicator", 300);

    std::thread::scope(|s| {
        let pending = s.spawn(|| get(&state, "/search?q=Slow").map(|r| r.status()));
        std::thread::sleep(Duration::from_millis(100));

        let mut resp = get(&state, "/").unwrap();
        assert!(body_string(&mut resp).contains("htmx-indicator card htmx-request"));
        assert_eq!(pending.join().unwrap().unwrap(), 200);
    });

    let mut resp = get(&state, "/").unwrap();
    assert!(!body_string(&mut resp).contains("htmx-indicator card htmx-request"));
}
