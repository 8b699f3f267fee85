// src/tests/router_tests/page_tests.rs

use super::{body_string, get, post_form};
use crate::errors::ServerError;
use crate::responses::errors::status_for;
use crate::responses::html_error_response;
use crate::tests::utils::make_state;

#[test]
fn home_page_renders_form_filters_and_empty_panels() {
    let state = make_state("page_home");

    let mut resp = get(&state, "/").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("id=\"search-form\""));
    assert!(body.contains("id=\"price\""));
    assert!(body.contains("No saved trips yet."));
    assert!(body.contains("(0)"));
}

#[test]
fn unknown_route_is_not_found() {
    let state = make_state("page_404");

    let err = get(&state, "/nope").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
}

#[test]
fn listing_detail_renders_modal_for_last_results() {
    let state = make_state("page_modal");
    get(&state, "/search?q=Nice").unwrap();
    let first = state.search.last_results()[0].clone();

    let mut resp = get(&state, &format!("/listings/{}", first.id)).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains(&first.title));
    assert!(body.contains("id=\"book-now\""));
}

#[test]
fn listing_detail_for_unknown_id_is_not_found() {
    let state = make_state("page_modal_missing");

    let err = get(&state, "/listings/123-0").unwrap_err();
    assert_eq!(status_for(&err), 404);
}

#[test]
fn booking_is_a_placeholder() {
    let state = make_state("page_book");

    let mut resp = post_form(&state, "/book", "id=1-0").unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Booking is not available yet."));
}
