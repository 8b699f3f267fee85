// src/tests/router_tests/favorites_route_tests.rs

use super::{body_string, get, post_form};
use crate::errors::ServerError;
use crate::tests::utils::make_state;

#[test]
fn toggle_saves_and_unsaves_a_result() {
    let state = make_state("route_toggle");
    get(&state, "/search?q=Porto").unwrap();
    let item = state.search.last_results()[0].clone();

    let mut resp = post_form(&state, "/favorites/toggle", &format!("id={}", item.id)).unwrap();
    assert_eq!(
        resp.headers().get("HX-Trigger").and_then(|v| v.to_str().ok()),
        Some("favorites-changed")
    );
    assert!(body_string(&mut resp).contains(">Saved<"));
    assert!(state.favorites().is_favorite(&item.id));

    let mut panel = get(&state, "/favorites").unwrap();
    assert!(body_string(&mut panel).contains(&item.title));

    let mut resp = post_form(&state, "/favorites/toggle", &format!("id={}", item.id)).unwrap();
    assert!(body_string(&mut resp).contains(">Save<"));
    assert!(!state.favorites().is_favorite(&item.id));
}

#[test]
fn toggle_unknown_id_is_not_found() {
    let state = make_state("route_toggle_missing");

    let err = post_form(&state, "/favorites/toggle", "id=999-0").unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn toggle_without_id_is_bad_request() {
    let state = make_state("route_toggle_no_id");

    let err = post_form(&state, "/favorites/toggle", "").unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn remove_updates_panel_and_buttons() {
    let state = make_state("route_remove");
    get(&state, "/search?q=Quito").unwrap();
    let item = state.search.last_results()[0].clone();
    post_form(&state, "/favorites/toggle", &format!("id={}", item.id)).unwrap();

    let mut button = get(&state, &format!("/favorites/button/{}", item.id)).unwrap();
    assert!(body_string(&mut button).contains(">Saved<"));

    let mut resp = post_form(&state, "/favorites/remove", &format!("id={}", item.id)).unwrap();
    assert!(body_string(&mut resp).contains("No saved trips yet."));

    let mut button = get(&state, &format!("/favorites/button/{}", item.id)).unwrap();
    assert!(body_string(&mut button).contains(">Save<"));
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let state = make_state("route_remove_noop");

    let resp = post_form(&state, "/favorites/remove", "id=nonexistent").unwrap();
    assert_eq!(resp.status(), 200);
    assert!(state.favorites().is_empty());
}

#[test]
fn saved_listing_still_opens_after_results_change() {
    let state = make_state("route_saved_modal");
    get(&state, "/search?q=Cusco").unwrap();
    let item = state.search.last_results()[0].clone();
    post_form(&state, "/favorites/toggle", &format!("id={}", item.id)).unwrap();

    // The new search replaces the cached results.
    get(&state, "/search?q=Lima").unwrap();
    assert!(state.search.find(&item.id).is_none());

    let mut resp = get(&state, &format!("/listings/{}", item.id)).unwrap();
    assert!(body_string(&mut resp).contains(&item.title));
}
