mod favorites_route_tests;
mod page_tests;
mod search_route_tests;

use crate::responses::ResultResp;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn get(state: &AppState, uri: &str) -> ResultResp {
    send(state, Method::GET, uri, Body::empty())
}

pub fn post_form(state: &AppState, uri: &str, form: &str) -> ResultResp {
    send(state, Method::POST, uri, Body::from(form.to_string()))
}

fn send(state: &AppState, method: Method, uri: &str, body: Body) -> ResultResp {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    handle(req, state)
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
