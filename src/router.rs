use crate::errors::ServerError;
use crate::responses::{html_response, html_with_trigger, no_content, ResultResp, FAVORITES_CHANGED};
use crate::search::{SearchOutcome, SearchPhase};
use crate::state::AppState;
use crate::templates::components::{
    booking_placeholder, favorites_panel, listing_modal, results_panel, save_button,
};
use crate::templates::pages::home_page;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let params = parse_query(&req);

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let results = state.search.last_results();
            let searching = state.search.phase() == SearchPhase::InFlight;
            let favorites = state.favorites();
            html_response(home_page(&results, &state.filters(), &favorites, searching))
        }

        ("GET", "/search") => {
            state.update_filters(param(&params, "price"), param(&params, "stars"))?;
            let outcome = state.search.search(param(&params, "q").unwrap_or(""));
            render_outcome(state, outcome)
        }

        // Filter change: re-run whatever was searched last.
        ("GET", "/filters") => {
            state.update_filters(param(&params, "price"), param(&params, "stars"))?;
            render_outcome(state, state.search.rerun())
        }

        ("GET", "/favorites") => html_response(favorites_panel(&state.favorites())),

        ("POST", "/favorites/toggle") => {
            let form = parse_form(&mut req)?;
            let id = required(&form, "id")?;

            let mut favorites = state.favorites();
            let item = state
                .search
                .find(id)
                .or_else(|| favorites.find(id).cloned())
                .ok_or(ServerError::NotFound)?;
            let saved = favorites.toggle(&item)?;

            html_with_trigger(save_button(id, saved), FAVORITES_CHANGED)
        }

        ("POST", "/favorites/remove") => {
            let form = parse_form(&mut req)?;
            let id = required(&form, "id")?;

            let mut favorites = state.favorites();
            favorites.remove(id)?;

            html_with_trigger(favorites_panel(&favorites), FAVORITES_CHANGED)
        }

        ("GET", p) if p.starts_with("/favorites/button/") => {
            let id = &p["/favorites/button/".len()..];
            html_response(save_button(id, state.favorites().is_favorite(id)))
        }

        ("GET", p) if p.starts_with("/listings/") => {
            let id = &p["/listings/".len()..];
            let item = state
                .search
                .find(id)
                .or_else(|| state.favorites().find(id).cloned())
                .ok_or(ServerError::NotFound)?;
            html_response(listing_modal(&item))
        }

        ("POST", "/book") => html_response(booking_placeholder()),

        _ => Err(ServerError::NotFound),
    }
}

fn render_outcome(state: &AppState, outcome: SearchOutcome) -> ResultResp {
    match outcome {
        SearchOutcome::Completed(items) => {
            html_response(results_panel(&items, &state.favorites()))
        }
        // A newer search owns the results area now.
        SearchOutcome::Superseded => no_content(),
    }
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

fn required<'a>(params: &'a HashMap<String, String>, key: &str) -> Result<&'a str, ServerError> {
    param(params, key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing '{key}'")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
