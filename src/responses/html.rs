use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

/// htmx event fired whenever the saved list changes.
pub const FAVORITES_CHANGED: &str = "favorites-changed";

pub fn html_response(markup: Markup) -> ResultResp {
    html_with_status(200, markup.into_string())
}

/// HTML fragment that also asks htmx to fire `event` on the page.
pub fn html_with_trigger(markup: Markup, event: &str) -> ResultResp {
    let mut resp = html_response(markup)?;
    let value = event
        .parse()
        .map_err(|_| crate::errors::ServerError::InternalError)?;
    resp.headers_mut().insert("hx-trigger", value);
    Ok(resp)
}

/// 204: htmx leaves the target untouched.
pub fn no_content() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| crate::errors::ServerError::InternalError)
}

pub fn html_with_status(status: u16, body: String) -> ResultResp {
    let resp: Response = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .map_err(|_| crate::errors::ServerError::InternalError)?;

    Ok(resp)
}
