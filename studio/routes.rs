use std::io::Cursor;
use log::{debug, warn};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::handlers::{self, ApiReply};
use crate::state::SharedState;
use crate::util::query::split_url;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn headers(pairs: &[(&str, &str)]) -> Vec<Header> {
    pairs.iter()
        .filter_map(|(k, v)| Header::from_bytes(k.as_bytes(), v.as_bytes()).ok())
        .collect()
}

pub fn json_response(reply: ApiReply) -> Response<Cursor<Vec<u8>>> {
    let bytes = reply.body.to_string().into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(reply.status),
        headers(&[
            ("Content-Type", "application/json"),
            ("Access-Control-Allow-Origin", "*"),
        ]),
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn redirect(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::new(
        StatusCode(303),
        headers(&[("Location", location), ("Content-Length", "0")]),
        Cursor::new(Vec::new()),
        Some(0),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        headers(&[("Content-Type", "text/plain")]),
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

/// Outcome of matching a request against the route table.
#[derive(Debug, PartialEq)]
pub enum Routed {
    Redirect(&'static str),
    Json(ApiReply),
    NotFound,
}

/// Maps `(method, path, query)` to a handler result without touching the
/// connection.
pub fn route(method: &Method, path: &str, query: &str, state: &SharedState) -> Routed {
    match (method, path) {
        (Method::Get, "/")              => Routed::Redirect("/api/snapshot"),
        (Method::Get, "/api/config")    => Routed::Json(handlers::config::handle_get(state)),
        (Method::Get, "/api/dataset")   => Routed::Json(handlers::dataset::handle_get(state)),
        (Method::Get, "/api/snapshot")  => Routed::Json(handlers::snapshot::handle_get(query, state)),
        (Method::Get, "/api/curve")     => Routed::Json(handlers::curve::handle_get(state)),
        _ => Routed::NotFound,
    }
}

/// Routes one request and writes the response back on its connection.
pub fn dispatch(request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let (path, query) = split_url(&url);

    let response = match route(&method, path, query, &state) {
        Routed::Redirect(location) => redirect(location),
        Routed::Json(reply)        => {
            debug!("{method} {url} -> {}", reply.status);
            json_response(reply)
        }
        Routed::NotFound           => {
            debug!("{method} {url} -> 404");
            not_found()
        }
    };

    if let Err(e) = request.respond(response) {
        warn!("failed to send response for {url}: {e}");
    }
}
