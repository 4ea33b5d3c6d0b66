//! Rewrites POST requests carrying a `_method` form field into the verb
//! that field names, so plain HTML forms can drive PATCH and DELETE
//! routes. Must run outside the router, before any verb matching; the
//! buffered body is put back untouched.

use std::error::Error;

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

const MAX_FORM_BYTES: usize = 64 * 1024;

pub async fn override_method(req: Request, next: Next) -> Response {
    if req.method() != Method::POST || !is_urlencoded_form(&req) {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            let status = if is_length_limit(&err) {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            return status.into_response();
        }
    };
    if let Some(method) = form_method(&bytes) {
        parts.method = method;
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_urlencoded_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// True only when the size cap was hit; other body failures are the
/// client's or transport's problem, not an oversized payload.
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return true;
        }
        source = current.source();
    }
    false
}

fn form_method(bytes: &[u8]) -> Option<Method> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes).ok()?;
    let (_, value) = pairs.into_iter().find(|(key, _)| key == "_method")?;
    Method::from_bytes(value.to_ascii_uppercase().as_bytes()).ok()
}
