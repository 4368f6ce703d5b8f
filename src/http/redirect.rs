//! Redirect-and-link responder.
//!
//! # Responsibilities
//! - Answer GET and HEAD on any path with a 307 to the first mirror
//! - Advertise every mirror as a `Link: <...>; rel="duplicate"; pri=N`
//! - Reject other methods with 501
//!
//! # Design Decisions
//! - The request target as received (path plus query, or the full URL of
//!   an absolute-form request) is appended to each mirror verbatim
//! - Headers are emitted in order: `Location`, then one `Link` per mirror
//! - No body is ever sent

use std::borrow::Cow;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{
        header::{self, InvalidHeaderValue},
        HeaderMap, HeaderValue, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::server::AppState;
use crate::mirrors::MirrorSet;

/// Failure to turn a mirror into a header value.
#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("invalid {name} header value: {source}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl IntoResponse for RedirectError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Failed to build redirect");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Request target as received.
///
/// Absolute-form targets (`GET http://host/x`) keep scheme and authority;
/// origin-form targets are path plus query, `/` when absent.
pub fn request_target(uri: &Uri) -> Cow<'_, str> {
    if uri.scheme().is_some() {
        return Cow::Owned(uri.to_string());
    }
    Cow::Borrowed(uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/"))
}

/// Build the 307 response for `target`.
pub fn redirect_response(mirrors: &MirrorSet, target: &str) -> Result<Response, RedirectError> {
    let mut headers = HeaderMap::with_capacity(mirrors.len() + 1);

    let location = HeaderValue::from_str(&mirrors.location(target)).map_err(|source| {
        RedirectError::InvalidHeader {
            name: "Location",
            source,
        }
    })?;
    headers.insert(header::LOCATION, location);

    for link in mirrors.links(target) {
        let value = HeaderValue::from_str(&link.to_string())
            .map_err(|source| RedirectError::InvalidHeader { name: "Link", source })?;
        headers.append(header::LINK, value);
    }

    Ok((StatusCode::TEMPORARY_REDIRECT, headers).into_response())
}

/// Fallback handler covering the whole URI space.
pub async fn redirect_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
) -> Response {
    let target = request_target(&uri);

    tracing::debug!(
        peer = %peer,
        method = %method,
        target = %target,
        "Redirecting to mirrors"
    );

    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::NOT_IMPLEMENTED, "Unsupported method").into_response();
    }

    match redirect_response(&state.mirrors, &target) {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
