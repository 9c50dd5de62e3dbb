use std::sync::Arc;
use std::time::Instant;

use axum::Extension;
use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use sentry::{Hub, SentryFutureExt};

use crate::ServerConfig;
use crate::metrics::track_request;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let header_value = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
    };

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id: header_value("x-request-id"),
        session_id: header_value("x-session-id"),
    }
}

fn route_of<T>(request: &Request<T>) -> Option<String> {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
}

/// Runs every request on its own sentry hub, tagged with the matched route
pub async fn sentry_layer(request: Request<Body>, next: Next) -> Response {
    let hub = Arc::new(Hub::new_from_top(Hub::main()));

    let context = get_http_request_context(&request);
    let route = route_of(&request).unwrap_or_else(|| context.path.to_owned());
    let http_request = format!("{} {route}", context.method);
    let request_id = context.request_id.map(ToOwned::to_owned);
    let session_id = context.session_id.map(ToOwned::to_owned);

    hub.configure_scope(|scope| {
        scope.set_tag("http-request", http_request);
        if let Some(request_id) = request_id {
            scope.set_tag("request-id", request_id);
        }
        if let Some(session_id) = session_id {
            scope.set_tag("session-id", session_id);
        }
    });

    next.run(request).bind_hub(hub).await
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> Response {
    let route = route_of(&request).unwrap_or_else(|| "unmatched".to_owned());
    let method = request.method().to_string();

    let start = Instant::now();
    let response = next.run(request).await;

    track_request(
        &method,
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

/// Rejects requests not carrying `Authorization: Bearer <authToken>`
pub async fn bearer_check(
    Extension(config): Extension<Arc<ServerConfig>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if !token.is_empty() && token == config.auth_token => {
            Ok(next.run(request).await)
        }
        Some(_) => {
            tracing::warn!("Rejected request with invalid bearer token");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Rejected request without bearer token");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
