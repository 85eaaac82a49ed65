use crate::AppState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;

/// Fallback for everything that is not the chat endpoint. GET and HEAD are
/// delegated to the static file service rooted at the configured directory;
/// a POST to an unrouted path is a bare 404.
pub async fn fallback(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method();
    if method == Method::GET || method == Method::HEAD {
        state
            .assets
            .clone()
            .oneshot(request)
            .await
            .expect("infallible")
            .map(Body::new)
            .into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
