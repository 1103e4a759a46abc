//! CORS policy for browser clients.
//!
//! Every origin, method and request header is allowed: the endpoints are
//! read-only diagnostics meant to be called from any frontend during development.
//!
//! Credentials are never allowed. Browsers reject `Access-Control-Allow-Origin: *`
//! combined with credentials, and tower-http refuses to build such a layer.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(60 * 10))
}

/// Apply the CORS policy to the given Router.
pub fn apply(router: Router) -> Router {
    router.layer(layer())
}
