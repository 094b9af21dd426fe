pub mod auth;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use axum::{routing::get, Router};
use time::Duration;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing::Level;

use store::Store;

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin_session";

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router.
///
/// Caller provides an opened [`Store`]; `secure_cookies` should be true
/// behind HTTPS and false in local development and tests.
pub fn build_app(store: Store, secure_cookies: bool) -> Router {
    let session_store = MemoryStore::default();

    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE)
        .with_expiry(Expiry::OnInactivity(Duration::hours(24)))
        .with_secure(secure_cookies)
        .with_http_only(true)
        .with_same_site(SameSite::Lax);

    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .merge(routes::auth::router())
        .merge(routes::events::router())
        .merge(routes::commercials::router())
        .merge(routes::gallery::router())
        .merge(routes::testimonials::router())
        .merge(routes::contacts::router())
        .merge(routes::stats::router())
        .merge(routes::settings::router())
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
