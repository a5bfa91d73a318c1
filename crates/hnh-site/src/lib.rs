//! Hops & Hearth
//!
//! A personal content website: beer reviews and recipes rendered server-side
//! from local JSON data, plus a small JSON endpoint listing external
//! resources and a sitemap generated from the same data.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use axum::{
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::content::ContentStore;

pub mod content;
pub mod handlers;
pub mod sitemap;
pub mod stars;
pub mod templates;
#[cfg(debug_assertions)]
pub mod watch;

/// Canonical origin for absolute URLs (sitemap, JSON-LD, canonical links).
pub const SITE_URL: &str = "https://hopsandhearth.com";

/// Site author, used in JSON-LD and meta tags.
pub const SITE_AUTHOR: &str = "Sam Porter";

/// Build version for cache busting static assets.
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared application state.
///
/// The content store is read-only at request time; the lock exists only so
/// the debug-build data watcher can swap in a fresh load.
#[derive(Clone)]
pub struct AppState {
    content: Arc<RwLock<ContentStore>>,
}

impl AppState {
    pub fn new(store: ContentStore) -> Self {
        Self {
            content: Arc::new(RwLock::new(store)),
        }
    }

    /// Read access to the content store. Never held across an await point.
    pub fn content(&self) -> RwLockReadGuard<'_, ContentStore> {
        self.content.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap in a freshly loaded store (debug-build hot reload).
    pub fn replace(&self, store: ContentStore) {
        *self.content.write().unwrap_or_else(PoisonError::into_inner) = store;
    }
}

/// Build the full site router. Exposed so tests can serve it in-process.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home))
        .route("/beer", get(handlers::beer::index))
        .route("/beer/{id}", get(handlers::beer::show))
        .route("/recipe", get(handlers::recipe::index))
        .route("/recipe/{id}", get(handlers::recipe::show))
        .route("/api/info", get(handlers::info::info))
        .route("/sitemap.xml", get(sitemap::sitemap))
        .route("/static/site.css", get(site_css))
        .nest_service("/public", ServeDir::new("public"))
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(
                        "default-src 'self'; img-src 'self' data:; style-src 'self'; \
                         script-src 'none'; frame-ancestors 'none'",
                    ),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::STRICT_TRANSPORT_SECURITY,
                    HeaderValue::from_static("max-age=63072000; includeSubDomains"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::REFERRER_POLICY,
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                )),
        )
}

/// Stylesheet minified by the build script.
async fn site_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!(concat!(env!("OUT_DIR"), "/site.min.css")),
    )
}
