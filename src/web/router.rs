use super::{api, handlers, pages};
use crate::config::model::Config;
use crate::events::store::EventStore;
use crate::session::store::session_layer;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'";
const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Shared across every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub events: EventStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let events = EventStore::new(config.events_file.clone());

        Self {
            config: Arc::new(config),
            events,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let secure = state.config.session_config.cookie_secure;
    let sessions = session_layer(&state.config.session_config);

    let router = Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login))
        .route("/logout", get(handlers::logout))
        .route("/swipe", get(handlers::swipe))
        .route("/results", get(handlers::results))
        .route(
            "/submit_event",
            get(handlers::submit_event_form).post(handlers::submit_event),
        )
        .route("/api/next_event", get(api::next_event))
        .route("/api/like_event", post(api::like_event))
        .route("/api/dislike_event", post(api::dislike_event))
        .route("/static/js/swipe.js", get(pages::serve_swipe_js))
        .route("/health", get(api::health_check))
        .with_state(state)
        .layer(sessions)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(TraceLayer::new_for_http());

    if secure {
        router.layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS),
        ))
    } else {
        router
    }
}
