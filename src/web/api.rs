//! JSON endpoints polled by the swipe page.
//!
//! A missing or expired session behaves like an empty queue.

use crate::events::dto::LikeRequest;
use crate::events::model::Event;
use crate::session::queue::LikeOutcome;
use crate::session::store::{get_user_session, update_user_session};
use axum::Json;
use serde::Serialize;
use tower_sessions::Session;
use tracing::{error, instrument};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl From<LikeOutcome> for StatusResponse {
    fn from(outcome: LikeOutcome) -> Self {
        Self {
            status: outcome.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /api/next_event
pub async fn next_event(session: Session) -> Json<Option<Event>> {
    let next = match get_user_session(&session).await {
        Ok(user) => user.and_then(|user| user.queue.next().cloned()),
        Err(e) => {
            error!("Couldn't read session: {}", e);
            None
        }
    };

    Json(next)
}

/// POST /api/like_event
#[instrument(skip_all)]
pub async fn like_event(
    session: Session,
    payload: Option<Json<LikeRequest>>,
) -> Json<StatusResponse> {
    let event = payload.and_then(|Json(request)| request.into_event());

    let outcome = match update_user_session(&session, |user| user.queue.like(event)).await {
        Ok(outcome) => outcome.unwrap_or(LikeOutcome::Ok),
        Err(e) => {
            error!("Couldn't record like: {}", e);
            LikeOutcome::Ok
        }
    };

    Json(outcome.into())
}

/// POST /api/dislike_event
#[instrument(skip_all)]
pub async fn dislike_event(session: Session) -> Json<StatusResponse> {
    if let Err(e) = update_user_session(&session, |user| {
        user.queue.dislike();
    })
    .await
    {
        error!("Couldn't record dislike: {}", e);
    }

    Json(LikeOutcome::Ok.into())
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
