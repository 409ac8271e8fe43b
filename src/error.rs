use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Events file unreadable or unwritable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed events file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed encoding events: {0}")]
    Encode(serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing form field '{0}'")]
    MissingField(&'static str),

    #[error("Login required")]
    AuthRequired,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Session unavailable: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Every failure ends up as a redirect, never as an error page
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::AuthRequired => Redirect::to("/").into_response(),
            AppError::MissingField(field) => {
                warn!("Rejected submission without '{}'", field);
                Redirect::to("/submit_event").into_response()
            }
            AppError::Store(err) => {
                error!("Failed to store submitted event: {}", err);
                Redirect::to("/submit_event").into_response()
            }
            AppError::Session(err) => {
                error!("{}", err);
                Redirect::to("/").into_response()
            }
        }
    }
}
