//! HTML pages and form handling.
//!
//! `/swipe` and `/results` need a logged-in session, anything else sends the user back to `/`.

use super::pages;
use super::router::AppState;
use crate::error::AppError;
use crate::events::dto::SubmitEventForm;
use crate::events::filter::matching_events;
use crate::session::model::UserSession;
use crate::session::queue::SwipeQueue;
use crate::session::store::{
    clear_user_session, get_user_session, set_user_session, update_user_session,
};
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use tower_sessions::Session;
use tracing::{info, instrument, warn};

pub async fn index() -> Html<String> {
    Html(pages::index())
}

/// Simulated login: no credentials, the favorite artists come from the configuration
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, AppError> {
    let user = UserSession::logged_in(state.config.favorite_artists.clone());

    set_user_session(&session, &user).await?;

    info!("Logged in with {} favorite artists", user.artists.len());

    Ok(Redirect::to("/swipe"))
}

#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_user_session(&session).await?;

    Ok(Redirect::to("/"))
}

/// Entering the swipe flow takes a fresh snapshot of the matching events and forgets previous likes
#[instrument(skip_all)]
pub async fn swipe(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let user = logged_in_user(&session).await?;

    let all_events = state.events.load_all().await.unwrap_or_else(|e| {
        warn!("Couldn't load events, swiping through nothing: {}", e);
        Vec::new()
    });
    let matching = matching_events(&all_events, &user.artists);
    let matching_count = matching.len();

    update_user_session(&session, |user| user.queue = SwipeQueue::new(matching))
        .await?
        .ok_or(AppError::AuthRequired)?;

    info!("Swiping through {} events", matching_count);

    Ok(Html(pages::swipe(matching_count)))
}

#[instrument(skip_all)]
pub async fn results(session: Session) -> Result<Html<String>, AppError> {
    let user = logged_in_user(&session).await?;

    Ok(Html(pages::results(user.queue.liked())))
}

pub async fn submit_event_form() -> Html<String> {
    Html(pages::submit_event())
}

#[instrument(skip_all)]
pub async fn submit_event(
    State(state): State<AppState>,
    Form(form): Form<SubmitEventForm>,
) -> Result<Redirect, AppError> {
    let event = form.into_event()?;

    info!("Event '{}' submitted", event.name);

    state.events.append(event).await?;

    Ok(Redirect::to("/swipe"))
}

async fn logged_in_user(session: &Session) -> Result<UserSession, AppError> {
    get_user_session(session)
        .await?
        .filter(|user| user.logged_in)
        .ok_or(AppError::AuthRequired)
}
