use super::model::UserSession;
use crate::config::model::{SessionConfig, MAX_SESSION_TTL_HOURS};
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::session::Error;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::debug;

pub const SESSION_COOKIE: &str = "session";
const USER_SESSION_KEY: &str = "user";

/// In-memory sessions behind an `HttpOnly; SameSite=Lax` cookie, expiring after `ttl_hours` of inactivity
pub fn session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    let ttl_hours = config.ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS);

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_path("/")
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnInactivity(Duration::hours(ttl_hours)))
}

pub async fn get_user_session(session: &Session) -> Result<Option<UserSession>, Error> {
    session.get(USER_SESSION_KEY).await
}

pub async fn set_user_session(session: &Session, user: &UserSession) -> Result<(), Error> {
    session.insert(USER_SESSION_KEY, user).await
}

/// Read-modify-write of the user's state, saved back before returning
pub async fn update_user_session<F, R>(session: &Session, f: F) -> Result<Option<R>, Error>
where
    F: FnOnce(&mut UserSession) -> R,
{
    let Some(mut user) = get_user_session(session).await? else {
        debug!("No user session to update");
        return Ok(None);
    };

    let result = f(&mut user);
    set_user_session(session, &user).await?;

    Ok(Some(result))
}

pub async fn clear_user_session(session: &Session) -> Result<(), Error> {
    session.flush().await
}
