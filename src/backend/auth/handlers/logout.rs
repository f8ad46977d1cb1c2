/**
 * Logout Handler
 *
 * `GET /logout` revokes the current session, whatever its remaining
 * lifetime, and clears the cookie. It works without a session too, so a
 * stale browser still ends up on the login page with the same message.
 */

use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::{session_cookie_removal, SessionManager, SESSION_COOKIE};
use crate::backend::flash::{self, FlashJar, FlashMessage};
use crate::backend::middleware::LOGIN_PATH;

pub const LOGGED_OUT_MESSAGE: &str = "Successfully logged out.";

pub async fn logout(
    State(sessions): State<SessionManager>,
    jar: CookieJar,
    flash_jar: FlashJar,
) -> (CookieJar, FlashJar, Redirect) {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string());

    if let Some(token) = token {
        match sessions.decode(&token) {
            Ok(principal) => {
                sessions.revoke(&principal).await;
                tracing::info!(session_id = %principal.session_id, "User logged out: {}", principal.username);
            }
            Err(e) => tracing::debug!("Ignoring unreadable session on logout: {}", e),
        }
    }

    let jar = jar.remove(session_cookie_removal());
    let flash_jar = flash::push(flash_jar, FlashMessage::message(LOGGED_OUT_MESSAGE));
    (jar, flash_jar, Redirect::to(LOGIN_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::session_cookie;
    use crate::backend::flash::take;
    use axum_extra::extract::cookie::Key;
    use chrono::Utc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_logout_revokes_and_clears() {
        let sessions = SessionManager::new("secret", Duration::from_secs(300)).unwrap();
        let (token, _) = sessions.issue("admin", Utc::now()).unwrap();
        let jar = CookieJar::new().add(session_cookie(token.clone()));

        let flash_jar = FlashJar::new(Key::generate());

        let (jar, flash_jar, _redirect) = logout(State(sessions.clone()), jar, flash_jar).await;

        assert!(jar.get(SESSION_COOKIE).is_none());
        assert!(sessions.authenticate(&token, Utc::now()).await.is_err());
        let (_, flashes) = take(flash_jar);
        assert_eq!(flashes, vec![FlashMessage::message(LOGGED_OUT_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let sessions = SessionManager::new("secret", Duration::from_secs(300)).unwrap();
        let flash_jar = FlashJar::new(Key::generate());
        let (_, flash_jar, _redirect) = logout(State(sessions.clone()), CookieJar::new(), flash_jar).await;

        assert_eq!(sessions.revoked_count().await, 0);
        let (_, flashes) = take(flash_jar);
        assert_eq!(flashes.len(), 1);
    }
}
