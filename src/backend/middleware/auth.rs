/**
 * Authentication Middleware
 *
 * Gate for the admin routes. The session cookie must hold a token that
 * verifies, has not expired at the time of the request, has not been
 * revoked, and names a user that still exists. Anything else is sent to the
 * login page with a flash message. An accepted `Principal` is attached to
 * the request extensions for handlers to extract.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::backend::auth::sessions::{session_cookie_removal, Principal, SESSION_COOKIE};
use crate::backend::auth::users::user_exists;
use crate::backend::error::BackendError;
use crate::backend::flash::{self, FlashJar, FlashMessage};
use crate::backend::server::state::AppState;

/// Where unauthenticated requests are sent
pub const LOGIN_PATH: &str = "/login";

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";

/// Authentication middleware
///
/// 1. Reads the session token from the cookie
/// 2. Verifies it and checks expiry against the current time
/// 3. Confirms the user still exists
/// 4. Attaches the `Principal` to the request
///
/// Rejected requests get a 303 to `/login`; a database failure while looking
/// up the user is an error response instead.
pub async fn require_principal(
    State(app_state): State<AppState>,
    jar: CookieJar,
    flash_jar: FlashJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string());
    let Some(token) = token else {
        tracing::debug!(path = %request.uri().path(), "No session cookie");
        return redirect_to_login(jar, flash_jar);
    };

    let principal = match app_state.sessions.authenticate(&token, Utc::now()).await {
        Ok(principal) => principal,
        Err(e) => {
            tracing::info!(path = %request.uri().path(), "Session rejected: {}", e);
            return redirect_to_login(jar.remove(session_cookie_removal()), flash_jar);
        }
    };

    match user_exists(&app_state.pool, &principal.username).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(username = %principal.username, "Session for unknown user");
            return redirect_to_login(jar.remove(session_cookie_removal()), flash_jar);
        }
        Err(e) => return BackendError::from(e).into_response(),
    }

    request.extensions_mut().insert(principal);
    next.run(request).await
}

fn redirect_to_login(jar: CookieJar, flash_jar: FlashJar) -> Response {
    let flash_jar = flash::push(flash_jar, FlashMessage::message(LOGIN_REQUIRED_MESSAGE));
    (jar, flash_jar, Redirect::to(LOGIN_PATH)).into_response()
}

/// Axum extractor for the principal attached by `require_principal`
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Principal>().cloned().ok_or_else(|| {
            tracing::warn!("Principal not found in request extensions");
            BackendError::handler(StatusCode::UNAUTHORIZED, "login required")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use axum_extra::extract::cookie::Key;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_extract_principal() {
        let principal = Principal {
            username: "admin".to_string(),
            session_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            expires_at: Utc::now(),
        };
        let mut request = HttpRequest::builder().uri("/admin").body(()).unwrap();
        request.extensions_mut().insert(principal.clone());
        let (mut parts, _) = request.into_parts();

        let extracted = Principal::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, principal);
    }

    #[tokio::test]
    async fn test_extract_principal_missing() {
        let request = HttpRequest::builder().uri("/admin").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = Principal::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap_err().status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_redirect_to_login() {
        let response = redirect_to_login(CookieJar::new(), FlashJar::new(Key::generate()));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], LOGIN_PATH);
        assert!(response.headers().get("set-cookie").is_some());
    }
}
